use crate::api_client::ApiClient;
use crate::config::Config;
use crate::error::{ApiError, AssistantError};
use crate::models::*;
use crate::query::QueryCoordinator;
use crate::upload::UploadCoordinator;
use crate::view::{SessionState, SharedState, ViewState};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Owns the session state and routes user actions to the coordinators.
/// Clones share the same state, so upload and ask may run concurrently from different tasks.
#[derive(Clone)]
pub struct Session {
    client: Arc<ApiClient>,
    state: SharedState,
    upload: UploadCoordinator,
    query: QueryCoordinator,
}

impl Session {
    pub fn new(config: Config) -> Self {
        log::info!("Starting session against {}", config.base_url);

        let state = Arc::new(RwLock::new(SessionState::new(config.history_limit)));
        let client = Arc::new(ApiClient::new(config));
        let upload = UploadCoordinator::new(client.clone(), state.clone());
        let query = QueryCoordinator::new(client.clone(), state.clone());

        Self {
            client,
            state,
            upload,
            query,
        }
    }

    pub fn from_env() -> Self {
        Self::new(Config::from_env())
    }

    /// Picks a new file. Drops the current document, answer, history and error.
    pub async fn choose_file(&self, path: impl Into<PathBuf>) -> Result<(), AssistantError> {
        self.select(PendingSelection::from_path(path)).await
    }

    pub async fn select(&self, selection: PendingSelection) -> Result<(), AssistantError> {
        let mut state = self.state.write().await;
        if !selection.is_pdf() {
            let err = AssistantError::NotPdf;
            state.error = Some(err.to_string());
            return Err(err);
        }

        log::debug!("Selected {}", selection.filename);
        state.selection = Some(selection);
        state.selection_generation += 1;
        state.document = None;
        state.answer = None;
        state.history.clear();
        state.error = None;
        Ok(())
    }

    pub async fn set_question(&self, question: impl Into<String>) {
        self.state.write().await.question = question.into();
    }

    pub async fn upload(&self) -> Result<DocumentInfo, AssistantError> {
        self.upload.upload().await
    }

    pub async fn ask(&self) -> Result<QaRecord, AssistantError> {
        self.query.ask().await
    }

    /// Replaces the draft with `question` and submits it.
    pub async fn ask_question(&self, question: impl Into<String>) -> Result<QaRecord, AssistantError> {
        self.set_question(question).await;
        self.ask().await
    }

    pub async fn clear_history(&self) {
        self.state.write().await.history.clear();
    }

    pub async fn view(&self) -> ViewState {
        self.state.read().await.snapshot()
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.client.health().await
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn offline_session() -> Session {
        Session::new(Config::new("http://127.0.0.1:1", None))
    }

    #[tokio::test]
    async fn choosing_a_file_resets_document_answer_and_history() {
        let session = offline_session();
        {
            let mut state = session.state.write().await;
            state.document = Some(DocumentInfo {
                document_id: "old".into(),
                filename: "old.pdf".into(),
                char_count: 1,
            });
            state.answer = Some("answer".into());
            state.error = Some("error".into());
            state.history.record("q".into(), "a".into(), Utc::now());
        }

        session.choose_file("/papers/new.pdf").await.unwrap();

        let view = session.view().await;
        assert_eq!(view.selected_file.as_deref(), Some("new.pdf"));
        assert_eq!(view.document, None);
        assert_eq!(view.answer, None);
        assert_eq!(view.error, None);
        assert!(view.history.is_empty());
    }

    #[tokio::test]
    async fn non_pdf_selection_is_rejected() {
        let session = offline_session();
        session.choose_file("/papers/keep.pdf").await.unwrap();

        let err = session.choose_file("/papers/notes.docx").await.unwrap_err();
        assert!(matches!(err, AssistantError::NotPdf));

        let view = session.view().await;
        assert_eq!(view.selected_file.as_deref(), Some("keep.pdf"));
        assert_eq!(view.error.as_deref(), Some("Only PDF files are supported."));
    }

    #[tokio::test]
    async fn set_question_updates_draft() {
        let session = offline_session();
        session.set_question("What is the main contribution?").await;
        assert_eq!(session.view().await.question, "What is the main contribution?");
    }
}
