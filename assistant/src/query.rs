use crate::api_client::ApiClient;
use crate::error::{Action, AssistantError};
use crate::models::*;
use crate::view::SharedState;
use chrono::Utc;
use std::sync::Arc;

/// Sends the current question draft about the current document and records the answer.
#[derive(Clone)]
pub struct QueryCoordinator {
    client: Arc<ApiClient>,
    state: SharedState,
}

impl QueryCoordinator {
    pub fn new(client: Arc<ApiClient>, state: SharedState) -> Self {
        Self { client, state }
    }

    pub async fn ask(&self) -> Result<QaRecord, AssistantError> {
        let (document_id, question) = {
            let mut state = self.state.write().await;
            if state.answering {
                return Err(AssistantError::Busy(Action::Ask));
            }

            let document_id = state
                .document
                .as_ref()
                .map(|doc| doc.document_id.clone())
                .filter(|id| !id.is_empty());
            let Some(document_id) = document_id else {
                let err = AssistantError::NoDocument;
                state.error = Some(err.to_string());
                return Err(err);
            };

            let question = state.question.trim().to_string();
            if question.is_empty() {
                let err = AssistantError::EmptyQuestion;
                state.error = Some(err.to_string());
                return Err(err);
            }

            state.error = None;
            state.answering = true;
            (document_id, question)
        };

        let start_time = std::time::Instant::now();
        let result = self.client.ask(&document_id, &question).await;

        let mut state = self.state.write().await;
        state.answering = false;
        match result {
            Ok(answer) => {
                state.answer = Some(answer.clone());
                let record = state.history.record(question, answer, Utc::now());
                state.question.clear();
                log::info!(
                    "Answered in {:?} ({} entries in history)",
                    start_time.elapsed(),
                    state.history.len()
                );
                Ok(record)
            }
            Err(err) => {
                let err = AssistantError::from_api(Action::Ask, err);
                log::error!("Question about {} failed: {:?}", document_id, err);
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
