use crate::api_client::ApiClient;
use crate::error::{Action, ApiError, AssistantError};
use crate::models::*;
use crate::view::SharedState;
use std::sync::Arc;

/// Turns the pending file selection into a server-side document.
#[derive(Clone)]
pub struct UploadCoordinator {
    client: Arc<ApiClient>,
    state: SharedState,
}

impl UploadCoordinator {
    pub fn new(client: Arc<ApiClient>, state: SharedState) -> Self {
        Self { client, state }
    }

    pub async fn upload(&self) -> Result<DocumentInfo, AssistantError> {
        let (selection, generation) = {
            let mut state = self.state.write().await;
            if state.uploading {
                return Err(AssistantError::Busy(Action::Upload));
            }

            let Some(selection) = state.selection.clone() else {
                let err = AssistantError::NoFileSelected;
                state.error = Some(err.to_string());
                return Err(err);
            };

            state.error = None;
            state.answer = None;
            state.uploading = true;
            (selection, state.selection_generation)
        };

        let result = self.send(&selection).await;

        let mut state = self.state.write().await;
        state.uploading = false;

        // A different file was chosen while this one was in flight; leave that choice alone.
        if state.selection_generation != generation {
            log::warn!(
                "Discarding upload result for {}: a new file was chosen",
                selection.filename
            );
            return result.map_err(|err| AssistantError::from_api(Action::Upload, err));
        }

        match result {
            Ok(document) => {
                log::info!(
                    "Uploaded {} as {} ({} chars)",
                    document.filename,
                    document.document_id,
                    document.char_count
                );
                state.document = Some(document.clone());
                state.selection = None;
                state.error = None;
                Ok(document)
            }
            Err(err) => {
                let err = AssistantError::from_api(Action::Upload, err);
                log::error!("Upload of {} failed: {:?}", selection.filename, err);
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    async fn send(&self, selection: &PendingSelection) -> Result<DocumentInfo, ApiError> {
        let bytes = selection.read().await?;
        self.client.upload_pdf(&selection.filename, bytes).await
    }
}
