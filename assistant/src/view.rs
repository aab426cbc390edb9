use crate::history::ConversationLog;
use crate::models::*;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedState = Arc<RwLock<SessionState>>;

/// Everything the session knows. Only coordinators and `Session` write to it, always under one
/// write-lock acquisition per transition.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub selection: Option<PendingSelection>,
    /// Bumped on every file choice so a finishing upload can tell whether its file is still current.
    pub selection_generation: u64,
    pub document: Option<DocumentInfo>,
    pub question: String,
    pub answer: Option<String>,
    pub error: Option<String>,
    pub uploading: bool,
    pub answering: bool,
    pub history: ConversationLog,
}

impl SessionState {
    pub fn new(history_limit: Option<usize>) -> Self {
        Self {
            history: ConversationLog::with_limit(history_limit),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> ViewState {
        ViewState {
            selected_file: self.selection.as_ref().map(|s| s.filename.clone()),
            document: self.document.clone(),
            question: self.question.clone(),
            answer: self.answer.clone(),
            error: self.error.clone(),
            uploading: self.uploading,
            answering: self.answering,
            history: self.history.to_vec(),
        }
    }
}

/// Read-only copy of the session for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub selected_file: Option<String>,
    pub document: Option<DocumentInfo>,
    pub question: String,
    pub answer: Option<String>,
    pub error: Option<String>,
    pub uploading: bool,
    pub answering: bool,
    pub history: Vec<QaRecord>,
}

impl ViewState {
    pub fn can_upload(&self) -> bool {
        !self.uploading && self.selected_file.is_some()
    }

    pub fn can_ask(&self) -> bool {
        !self.answering
    }

    pub fn shows_document_card(&self) -> bool {
        self.document.is_some()
    }

    pub fn shows_history(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn upload_label(&self) -> &'static str {
        if self.uploading {
            "Uploading…"
        } else {
            "Upload PDF"
        }
    }

    pub fn ask_label(&self) -> &'static str {
        if self.answering {
            "Thinking…"
        } else {
            "Ask"
        }
    }
}
