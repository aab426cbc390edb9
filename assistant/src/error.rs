use reqwest::StatusCode;
use std::fmt;

/// Failures of a single HTTP exchange with the assistant service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Upload,
    Ask,
}

impl Action {
    /// Shown when the service rejects the request without a `detail`.
    pub fn rejected_message(self) -> &'static str {
        match self {
            Action::Upload => "Upload failed",
            Action::Ask => "Failed to get answer",
        }
    }

    /// Shown when the request never produced a usable response.
    pub fn transport_message(self) -> &'static str {
        match self {
            Action::Upload => "Failed to upload PDF",
            Action::Ask => "Error while asking question",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Upload => write!(f, "An upload"),
            Action::Ask => write!(f, "A question"),
        }
    }
}

/// Errors surfaced by session actions. `Display` is the banner text.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Please choose a PDF file first.")]
    NoFileSelected,

    #[error("Only PDF files are supported.")]
    NotPdf,

    #[error("Upload a PDF first.")]
    NoDocument,

    #[error("Type a question about the paper.")]
    EmptyQuestion,

    #[error("{0} is already in progress.")]
    Busy(Action),

    #[error("{message}")]
    Remote { status: StatusCode, message: String },

    #[error("{message}")]
    Transport {
        message: &'static str,
        #[source]
        source: ApiError,
    },
}

impl AssistantError {
    pub fn from_api(action: Action, err: ApiError) -> Self {
        match err {
            ApiError::Status { status, detail } => AssistantError::Remote {
                status,
                message: detail.unwrap_or_else(|| action.rejected_message().to_string()),
            },
            other => AssistantError::Transport {
                message: action.transport_message(),
                source: other,
            },
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AssistantError::NoFileSelected
                | AssistantError::NotPdf
                | AssistantError::NoDocument
                | AssistantError::EmptyQuestion
        )
    }
}
