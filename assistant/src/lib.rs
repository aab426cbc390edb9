pub mod models;
pub mod config;
pub mod error;
pub mod api_client;
pub mod history;
pub mod view;
pub mod upload;
pub mod query;
pub mod session;
pub mod render;

pub use models::*;
pub use config::{parse_history_limit, Config, DEFAULT_BASE_URL};
pub use error::{Action, ApiError, AssistantError};
pub use api_client::ApiClient;
pub use history::ConversationLog;
pub use view::{SessionState, ViewState};
pub use upload::UploadCoordinator;
pub use query::QueryCoordinator;
pub use session::Session;
