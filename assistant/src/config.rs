use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// Keep at most this many history entries. `None` means unbounded.
    pub history_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            history_limit: None,
        }
    }
}

impl Config {
    /// Reads `API_BASE_URL` and `HISTORY_LIMIT`, after loading `.env` if one exists.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let base_url = env::var("API_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let history_limit = env::var("HISTORY_LIMIT")
            .ok()
            .and_then(|raw| parse_history_limit(&raw));

        Self::new(base_url, history_limit)
    }

    pub fn new(base_url: impl Into<String>, history_limit: Option<usize>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self {
            base_url,
            history_limit: history_limit.filter(|limit| *limit > 0),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Positive integers only. Anything else is logged and treated as "no limit".
pub fn parse_history_limit(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Some(limit),
        _ => {
            log::warn!("Ignoring invalid HISTORY_LIMIT value: {:?}", raw);
            None
        }
    }
}
