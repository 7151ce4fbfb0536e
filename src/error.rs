use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobscopeError {
    #[error("API {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Skill fetch timed out after {0}s")]
    FetchTimeout(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl JobscopeError {
    /// True for errors that describe a single failed skill lookup rather than
    /// a broken local setup. The mapper isolates these to a `None` slot.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::Http(_) | Self::FetchTimeout(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, JobscopeError>;
