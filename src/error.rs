#[derive(Debug, thiserror::Error)]
pub enum TcgError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("{endpoint} returned status {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<figment::Error> for TcgError {
    fn from(e: figment::Error) -> Self {
        TcgError::Config(Box::new(e))
    }
}

pub type Result<T> = std::result::Result<T, TcgError>;
