use thiserror::Error;

#[derive(Error, Debug)]
pub enum AinavError {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<confique::Error> for AinavError {
    fn from(err: confique::Error) -> Self {
        AinavError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AinavError>;
