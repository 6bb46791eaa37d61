use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("persistence error: {0}")]
    Persistence(String),

    #[error("field must not be blank: {0}")]
    BlankField(String),

    #[error("post ids exhausted")]
    IdsExhausted,
}
