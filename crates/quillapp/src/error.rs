use crate::validate::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("Post not found: {0}")]
    PostNotFound(u64),

    #[error("Comment not found: {0}")]
    CommentNotFound(u64),

    #[error("Invalid post id: {0:?}")]
    InvalidPostId(String),

    #[error("Comment text cannot be empty")]
    EmptyComment,

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, QuillError>;
