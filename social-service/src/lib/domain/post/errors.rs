use thiserror::Error;

/// Error for post, comment, and like operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Post with id {0} not found!")]
    PostNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
