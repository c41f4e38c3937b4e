use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A task on the blocking thread pool panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),

    /// bcrypt failed to hash or verify a password.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Signing a JWT failed.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    /// A row that was just written could not be read back.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("{table} {id} missing after insert")]
    MissingAfterInsert { table: &'static str, id: i32 },
}
