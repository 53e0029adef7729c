//! Error types for account creation and persistence.

use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AccountError {
    /// Username or password was empty or absent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An account with the same username already exists.
    #[error("Account already exists: {0}")]
    AlreadyExists(String),

    /// The backing store failed to persist the account.
    #[error("Account storage error: {0}")]
    Storage(String),
}
