//! Directory error types.

use thiserror::Error;
use uuid::Uuid;

/// Directory errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Unique username or email constraint violated
    #[error("{field} is already registered")]
    DuplicateIdentity { field: &'static str },

    /// Bad credentials; deliberately does not say which part was wrong
    #[error("Invalid username or password")]
    AuthFailed,

    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),

    /// No profile linked to the given account
    #[error("No profile for account: {0}")]
    ProfileNotFound(Uuid),

    /// Account already has a linked profile
    #[error("Account already has a profile: {0}")]
    ProfileAlreadyExists(Uuid),

    /// Input validation failure
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(#[from] enroll_storage::StorageError),

    /// Cryptographic error
    #[error("Cryptographic error: {0}")]
    Crypto(#[from] enroll_crypto::CryptoError),
}

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
