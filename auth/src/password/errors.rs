use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error conditions: a digest that cannot be parsed
/// counts as a failed verification, not a fault.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
