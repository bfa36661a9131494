use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for Role parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

/// Error surface of the credential store port.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store's uniqueness constraint rejected the email. This is the
    /// authoritative duplicate guard; the service-level pre-check is only a
    /// fast path.
    #[error("Email already stored: {0}")]
    DuplicateEmail(String),

    #[error("Credential store failure: {0}")]
    Database(String),
}

/// Top-level error for authentication operations.
///
/// The first three kinds are user-facing and map to precise wire errors;
/// `Internal` keeps its cause for diagnostics but is never echoed to the
/// caller.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already in use. Please use a different email.")]
    EmailAlreadyInUse(String),

    #[error("User not found")]
    UserNotFound(String),

    #[error("Invalid password provided.")]
    InvalidPassword,

    #[error("Internal server error: Something went wrong")]
    Internal(#[source] anyhow::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(email) => AuthError::EmailAlreadyInUse(email),
            StoreError::Database(_) => AuthError::Internal(anyhow::Error::new(err)),
        }
    }
}
