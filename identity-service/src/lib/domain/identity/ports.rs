use async_trait::async_trait;

use crate::domain::identity::models::AuthenticationOutcome;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::RegisterCommand;
use crate::identity::errors::AuthError;
use crate::identity::errors::StoreError;

/// Persistence port for identity records, keyed by email uniqueness.
///
/// The store owns consistency: uniqueness of the email column and visibility
/// of writes to subsequent reads are its guarantees, not the caller's.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the identity registered under an email, if any.
    ///
    /// Lookup is an exact, case-sensitive match.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, StoreError>;

    /// Check whether an email is already registered.
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    /// Persist a new identity.
    ///
    /// # Errors
    /// * `DuplicateEmail` - The email is already taken (authoritative guard)
    /// * `Database` - Store operation failed
    async fn save(&self, identity: Identity) -> Result<Identity, StoreError>;
}

/// Port for authentication operations.
#[async_trait]
pub trait AuthenticationPort: Send + Sync + 'static {
    /// Register a new identity and issue its first token.
    ///
    /// # Errors
    /// * `EmailAlreadyInUse` - An identity already exists for this email
    /// * `Internal` - Hashing, persistence, or token issuance failed
    async fn register(&self, command: RegisterCommand)
        -> Result<AuthenticationOutcome, AuthError>;

    /// Verify credentials and issue a fresh token.
    ///
    /// # Errors
    /// * `UserNotFound` - No identity matches the email exactly
    /// * `InvalidPassword` - Password verification failed
    /// * `Internal` - Persistence or token issuance failed
    async fn login(&self, command: LoginCommand) -> Result<AuthenticationOutcome, AuthError>;
}
