use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;

use crate::domain::identity::models::AuthenticationOutcome;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::models::Role;
use crate::identity::errors::AuthError;
use crate::identity::ports::AuthenticationPort;
use crate::identity::ports::CredentialStore;

/// Orchestrates registration and login over the credential store.
///
/// Read-then-write without locking: the duplicate pre-check on register is a
/// fast path, and the store's uniqueness constraint remains the real
/// enforcement point under concurrent registration.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    token_service: Arc<TokenService>,
    password_hasher: PasswordHasher,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, token_service: Arc<TokenService>) -> Self {
        Self {
            store,
            token_service,
            password_hasher: PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl AuthenticationPort for AuthService {
    async fn register(
        &self,
        command: RegisterCommand,
    ) -> Result<AuthenticationOutcome, AuthError> {
        tracing::debug!(email = %command.email, "Attempting to register identity");

        if self.store.exists_by_email(command.email.as_str()).await? {
            tracing::warn!(email = %command.email, "Email already in use during registration");
            return Err(AuthError::EmailAlreadyInUse(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| AuthError::Internal(anyhow::Error::new(e)))?;

        let identity = self
            .store
            .save(Identity::new(command.email, password_hash, Role::User))
            .await?;
        tracing::info!(email = %identity.email, "Identity registered");

        let token = self
            .token_service
            .issue(identity.email.as_str())
            .map_err(|e| AuthError::Internal(anyhow::Error::new(e)))?;

        Ok(AuthenticationOutcome { token })
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthenticationOutcome, AuthError> {
        tracing::debug!(email = %command.email, "Attempting to login");

        let identity = self
            .store
            .find_by_email(&command.email)
            .await?
            .ok_or_else(|| {
                tracing::warn!(email = %command.email, "Login failed: user not found");
                AuthError::UserNotFound(command.email.clone())
            })?;

        if !self
            .password_hasher
            .verify(&command.password, &identity.password_hash)
        {
            tracing::warn!(email = %command.email, "Login failed: invalid password");
            return Err(AuthError::InvalidPassword);
        }

        // A fresh token on every login, nothing is cached
        let token = self
            .token_service
            .issue(identity.email.as_str())
            .map_err(|e| AuthError::Internal(anyhow::Error::new(e)))?;
        tracing::info!(email = %command.email, "Login succeeded");

        Ok(AuthenticationOutcome { token })
    }
}
