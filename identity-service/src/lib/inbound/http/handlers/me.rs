use axum::extract::State;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::ports::CredentialStore;
use crate::identity::errors::StoreError;
use crate::inbound::http::middleware::RequestIdentity;
use crate::inbound::http::router::AppState;

/// Profile of the calling identity.
///
/// Protected route; the access-decision step guarantees an identity is
/// attached before this handler runs.
pub async fn me(
    State(state): State<AppState>,
    identity: Option<Extension<RequestIdentity>>,
) -> Result<Json<ProfileResponseData>, ApiError> {
    let Some(Extension(identity)) = identity else {
        return Err(ApiError::Unauthorized);
    };

    let stored = state
        .credential_store
        .find_by_email(&identity.email)
        .await
        .map_err(|e: StoreError| {
            tracing::error!(error = %e, "Profile lookup failed");
            ApiError::InternalServerError
        })?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json((&stored).into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileResponseData {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for ProfileResponseData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.email.as_str().to_string(),
            role: identity.role.to_string(),
            created_at: identity.created_at,
        }
    }
}
