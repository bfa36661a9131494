use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::middleware::RequestIdentity;

/// Public probe for the authentication state of the current request.
///
/// Lives under the public prefix, so an anonymous caller reaches it; whether
/// the identity-resolution step attached anything decides the answer.
pub async fn check_auth(
    identity: Option<Extension<RequestIdentity>>,
) -> Result<Json<CheckAuthResponseData>, ApiError> {
    match identity {
        Some(Extension(identity)) => {
            tracing::info!(email = %identity.email, "Authenticated identity probe");
            Ok(Json(CheckAuthResponseData {
                email: identity.email,
                status: "authenticated".to_string(),
            }))
        }
        None => {
            tracing::warn!("Identity probe without authenticated identity");
            Err(ApiError::Unauthorized)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckAuthResponseData {
    pub email: String,
    pub status: String,
}
