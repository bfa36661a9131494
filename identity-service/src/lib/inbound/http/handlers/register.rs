use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AuthResponseData;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::ports::AuthenticationPort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<Json<AuthResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .auth_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|outcome| {
            Json(AuthResponseData {
                token: outcome.token,
            })
        })
}

/// HTTP request body for registration.
///
/// Clients may send additional profile fields (display name, role wishes);
/// they are ignored here and every new identity starts as a regular user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    email: String,
    password: String,
}

impl RegisterRequestBody {
    fn try_into_command(self) -> Result<RegisterCommand, ApiError> {
        let email =
            EmailAddress::new(self.email).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(RegisterCommand::new(email, self.password))
    }
}
