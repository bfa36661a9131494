use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::AuthResponseData;
use crate::domain::identity::models::LoginCommand;
use crate::domain::identity::ports::AuthenticationPort;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<AuthResponseData>, ApiError> {
    state
        .auth_service
        .login(LoginCommand::new(body.email, body.password))
        .await
        .map_err(ApiError::from)
        .map(|outcome| {
            Json(AuthResponseData {
                token: outcome.token,
            })
        })
}

/// HTTP request body for login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: String,
    password: String,
}
