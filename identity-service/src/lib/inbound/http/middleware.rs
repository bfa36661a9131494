use std::fmt;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::Role;
use crate::domain::identity::ports::CredentialStore;
use crate::inbound::http::router::AppState;

/// Authenticated identity attached to one request's extensions.
///
/// Rebuilt from the bearer token on every request and discarded when the
/// request ends; nothing is shared across requests.
#[derive(Debug, Clone)]
pub struct RequestIdentity {
    pub id: IdentityId,
    pub email: String,
    pub role: Role,
}

/// Why a presented bearer token did not authenticate the request.
enum RejectionReason {
    InvalidOrExpiredToken,
    UnknownSubject,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::InvalidOrExpiredToken => f.write_str("invalid or expired token"),
            RejectionReason::UnknownSubject => f.write_str("unknown subject"),
        }
    }
}

/// Identity-resolution step of the request pipeline.
///
/// Turns a bearer token into a `RequestIdentity` extension when the token is
/// fully valid for a known identity. Runs once per request and never rejects:
/// a missing header, an unparseable token, or a failed validation all leave
/// the request unauthenticated and pass it along, leaving the rejection to
/// the access-decision step.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let token = bearer_token(&req).map(str::to_owned);

    let Some(token) = token else {
        tracing::debug!("No bearer token on request, continuing unauthenticated");
        return next.run(req).await;
    };

    let Some(email) = state.token_service.extract_subject(&token) else {
        tracing::debug!("Bearer token subject is unparseable, continuing unauthenticated");
        return next.run(req).await;
    };

    // Guard against double-filtering: the first resolution wins
    if req.extensions().get::<RequestIdentity>().is_none() {
        match resolve(&state, &token, &email).await {
            Ok(identity) => {
                tracing::debug!(email = %email, "Request authenticated");
                req.extensions_mut().insert(identity);
            }
            Err(reason) => {
                tracing::warn!(email = %email, %reason, "Bearer token rejected");
            }
        }
    }

    next.run(req).await
}

async fn resolve(
    state: &AppState,
    token: &str,
    email: &str,
) -> Result<RequestIdentity, RejectionReason> {
    let identity = state
        .credential_store
        .find_by_email(email)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Credential lookup failed during resolution");
            RejectionReason::UnknownSubject
        })?
        .ok_or(RejectionReason::UnknownSubject)?;

    // Only the full check (signature, expiry, subject match) authenticates
    if !state.token_service.is_valid(token, email) {
        return Err(RejectionReason::InvalidOrExpiredToken);
    }

    Ok(RequestIdentity {
        id: identity.id,
        email: identity.email.as_str().to_string(),
        role: identity.role,
    })
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
