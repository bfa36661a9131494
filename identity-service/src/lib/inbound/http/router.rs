use std::sync::Arc;
use std::time::Duration;

use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::check_auth::check_auth;
use super::handlers::login::login;
use super::handlers::me::me;
use super::handlers::register::register;
use super::middleware::resolve_identity;
use super::policy::enforce_access;
use super::policy::AccessPolicy;
use crate::domain::identity::ports::AuthenticationPort;
use crate::domain::identity::ports::CredentialStore;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthenticationPort>,
    pub token_service: Arc<TokenService>,
    pub credential_store: Arc<dyn CredentialStore>,
    pub policy: Arc<AccessPolicy>,
}

pub fn create_router(
    auth_service: Arc<dyn AuthenticationPort>,
    token_service: Arc<TokenService>,
    credential_store: Arc<dyn CredentialStore>,
) -> Router {
    let state = AppState {
        auth_service,
        token_service,
        credential_store,
        policy: Arc::new(AccessPolicy::new()),
    };

    let api_routes = Router::new()
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/auth/check", get(check_auth))
        .route("/api/v1/users/me", get(me));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    // Explicit request pipeline, fixed at startup: identity resolution runs
    // first, the access decision second, then the route handlers.
    Router::new()
        .merge(api_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            enforce_access,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_identity,
        ))
        .layer(CorsLayer::permissive())
        .layer(trace_layer)
        .with_state(state)
}
