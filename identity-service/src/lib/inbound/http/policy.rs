use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::RequestIdentity;
use crate::inbound::http::router::AppState;

/// Authentication requirement of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable without an identity (the auth endpoints)
    Public,
    /// Requires a resolved identity
    Protected,
    /// Not part of the served surface
    Denied,
}

/// Static route classification, fixed at startup.
///
/// Classification is binary allow/deny per class; the role stored on an
/// identity is not consulted.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    public_prefix: &'static str,
    protected_prefix: &'static str,
}

impl AccessPolicy {
    pub fn new() -> Self {
        Self {
            public_prefix: "/api/v1/auth",
            protected_prefix: "/api",
        }
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        if path.starts_with(self.public_prefix) {
            RouteClass::Public
        } else if path.starts_with(self.protected_prefix) {
            RouteClass::Protected
        } else {
            RouteClass::Denied
        }
    }

    /// Decide whether a request may proceed to its handler.
    pub fn check(
        &self,
        path: &str,
        identity: Option<&RequestIdentity>,
    ) -> Result<RouteClass, ApiError> {
        match self.classify(path) {
            RouteClass::Public => Ok(RouteClass::Public),
            RouteClass::Protected if identity.is_some() => Ok(RouteClass::Protected),
            RouteClass::Protected => Err(ApiError::Unauthorized),
            RouteClass::Denied => Err(ApiError::Unauthorized),
        }
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Access-decision step of the request pipeline.
///
/// Runs after identity resolution and is the single place that rejects
/// requests on authentication grounds.
pub async fn enforce_access(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path();
    let identity = req.extensions().get::<RequestIdentity>();

    match state.policy.check(path, identity) {
        Ok(_) => next.run(req).await,
        Err(err) => {
            tracing::warn!(path = %path, "Access denied");
            err.into_response()
        }
    }
}
