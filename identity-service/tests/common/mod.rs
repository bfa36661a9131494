use std::sync::Arc;

use auth::TokenClaims;
use auth::TokenService;
use identity_service::domain::identity::ports::CredentialStore;
use identity_service::domain::identity::service::AuthService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryCredentialStore;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over an in-memory store
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub store: Arc<InMemoryCredentialStore>,
    pub token_service: Arc<TokenService>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(InMemoryCredentialStore::new());
        let token_service = Arc::new(TokenService::new(TEST_SECRET));

        let credential_store: Arc<dyn CredentialStore> = Arc::clone(&store);
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&credential_store),
            Arc::clone(&token_service),
        ));

        let router = create_router(
            auth_service,
            Arc::clone(&token_service),
            credential_store,
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            store,
            token_service,
        }
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Register an identity and return the issued token.
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/v1/auth/register")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }
}

/// Sign arbitrary claims with the test secret, bypassing `TokenService::issue`.
pub fn mint_token(subject: &str, iat: i64, exp: i64) -> String {
    let claims = TokenClaims {
        sub: subject.to_string(),
        iat,
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("Failed to encode token")
}
