use std::sync::Arc;

use auth::Authenticator;
use auth::JwtHandler;
use marketplace_service::domain::product::service::CatalogService;
use marketplace_service::domain::user::service::AuthService;
use marketplace_service::inbound::http::router::create_router;
use marketplace_service::outbound::repositories::InMemoryProductRepository;
use marketplace_service::outbound::repositories::InMemoryUserRepository;
use serde_json::json;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns the real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    /// Handler sharing the app's signing secret, for forging tokens in tests
    pub jwt_handler: JwtHandler,
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

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET.as_bytes()));
        let auth_service = Arc::new(AuthService::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::clone(&authenticator),
            1,
        ));
        let catalog_service = Arc::new(CatalogService::new(Arc::new(
            InMemoryProductRepository::new(),
        )));

        let app = create_router(auth_service, catalog_service, authenticator);

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server failed");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(TEST_JWT_SECRET.as_bytes()),
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a user and log them in, returning the session token
    pub async fn register_and_login(&self, username: &str, password: &str, role: &str) -> String {
        let response = self
            .post("/api/auth/register")
            .json(&json!({
                "username": username,
                "password": password,
                "role": role
            }))
            .send()
            .await
            .expect("Failed to execute register request");
        assert!(
            response.status().is_success(),
            "Registration failed for {}",
            username
        );

        let response = self
            .post("/api/auth/login")
            .json(&json!({
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute login request");
        assert!(response.status().is_success(), "Login failed for {}", username);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Login response missing token")
            .to_string()
    }
}
