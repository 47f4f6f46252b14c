//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and seeding the rows the API cannot create on its own.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use chrono::{FixedOffset, NaiveDate, Utc};
use club_api::{create_app, create_app_state};
use club_common::{hash_password, AppConfig};
use club_db::PgPool;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{unique_suffix, SignInRequest, SessionResponse};

/// Password given to every seeded admin
pub const ADMIN_PASSWORD: &str = "club-admin-pass";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    pub config: AppConfig,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let state = create_app_state(config.clone()).await?;
        let pool = state.pool().clone();
        let app = create_app(state)?;

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            pool,
            config,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn with_auth(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header("Authorization", format!("Bearer {token}"))
    }

    /// Today in the club's timezone, as the server sees it
    pub fn today(&self) -> NaiveDate {
        let offset = FixedOffset::east_opt(self.config.club.utc_offset_hours * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(0).unwrap());
        Utc::now().with_timezone(&offset).date_naive()
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::with_auth(self.client.get(self.url(path)), token).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(Self::with_auth(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.patch(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request with auth token
    pub async fn put_auth<T: Serialize>(&self, path: &str, token: &str, body: &T) -> Result<Response> {
        Ok(Self::with_auth(self.client.put(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with JSON body
    pub async fn delete_with_body<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::with_auth(self.client.delete(self.url(path)), token).send().await?)
    }

    /// Insert a fresh admin row and sign in as them, returning the bearer token
    pub async fn sign_in_new_admin(&self) -> Result<String> {
        let email = seed_admin(&self.pool).await?;
        let request = SignInRequest {
            email,
            password: ADMIN_PASSWORD.to_string(),
        };
        let response = self.post("/api/v1/auth/sign-in", &request).await?;
        let session: SessionResponse = assert_json(response, StatusCode::OK).await?;
        Ok(session.access_token)
    }
}

/// Create a test configuration
///
/// Migrations always run and the rate limiter is opened wide so parallel
/// tests do not trip it.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;
    config.database.run_migrations = true;
    config.rate_limit.requests_per_second = 1000;
    config.rate_limit.burst = 10_000;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    if std::env::var("JWT_SECRET").is_err() {
        eprintln!("Skipping test: JWT_SECRET not set");
        return false;
    }

    true
}

/// Admins are provisioned out of band; tests insert one directly
pub async fn seed_admin(pool: &PgPool) -> Result<String> {
    let email = format!("admin{}@example.com", unique_suffix());
    let hash = hash_password(ADMIN_PASSWORD)?;

    sqlx::query("INSERT INTO admins (email, password_hash) VALUES ($1, $2)")
        .bind(&email)
        .bind(hash)
        .execute(pool)
        .await?;

    Ok(email)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert an error status and return the `error.code` field
pub async fn assert_error_code(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("error body without code: {body}"))
}
