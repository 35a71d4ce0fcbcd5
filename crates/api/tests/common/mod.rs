//! Shared test harness: builds the full application router (same
//! middleware stack as production) with a mock speech provider, plus
//! request helpers built on `tower::ServiceExt::oneshot`.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use starlus_core::recognition::{PlaceholderRecognizer, RecognitionError, SpeechRecognizer};
use tower::ServiceExt;
use uuid::Uuid;

use starlus_api::auth::jwt::JwtConfig;
use starlus_api::config::ServerConfig;
use starlus_api::router::build_app_router;
use starlus_api::state::AppState;

/// Speech provider double: resolves to a fixed transcript or a fixed
/// provider failure, with no network involved.
pub struct MockTranscriber {
    pub outcome: Result<String, String>,
}

impl MockTranscriber {
    pub fn ok(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            outcome: Err(detail.to_string()),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for MockTranscriber {
    async fn transcribe(
        &self,
        _audio: &[u8],
        _content_type: &str,
    ) -> Result<String, RecognitionError> {
        self.outcome
            .clone()
            .map_err(RecognitionError::UnreadablePayload)
    }
}

/// Build a test `ServerConfig` with safe defaults and a per-test media
/// root under the OS temp directory.
pub fn test_config() -> ServerConfig {
    let media_root = std::env::temp_dir()
        .join(format!("starlus-test-media-{}", Uuid::new_v4()))
        .to_string_lossy()
        .to_string();

    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        media_root,
        transcriber_url: "http://localhost:9090/transcribe".to_string(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers and a
/// mock transcriber that succeeds with "hello world".
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_transcriber(pool, Arc::new(MockTranscriber::ok("hello world")))
}

/// Build the application router with a caller-supplied speech provider.
pub fn build_test_app_with_transcriber(
    pool: PgPool,
    transcriber: Arc<dyn SpeechRecognizer>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        handwriting: Arc::new(PlaceholderRecognizer),
        transcriber,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header("authorization", format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Multipart upload with a single file field.
pub async fn post_file_auth(
    app: Router,
    uri: &str,
    token: &str,
    field_name: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> Response<Body> {
    post_file_parts_auth(
        app,
        uri,
        "POST",
        token,
        &[(field_name, file_name, content_type, data)],
    )
    .await
}

/// Multipart upload with arbitrary file parts, for exercising rejected and
/// extra fields. `method` is "POST" or "PUT".
pub async fn post_file_parts_auth(
    app: Router,
    uri: &str,
    method: &str,
    token: &str,
    parts: &[(&str, &str, &str, &[u8])],
) -> Response<Body> {
    const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

    let mut body = Vec::new();
    for (field_name, file_name, content_type, data) in parts {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; \
                 name=\"{field_name}\"; filename=\"{file_name}\"\r\n\
                 Content-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register a user through the API and return their id.
pub async fn register_user(app: Router, username: &str) -> i64 {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/v1/users", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["id"].as_i64().expect("id should be an integer")
}

/// Obtain an access token for a previously registered user.
pub async fn login_user(app: Router, username: &str) -> String {
    let body = serde_json::json!({
        "username": username,
        "password": "test_password_123!",
    });
    let response = post_json(app, "/api/v1/token", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}

/// Register + login in one step, returning `(user_id, access_token)`.
pub async fn register_and_login(app: Router, username: &str) -> (i64, String) {
    let user_id = register_user(app.clone(), username).await;
    let token = login_user(app, username).await;
    (user_id, token)
}
