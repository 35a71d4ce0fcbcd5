//! HTTP-level integration tests for the calculations surface: evaluation
//! outcomes are tagged on the record, never surfaced as HTTP errors.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth};
use sqlx::PgPool;

/// A valid expression is evaluated and stored as done.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_valid_expression_yields_result(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_user_id, token) = common::register_and_login(app.clone(), "calcuser").await;

    let body = serde_json::json!({ "expression": "2+2" });
    let response = post_json_auth(app.clone(), "/api/v1/calculations", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["expression"], "2+2");
    assert_eq!(json["data"]["status"], "done");
    assert_eq!(json["data"]["result"], "4");
    assert!(json["data"]["error"].is_null());
}

/// Division by zero fails the enrichment but the record is still created
/// and retrievable, with the failure on the record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_division_by_zero_is_recorded(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_user_id, token) = common::register_and_login(app.clone(), "divzero").await;

    let body = serde_json::json!({ "expression": "1/0" });
    let response = post_json_auth(app.clone(), "/api/v1/calculations", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let calc_id = json["data"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["status"], "failed");
    assert!(json["data"]["result"].is_null());
    assert_eq!(json["data"]["error"], "division by zero");

    // Retrievable afterwards in the same failed state.
    let response = get_auth(app, &format!("/api/v1/calculations/{calc_id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "failed");
}

/// An expression shaped like a code-injection payload parses to nothing:
/// the record is created failed and nothing executes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_injection_payload_is_inert(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_user_id, token) = common::register_and_login(app.clone(), "attacker").await;

    let body = serde_json::json!({
        "expression": "__import__('os').system('touch /tmp/pwned')"
    });
    let response = post_json_auth(app, "/api/v1/calculations", &token, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "failed");
    assert!(json["data"]["result"].is_null());
    assert!(json["data"]["error"].is_string());
}

/// Empty and overlong expressions are request-level validation errors.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_expression_validation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_user_id, token) = common::register_and_login(app.clone(), "validator").await;

    let body = serde_json::json!({ "expression": "" });
    let response = post_json_auth(app.clone(), "/api/v1/calculations", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({ "expression": "1+".repeat(300) });
    let response = post_json_auth(app, "/api/v1/calculations", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Calculation history is owner-scoped.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_calculations_are_owner_scoped(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_alice_id, alice_token) = common::register_and_login(app.clone(), "alice").await;
    let (_bob_id, bob_token) = common::register_and_login(app.clone(), "bob").await;

    let body = serde_json::json!({ "expression": "6*7" });
    let response = post_json_auth(app.clone(), "/api/v1/calculations", &alice_token, body).await;
    let calc_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get_auth(app.clone(), "/api/v1/calculations", &bob_token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let response = get_auth(
        app,
        &format!("/api/v1/calculations/{calc_id}"),
        &bob_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
