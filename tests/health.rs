//! Integration tests for the common service endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_answers_ok(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[sqlx::test]
async fn test_ready_reports_the_database(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/ready").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "ok", "database": "ok"})
    );
}

#[sqlx::test]
async fn test_version_names_the_package(pool: PgPool) {
    let app = build_test_app(pool).await;
    let response = get(app, "/version").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
