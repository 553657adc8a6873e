//! Shared helpers for the HTTP integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::trace::TraceLayer;

use catalogo_auto::{
    catalog_routes, common_routes, ensure_catalog_schema, AppState, AutoService, PgAutoRepository,
};

/// Build the application router on `pool`, creating the catalog table first.
///
/// This mirrors the router construction in `main.rs` so tests exercise the
/// same stack that production uses.
pub async fn build_test_app(pool: PgPool) -> Router {
    ensure_catalog_schema(&pool)
        .await
        .expect("schema setup failed");
    let repo = Arc::new(PgAutoRepository::new(pool.clone()));
    let state = AppState::new(pool, AutoService::new(repo));
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(catalog_routes(state))
        .layer(TraceLayer::new_for_http())
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request build failed");
    app.oneshot(request).await.expect("request failed")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is not valid UTF-8")
}
