#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use vibecheck_server::{api::app_router, build_state, config::Config, AppState};

pub const ADMIN_PASSWORD: &str = "let-me-in";

pub async fn build_test_app(admin_password: Option<&str>) -> (Router, Arc<AppState>, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config {
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        admin_password: admin_password.map(str::to_string),
        ..Config::default()
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state.clone(), &config), state, tmp)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };
    (status, json)
}

pub async fn vote(app: &Router, vibe_name: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/vote",
        Some(serde_json::json!({ "vibeName": vibe_name })),
    )
    .await
}

pub async fn count_of(app: &Router, vibe_name: &str) -> i64 {
    let (status, vibes) = send(app, Method::GET, "/api/vibes", None).await;
    assert_eq!(status, StatusCode::OK);
    vibes
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["name"] == vibe_name)
        .and_then(|v| v["count"].as_i64())
        .unwrap()
}
