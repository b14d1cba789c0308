use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use htx_agri_api::config::Config;
use htx_agri_api::http::{self, ApiContext};
use tower::ServiceExt;

pub fn test_context() -> ApiContext {
    ApiContext {
        config: Arc::new(Config {
            address: "127.0.0.1".to_string(),
            port: 0,
        }),
    }
}

pub fn test_app() -> Router {
    http::app(test_context())
}

pub async fn send_request(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let app = app.clone();
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    (status, json)
}
