mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use htx_agri_api::http::routes::health;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

#[tokio::test]
async fn health_is_reachable_through_the_app() {
    let (status, json) = common::send_request(&common::test_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn mounted_health_matches_the_standalone_router() {
    let standalone = health::router().with_state(common::test_context());
    let response = standalone
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let standalone_status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let standalone_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    let (app_status, app_json) = common::send_request(&common::test_app(), "/health").await;

    assert_eq!(app_status, standalone_status);
    assert_eq!(app_json, standalone_json);
}

#[tokio::test]
async fn mounting_health_leaves_root_untouched() {
    let app = common::test_app();

    let (root_status, root_json) = common::send_request(&app, "/").await;
    let (health_status, _) = common::send_request(&app, "/health").await;

    assert_eq!(health_status, StatusCode::OK);
    assert_eq!(root_status, StatusCode::OK);
    assert_eq!(
        root_json,
        serde_json::json!({ "message": "HTX Agri API is running" })
    );
}
