//! Health route group, mounted wholesale by the bootstrap. Probe endpoints
//! (load balancers, deployment tooling) live here.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::http::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
