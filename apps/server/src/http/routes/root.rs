use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::http::ApiContext;

pub fn router() -> Router<ApiContext> {
    Router::new().route("/", get(root))
}

#[derive(Serialize)]
struct RootMessage {
    message: &'static str,
}

/// Informational endpoint confirming the API is up.
///
/// `GET /`
async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "HTX Agri API is running",
    })
}
