use crate::config::Config;
use anyhow::Context;
use axum::error_handling::HandleErrorLayer;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::BoxError;
use axum::{body::Body, http::Request, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{errors::display_error, governor::GovernorConfigBuilder, GovernorLayer};
use tower_request_id::{RequestId, RequestIdLayer};
use tracing::info_span;

/// Defines a common error type to use for all request handlers
mod error;

/// Contains all the routes of the application
pub mod routes;

pub use error::{Error, Result};

use tower_http::trace::TraceLayer;

/// State shared with every request handler.
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<Config>,
}

/// Builds the application router: the root route, the health route group
/// and the not-found fallback, with `context` attached as shared state.
///
/// Each call yields an independent router. [`serve`] wraps the result with
/// the middleware stack before exposing it on the network.
pub fn app(context: ApiContext) -> Router {
    Router::<ApiContext>::new()
        .merge(routes::router())
        .fallback(not_found_handler)
        .with_state(context)
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = SocketAddr::new(
        config
            .address
            .parse()
            .with_context(|| format!("invalid bind address: {}", config.address))?,
        config.port,
    );

    let governor_conf = Box::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(5)
            .finish()
            .unwrap(),
    );

    let app = app(ApiContext {
        config: Arc::new(config),
    })
    .layer(
        ServiceBuilder::new()
            .layer(RequestIdLayer)
            .layer(
                TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "unknown".into());

                    info_span!(
                        "request",
                        id = %request_id,
                        method = %request.method(),
                        uri = %request.uri()
                    )
                }),
            )
            .layer(HandleErrorLayer::new(|e: BoxError| async move {
                display_error(e)
            }))
            .layer(GovernorLayer {
                config: Box::leak(governor_conf),
            }),
    );

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        // the governor keys clients by peer IP, which needs connect info
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .context("error running HTTP server")
}

async fn not_found_handler(_: Uri) -> impl IntoResponse {
    Error::NotFound
}
