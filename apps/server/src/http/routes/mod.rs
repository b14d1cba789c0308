pub mod health;
pub mod root;

use axum::Router;

use super::ApiContext;

/// Merges every route module into a single router.
///
/// Each module contributes a self-contained [`Router`] and is mounted
/// without inspecting its contents. `merge` panics on a duplicate
/// method+path, so a collision surfaces at startup.
pub fn router() -> Router<ApiContext> {
    Router::new().merge(root::router()).merge(health::router())
}
