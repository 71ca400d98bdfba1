//! Welcome endpoint

use axum::routing::get;
use axum::Router;

/// GET /
async fn welcome() -> &'static str {
    "Welcome to the Todo API!"
}

/// Root route
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}
