mod health;
mod reverse;

use axum::Router;

/// Build the complete application router.
///
/// Structure:
/// - `GET /` — client address page
/// - `GET /health` — lightweight health check for container platforms
pub fn router() -> Router {
    Router::new()
        .merge(reverse::router())
        .merge(health::router())
}
