use axum::routing::get;
use axum::Router;

use crate::handlers::greeting;
use crate::state::AppState;

/// ```text
/// GET /{name}    -> greet
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{name}", get(greeting::greet))
}
