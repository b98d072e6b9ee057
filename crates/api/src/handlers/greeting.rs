//! Root-level greeting, a routing smoke test with no persistence.

use axum::Json;
use serde_json::{json, Value};

use crate::extract::AppPath;

/// Response key, kept byte-for-byte for existing clients.
pub const GREETING_KEY: &str = "API diz:";

/// GET /{name}
pub async fn greet(AppPath(name): AppPath<String>) -> Json<Value> {
    Json(json!({ GREETING_KEY: format!("E ai {name}, tudo beleza?") }))
}
