//! Extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! Axum's stock `Json` and `Path` extractors reply with plain-text bodies
//! and, for JSON, a mix of 400/415/422. Handlers use these wrappers so every
//! malformed request is a 400 in the same `{ "error", "code" }` shape.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// JSON request body. Any rejection (syntax, data, content type) is a 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. A segment that fails to parse is a 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
