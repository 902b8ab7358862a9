use axum::extract::FromRequest;
use service_core::error::AppError;

/// `Json` extractor whose rejections render as `{"detail": ...}` like every other error.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
