//! Error types for the blog insights service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use blog_api_client::BlogApiError;
use serde_json::json;
use std::fmt;
use std::sync::Arc;

/// Startup errors surfaced from `main`
#[derive(Debug)]
pub enum ServiceError {
    Client(BlogApiError),
    Io(Box<std::io::Error>),
    Config(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Client(err) => write!(f, "Blog API client error: {}", err),
            ServiceError::Io(err) => write!(f, "IO error: {}", err),
            ServiceError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Client(err) => Some(err),
            ServiceError::Io(err) => Some(err.as_ref()),
            ServiceError::Config(_) => None,
        }
    }
}

impl From<BlogApiError> for ServiceError {
    fn from(err: BlogApiError) -> Self {
        ServiceError::Client(err)
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::Io(Box::new(err))
    }
}

impl From<tracing_subscriber::filter::ParseError> for ServiceError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        ServiceError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Request-path error type that converts to HTTP responses
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Upstream(Arc<BlogApiError>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(e) => {
                tracing::error!(error = %e, "Failed to fetch blogs from upstream");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

impl From<Arc<BlogApiError>> for AppError {
    fn from(e: Arc<BlogApiError>) -> Self {
        AppError::Upstream(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ServiceError::Config("bad directive".to_string());
        assert_eq!(format!("{}", err), "Configuration error: bad directive");
    }

    #[test]
    fn test_client_error_display() {
        let err = ServiceError::Client(BlogApiError::Status(503));
        assert!(format!("{}", err).contains("status 503"));
    }

    #[tokio::test]
    async fn test_bad_request_keeps_message() {
        let response = AppError::BadRequest("Missing query parameter".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Missing query parameter");
    }

    #[tokio::test]
    async fn test_upstream_error_is_generic() {
        let response =
            AppError::Upstream(Arc::new(BlogApiError::Decode("eof".into()))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal server error");
    }
}
