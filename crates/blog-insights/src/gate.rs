//! Request gate: every API request runs against a fresh blog list

use crate::error::AppError;
use crate::server::SharedState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Ensure the blog list is loaded and attach it to the request.
///
/// Upstream failures end the request with a 500 before any handler runs.
pub async fn require_blogs(
    State(state): State<SharedState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let blogs = state.blogs.blogs().await?;
    request.extensions_mut().insert(blogs);
    Ok(next.run(request).await)
}
