//! Blog API Client
//!
//! A small client for the Hasura REST endpoint that serves the full blog
//! list. One call, one request: no retries and no caching at this layer.

mod client;
mod error;
mod types;

pub use client::{BlogApiClient, ADMIN_SECRET_HEADER, DEFAULT_ENDPOINT};
pub use error::{BlogApiError, Result};
pub use types::Blog;
