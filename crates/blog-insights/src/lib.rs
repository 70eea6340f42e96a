//! Blog Insights Library
//!
//! Stats and title search over an upstream blog list, with a memoized
//! upstream fetch and a per-query search cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod gate;
pub mod search;
pub mod server;
pub mod source;
pub mod stats;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result, ServiceError};
pub use server::{create_router, start_server, ServerState, SharedState};
pub use types::*;
