use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::{debug, info};

use crate::error::BlogApiError;
use crate::types::{Blog, BlogsResponse};

pub const DEFAULT_ENDPOINT: &str = "https://intent-kit-16.hasura.app/api/rest/blogs";
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// HTTP client for the blog REST endpoint
pub struct BlogApiClient {
    client: reqwest::Client,
    endpoint: String,
    admin_secret: Option<String>,
}

impl BlogApiClient {
    /// Create a client for `endpoint`.
    ///
    /// `timeout` of `None` leaves the transport default in place.
    pub fn with_options(
        endpoint: &str,
        admin_secret: Option<&str>,
        timeout: Option<Duration>,
    ) -> crate::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            admin_secret: admin_secret.map(str::to_string),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full blog list
    pub async fn fetch_blogs(&self) -> crate::Result<Vec<Blog>> {
        info!(endpoint = %self.endpoint, "Fetching blogs");

        let mut request = self
            .client
            .get(&self.endpoint)
            .header(ACCEPT, "application/json");
        if let Some(ref secret) = self.admin_secret {
            request = request.header(ADMIN_SECRET_HEADER, secret);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(BlogApiError::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        let data: BlogsResponse =
            serde_json::from_slice(&body).map_err(|e| BlogApiError::Decode(e.to_string()))?;

        debug!(count = data.blogs.len(), "Fetched blogs");

        Ok(data.blogs)
    }
}
