use std::fmt;

/// Errors from the blog API client
#[derive(Debug)]
pub enum BlogApiError {
    /// Transport failure or unreadable body
    Http(reqwest::Error),
    /// Upstream answered with a non-success status
    Status(u16),
    /// Body was not `{ "blogs": [...] }`
    Decode(String),
}

impl fmt::Display for BlogApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Status(code) => write!(f, "Blog API returned status {code}"),
            Self::Decode(msg) => write!(f, "Invalid blog API response: {msg}"),
        }
    }
}

impl std::error::Error for BlogApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BlogApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

pub type Result<T> = std::result::Result<T, BlogApiError>;
