use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A blog record as served upstream.
///
/// Only `title` is interpreted; every other field is carried through
/// untouched so it can be echoed back to clients. A record without a title
/// reads as an empty title rather than failing the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Blog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extra: Map::new(),
        }
    }
}

/// Envelope returned by the REST endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct BlogsResponse {
    pub blogs: Vec<Blog>,
}
