//! Aggregate statistics over the blog list

use crate::types::{Blog, BlogList};
use axum::{Extension, Json};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

const PRIVACY_KEYWORD: &str = "privacy";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    pub total_blogs: usize,
    /// `None` only when there are no blogs
    pub title_of_longest_blog: Option<String>,
    pub number_of_blogs_with_privacy: usize,
    pub unique_blog_titles: Vec<String>,
}

/// Title length as UTF-16 code units, the unit clients of this API measure in
fn title_len(title: &str) -> usize {
    title.encode_utf16().count()
}

pub fn compute_stats(blogs: &[Blog]) -> BlogStats {
    let mut longest: Option<(&str, usize)> = None;
    let mut with_privacy = 0;
    let mut seen = HashSet::new();
    let mut unique_titles = Vec::new();

    for blog in blogs {
        let title = blog.title.as_str();

        // Strictly longer, so the first of equal-length titles wins
        let len = title_len(title);
        if longest.map_or(true, |(_, best)| len > best) {
            longest = Some((title, len));
        }

        if title.to_lowercase().contains(PRIVACY_KEYWORD) {
            with_privacy += 1;
        }

        if seen.insert(title) {
            unique_titles.push(title.to_string());
        }
    }

    BlogStats {
        total_blogs: blogs.len(),
        title_of_longest_blog: longest.map(|(title, _)| title.to_string()),
        number_of_blogs_with_privacy: with_privacy,
        unique_blog_titles: unique_titles,
    }
}

/// `GET /api/blog-stats`
pub async fn blog_stats(Extension(blogs): Extension<BlogList>) -> Json<BlogStats> {
    let stats = compute_stats(&blogs);
    debug!(
        total = stats.total_blogs,
        unique = stats.unique_blog_titles.len(),
        "Computed blog stats"
    );
    Json(stats)
}
