//! Article records as delivered by the headlines endpoint.
//!
//! Field names follow the wire format (`urlToImage`, `publishedAt`), mapped
//! to snake_case via serde. Records are immutable once received; identity
//! for deduplication is full structural equality, never title alone: two
//! articles that share a title but differ in any other field (including the
//! timestamp) are distinct.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Publisher attribution nested under each article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub name: Option<String>,
}

/// One headline record.
///
/// `title` doubles as the display identity in the list; `url` is the
/// external-link target. Optional fields are frequently `null` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Response envelope for one page of headlines.
///
/// An absent or empty `articles` field signals end-of-data; the other
/// envelope fields (`status`, `totalResults`) carry nothing we act on.
#[derive(Debug, Default, Deserialize)]
pub struct HeadlinesPage {
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Appends every element of `incoming` that is not already structurally
/// present, preserving the order of `existing` followed by survivors of
/// `incoming` in arrival order. First occurrence wins; later duplicates are
/// dropped silently.
///
/// The membership check is a linear scan, so the whole merge is quadratic
/// in the number of distinct articles seen. Page sizes from the headlines
/// endpoint are small (tens of records), which keeps this well inside
/// budget; a feed orders of magnitude larger would want a hash-keyed seen
/// set alongside the ordered list.
pub fn deduplicate(existing: Vec<Article>, incoming: Vec<Article>) -> Vec<Article> {
    let mut cleaned = existing;
    for candidate in incoming {
        if !cleaned.iter().any(|seen| *seen == candidate) {
            cleaned.push(candidate);
        }
    }
    cleaned
}
