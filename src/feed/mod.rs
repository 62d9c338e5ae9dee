//! Headline feed pipeline.
//!
//! This module owns everything between the wire and the screen:
//!
//! - `model` - Article records, the page envelope, and deduplication
//! - `client` - HTTP client for the paginated headlines endpoint
//! - `controller` - The pagination/dedup/filter state machine

pub mod client;
pub mod controller;
pub mod model;

pub use client::{FetchError, HeadlinesClient};
pub use controller::{FeedController, LoadGate};
pub use model::{deduplicate, Article, ArticleSource, HeadlinesPage};
