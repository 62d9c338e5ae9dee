//! toplines - a terminal top-headlines browser.
//!
//! Fetches paginated headlines from a NewsAPI-compatible endpoint,
//! deduplicates them client-side, filters them by title substring, and
//! renders them in a scrollable list with load-more pagination and an
//! external-browser handoff for full articles.

pub mod app;
pub mod config;
pub mod feed;
pub mod ui;
pub mod util;
