//! Shared utilities: Unicode-aware text measurement for list rendering and
//! URL validation for the external-browser handoff.

mod text;
mod url_validator;

pub use text::{display_width, truncate_to_width};
pub use url_validator::validate_url_for_open;
