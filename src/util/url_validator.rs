use url::Url;

/// Validate an article URL before handing it to the system browser.
///
/// Article URLs come from a third-party API response, so they are checked
/// before being passed to `open::that`: only http(s) may reach the
/// external viewer, never `file://` or other local schemes.
///
/// Returns a human-readable rejection reason suitable for the status bar.
pub fn validate_url_for_open(url_str: &str) -> Result<(), String> {
    let url = Url::parse(url_str).map_err(|e| format!("Invalid URL: {}", e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(format!("Refusing to open {} URL", scheme)),
    }
}
