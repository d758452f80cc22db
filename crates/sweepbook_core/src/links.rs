//! Outbound link builders for addresses, phones and emails.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

static PHONE_SEPARATORS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s\-\.\(\)]+").expect("valid phone separator regex"));

/// Map search URL for a free-text address.
pub fn map_search_url(address: &str) -> String {
    let query = address.trim();
    match Url::parse_with_params(MAP_SEARCH_BASE, &[("api", "1"), ("query", query)]) {
        Ok(url) => url.into(),
        // MAP_SEARCH_BASE always parses.
        Err(_) => MAP_SEARCH_BASE.to_string(),
    }
}

/// `tel:` URI with visual separators stripped.
pub fn tel_uri(phone: &str) -> String {
    format!("tel:{}", PHONE_SEPARATORS_RE.replace_all(phone.trim(), ""))
}

pub fn mailto_uri(email: &str) -> String {
    format!("mailto:{}", email.trim())
}
