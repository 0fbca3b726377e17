// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

use crate::error::Result;

/// Append a cache-defeating query pair to a source URL.
///
/// Existing query parameters are kept, so both `.../pub?output=csv` and
/// `.../export.csv` work.
///
/// # Examples
/// ```
/// use ensalamento::utils::url::with_cache_buster;
///
/// let url = with_cache_buster("https://example.com/pub?output=csv", "t", 42).unwrap();
/// assert_eq!(url.as_str(), "https://example.com/pub?output=csv&t=42");
/// ```
pub fn with_cache_buster(base: &str, param: &str, stamp: i64) -> Result<Url> {
    let mut url = Url::parse(base)?;
    url.query_pairs_mut().append_pair(param, &stamp.to_string());
    Ok(url)
}

/// Strip the query string for log output.
pub fn display_without_query(url: &Url) -> String {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.to_string()
}
