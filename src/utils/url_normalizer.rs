//! URL validation and canonicalization.
//!
//! Input URLs are parsed and re-serialized so the stored form never depends
//! on how the caller happened to spell it (host case, default ports,
//! surrounding whitespace, percent-encoding of unsafe characters).

use url::Url;

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL has no host")]
    MissingHost,
}

/// Parses `input` as an absolute URL and returns its canonical serialization.
///
/// # Rules
///
/// 1. Leading and trailing whitespace is ignored
/// 2. A scheme and a non-empty host are required
/// 3. The host is lowercased and default ports are dropped
/// 4. Path, query and fragment are preserved
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input,
/// [`UrlNormalizationError::InvalidFormat`] for unparseable input and
/// [`UrlNormalizationError::MissingHost`] for host-less URLs such as
/// `mailto:` or `data:`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let url =
        Url::parse(trimmed).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlNormalizationError::MissingHost),
    }

    Ok(url.to_string())
}
