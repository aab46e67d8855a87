//! Public base address derived from an incoming request.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Builds `<scheme>://<host>` for the request, used when no base URL is
/// configured.
///
/// The host comes from the `Host` header, falling back to the request URI
/// authority (HTTP/2). The port is kept. The scheme is the first value of
/// `X-Forwarded-Proto` when it is `http` or `https`, otherwise `http`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no host is available or the
/// `Host` header is not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let base = base_url_from_request(&headers, &Uri::from_static("/api/shorten")).unwrap();
/// assert_eq!(base, "http://sho.rt:8080");
/// ```
pub fn base_url_from_request(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header"))?
            .to_string(),
        None => uri
            .authority()
            .map(|a| a.as_str().to_string())
            .ok_or_else(|| AppError::bad_request("Missing Host header"))?,
    };

    if host.trim().is_empty() {
        return Err(AppError::bad_request("Missing Host header"));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{}://{}", scheme, host.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn path() -> Uri {
        Uri::from_static("/api/shorten")
    }

    #[test]
    fn test_base_url_simple_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("example.com"));

        assert_eq!(
            base_url_from_request(&headers, &path()).unwrap(),
            "http://example.com"
        );
    }

    #[test]
    fn test_base_url_keeps_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("localhost:4000"));

        assert_eq!(
            base_url_from_request(&headers, &path()).unwrap(),
            "http://localhost:4000"
        );
    }

    #[test]
    fn test_base_url_ipv6_with_port() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("[::1]:8080"));

        assert_eq!(
            base_url_from_request(&headers, &path()).unwrap(),
            "http://[::1]:8080"
        );
    }

    #[test]
    fn test_base_url_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("HTTPS, http"));

        assert_eq!(
            base_url_from_request(&headers, &path()).unwrap(),
            "https://s.example.com"
        );
    }

    #[test]
    fn test_base_url_ignores_unknown_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert(FORWARDED_PROTO, HeaderValue::from_static("gopher"));

        assert_eq!(
            base_url_from_request(&headers, &path()).unwrap(),
            "http://s.example.com"
        );
    }

    #[test]
    fn test_base_url_from_uri_authority() {
        let headers = HeaderMap::new();
        let uri = Uri::from_static("https://h2.example.com:8443/api/shorten");

        assert_eq!(
            base_url_from_request(&headers, &uri).unwrap(),
            "http://h2.example.com:8443"
        );
    }

    #[test]
    fn test_base_url_missing_host() {
        let headers = HeaderMap::new();

        assert!(base_url_from_request(&headers, &path()).is_err());
    }

    #[test]
    fn test_base_url_invalid_utf8() {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_bytes(&[0xFF, 0xFE, 0xFD]) {
            headers.insert(header::HOST, value);

            assert!(base_url_from_request(&headers, &path()).is_err());
        }
    }
}
