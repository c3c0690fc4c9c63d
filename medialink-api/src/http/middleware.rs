//! Session cookie helpers
//!
//! The dashboard and creation endpoints are gated by a single session
//! cookie holding the shared secret. Streaming routes are public.

use axum::http::{header, HeaderMap};

use crate::http::AppState;

/// Extract a cookie value from the `Cookie` request header.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Check whether the request carries a valid session cookie.
pub fn session_is_valid(headers: &HeaderMap, state: &AppState) -> bool {
    cookie_value(headers, &state.auth.cookie_name)
        .is_some_and(|token| state.verifier.verify(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_cookie_value_single() {
        let headers = headers_with_cookie("auth_token=secret");
        assert_eq!(cookie_value(&headers, "auth_token"), Some("secret"));
    }

    #[test]
    fn test_cookie_value_multiple() {
        let headers = headers_with_cookie("theme=dark; auth_token=secret; lang=en");
        assert_eq!(cookie_value(&headers, "auth_token"), Some("secret"));
    }

    #[test]
    fn test_cookie_value_missing() {
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(cookie_value(&headers, "auth_token"), None);
        assert_eq!(cookie_value(&HeaderMap::new(), "auth_token"), None);
    }
}
