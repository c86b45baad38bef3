pub mod landing;
pub mod planner;

use axum::http::{HeaderMap, HeaderName};

/// Client hint asking the browser to report its colour-scheme preference.
pub const ACCEPT_CH: HeaderName = HeaderName::from_static("accept-ch");
pub const PREFERS_COLOR_SCHEME: &str = "sec-ch-prefers-color-scheme";

/// Whether the browser reported a dark system theme.
pub fn prefers_dark(headers: &HeaderMap) -> bool {
    headers
        .get(PREFERS_COLOR_SCHEME)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
        .unwrap_or(false)
}

#[cfg(test)]
mod hint_tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn reads_quoted_and_bare_hint() {
        let mut headers = HeaderMap::new();
        assert!(!prefers_dark(&headers));
        headers.insert(PREFERS_COLOR_SCHEME, HeaderValue::from_static("\"dark\""));
        assert!(prefers_dark(&headers));
        headers.insert(PREFERS_COLOR_SCHEME, HeaderValue::from_static("light"));
        assert!(!prefers_dark(&headers));
    }
}
