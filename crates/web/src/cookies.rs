//! Minimal cookie helpers.
//!
//! The app sets exactly two cookies -- the session token and the one-shot
//! flash code -- and both values are cookie-safe tokens, so a full cookie
//! crate is not needed. Parsing mirrors how the auth extractor reads request
//! headers elsewhere in this crate.

use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};

/// Name of the session cookie holding the opaque session token.
pub const SESSION_COOKIE: &str = "session";

/// Name of the one-shot flash cookie holding a [`crate::flash::Flash`] code.
pub const FLASH_COOKIE: &str = "flash";

/// Read a cookie value from the request `Cookie` header.
pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let raw = headers.get(COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Build a `Set-Cookie` value for an HttpOnly cookie with the given lifetime.
pub fn set_cookie(name: &str, value: &str, max_age_secs: i64) -> HeaderValue {
    HeaderValue::from_str(&format!(
        "{name}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    ))
    .expect("cookie values are ASCII tokens")
}

/// Build a `Set-Cookie` value that removes the named cookie.
pub fn clear_cookie(name: &str) -> HeaderValue {
    set_cookie(name, "", 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn finds_cookie_among_several() {
        let headers = headers_with_cookie("theme=dark; session=abc123; flash=login_required");
        assert_eq!(get_cookie(&headers, "session"), Some("abc123"));
        assert_eq!(get_cookie(&headers, "flash"), Some("login_required"));
        assert_eq!(get_cookie(&headers, "missing"), None);
    }

    #[test]
    fn no_cookie_header_is_none() {
        assert_eq!(get_cookie(&HeaderMap::new(), "session"), None);
    }

    #[test]
    fn set_and_clear_cookie_shape() {
        let set = set_cookie("session", "abc", 3600);
        assert_eq!(
            set.to_str().unwrap(),
            "session=abc; Path=/; HttpOnly; SameSite=Lax; Max-Age=3600"
        );

        let clear = clear_cookie("flash");
        assert!(clear.to_str().unwrap().contains("Max-Age=0"));
    }
}
