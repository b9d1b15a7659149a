//! One-shot flash messages carried in a cookie.
//!
//! A redirect sets the `flash` cookie to a short code; the next rendered page
//! reads it, shows the matching message, and clears the cookie. Codes instead
//! of free text keep the cookie value ASCII-token safe.

use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};

use crate::cookies::{self, FLASH_COOKIE};

/// Flash message codes understood by the page renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// A protected route was hit without a session.
    LoginRequired,
    /// Registration attempted with an email that already has an account.
    EmailExists,
    /// Login attempted with an email that has no account.
    UnknownEmail,
    /// Login attempted with the wrong password.
    WrongPassword,
}

impl Flash {
    /// The cookie-safe code for this flash.
    pub fn code(self) -> &'static str {
        match self {
            Flash::LoginRequired => "login_required",
            Flash::EmailExists => "email_exists",
            Flash::UnknownEmail => "unknown_email",
            Flash::WrongPassword => "wrong_password",
        }
    }

    /// Parse a cookie code back into a flash. Unknown codes are dropped.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "login_required" => Some(Flash::LoginRequired),
            "email_exists" => Some(Flash::EmailExists),
            "unknown_email" => Some(Flash::UnknownEmail),
            "wrong_password" => Some(Flash::WrongPassword),
            _ => None,
        }
    }

    /// The user-visible message for this flash.
    pub fn message(self) -> &'static str {
        match self {
            Flash::LoginRequired => "You need to login or register to select items.",
            Flash::EmailExists => "You've already signed up with that email, log in instead!",
            Flash::UnknownEmail => "That email does not exist, please try again.",
            Flash::WrongPassword => "Password incorrect, please try again.",
        }
    }
}

/// Read the pending flash from the request headers, if any.
pub fn take(headers: &HeaderMap) -> Option<Flash> {
    cookies::get_cookie(headers, FLASH_COOKIE).and_then(Flash::from_code)
}

/// Redirect to `to`, setting the flash cookie for the next page render.
pub fn redirect_with_flash(to: &str, flash: Flash) -> Response {
    let mut response = Redirect::to(to).into_response();
    response
        .headers_mut()
        .append(SET_COOKIE, cookies::set_cookie(FLASH_COOKIE, flash.code(), 60));
    response
}

/// Attach a flash-clearing `Set-Cookie` header to a rendered page, so the
/// message shows only once.
pub fn clear_on(mut response: Response) -> Response {
    response
        .headers_mut()
        .append(SET_COOKIE, cookies::clear_cookie(FLASH_COOKIE));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;
    use axum::http::HeaderValue;

    #[test]
    fn codes_round_trip() {
        for flash in [
            Flash::LoginRequired,
            Flash::EmailExists,
            Flash::UnknownEmail,
            Flash::WrongPassword,
        ] {
            assert_eq!(Flash::from_code(flash.code()), Some(flash));
        }
        assert_eq!(Flash::from_code("garbage"), None);
    }

    #[test]
    fn redirect_sets_flash_cookie() {
        let response = redirect_with_flash("/login", Flash::LoginRequired);
        let set_cookie = response
            .headers()
            .get(SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(set_cookie.starts_with("flash=login_required"));
    }

    #[test]
    fn take_reads_flash_from_request() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("flash=email_exists"));
        assert_eq!(take(&headers), Some(Flash::EmailExists));
    }
}
