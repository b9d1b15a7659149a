//! Registration and login form types with pure validation.
//!
//! Validation never raises: callers get a `Result<(), ValidationErrors>` from
//! [`validator::Validate::validate`] and decide how to render the messages.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Form body for `POST /register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Form body for `POST /login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Flatten [`ValidationErrors`] into display-ready messages, sorted for
/// deterministic rendering.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid"),
            })
        })
        .collect();
    messages.sort();
    messages
}
