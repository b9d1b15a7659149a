//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! resolve the session, validate input, delegate to the repositories in
//! `basket-db`, and produce a redirect or a rendered page, mapping errors via
//! [`crate::error::AppError`].

pub mod auth;
pub mod cart;
pub mod catalog;
