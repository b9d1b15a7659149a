//! Basket web server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! session plumbing) so integration tests and the binary entrypoint can both
//! access them.

pub mod auth;
pub mod config;
pub mod cookies;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod views;
