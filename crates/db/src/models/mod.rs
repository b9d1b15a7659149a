//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the create DTO used for inserts.

pub mod item;
pub mod link;
pub mod session;
pub mod user;
