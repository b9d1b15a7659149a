//! Pure domain logic for the basket shop. No I/O lives here.

pub mod cart;
pub mod error;
pub mod forms;
pub mod types;
