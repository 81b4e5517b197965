//! HTTP handlers.

pub mod users;
pub use users::*;
