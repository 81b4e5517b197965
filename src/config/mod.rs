//! Process configuration: database settings from `.env` and the environment.

mod env;

pub use env::*;
