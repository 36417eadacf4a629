//! sk-cli library
//!
//! Exposes the command handlers so they can be driven from tests with an
//! in-memory storage binding.

pub mod app;
pub mod error;
pub mod logger;

#[cfg(test)]
mod tests;

pub use app::App;
pub use error::{CliError, Result};
