//! # Estia Config
//!
//! Configuration for the availability watcher: Twilio credentials,
//! recipients, target page locators, browser options and state file paths.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
