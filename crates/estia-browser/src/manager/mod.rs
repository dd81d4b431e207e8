//! Browser instance manager.
//!
//! Launches headless Chrome with remote debugging (or reuses one already
//! listening on the debug port), connects a CDP client and owns the single
//! page used for a run.

mod manager_core;
mod manager_page;
mod manager_types;

pub use manager_core::BrowserManager;
pub use manager_types::{BrowserError, BrowserManagerConfig};

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
