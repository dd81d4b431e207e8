//! Headless browser control for the availability watcher.
//!
//! Talks to Chrome/Chromium over the Chrome DevTools Protocol (CDP) using a
//! plain WebSocket client. Chrome is launched headless on demand and killed
//! again on shutdown.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐    WebSocket     ┌──────────────────┐
//! │  estia-watch    │ ◄──────────────► │ headless Chrome  │
//! │  (this crate)   │       CDP        │                  │
//! └─────────────────┘                  └──────────────────┘
//! ```
//!
//! Elements are addressed by XPath, evaluated in the page with
//! `document.evaluate`, and clicked with real mouse events at the element's
//! centre.

pub mod cdp;
pub mod manager;

pub use cdp::{CdpClient, CdpError, PageSession};
pub use manager::{BrowserError, BrowserManager, BrowserManagerConfig};
