//! # Estia Core
//!
//! Everything one watcher invocation does between "configuration is valid"
//! and "process exits":
//!
//! - [`AlertGate`]: marker file per unit type; present means already alerted
//! - [`FailureCounter`]: JSON counter capping alerts for unexpected errors
//! - [`AvailabilityChecker`]: click a unit summary, read its status text
//! - [`Watcher`]: runs both unit checks in one browser session and routes
//!   anomalies and generic errors to the notifier
//! - [`ChromeLauncher`]: the real browser behind [`SessionLauncher`]

mod checker;
mod chrome;
pub mod connectivity;
mod counter;
mod error;
mod gate;
mod unit;
mod watcher;

pub use checker::{AvailabilityChecker, UnitProbe};
pub use chrome::{ChromeLauncher, ChromeSession};
pub use counter::{CounterRecord, FailureCounter};
pub use error::{AnomalyKind, WatchError};
pub use gate::{AlertGate, GateState, MARKER_PLACEHOLDER};
pub use unit::{UnitKind, UnitTarget};
pub use watcher::{
    GenericErrorOutcome, RunOutcome, SessionLauncher, UnitReport, UnitStatus, Watcher,
    GENERIC_ALERT_MAX_CHARS,
};
