//! Watcher errors.
//!
//! Routing depends on the variant: a [`WatchError::Anomaly`] is always
//! alerted and suppresses its unit; everything else reaching the top of a
//! run is a generic error, alerted only while the failure counter is under
//! its threshold.

use std::path::PathBuf;

use thiserror::Error;

use estia_browser::BrowserError;
use estia_config::ConfigError;
use estia_notify::NotifyError;

use crate::unit::UnitKind;

/// How the page deviated from its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    /// Summary or status element could not be located or read.
    ElementMissing,
    /// Status element found, expected phrase absent.
    PhraseMissing,
}

#[derive(Debug, Error)]
pub enum WatchError {
    /// The page differs from the expected baseline for a unit type.
    #[error("{message}")]
    Anomaly {
        unit: UnitKind,
        kind: AnomalyKind,
        message: String,
    },

    /// The messaging provider failed.
    #[error("Notification failed: {0}")]
    Provider(#[from] NotifyError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed failure counter {path}: {source}")]
    CounterFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl WatchError {
    pub fn is_anomaly(&self) -> bool {
        matches!(self, WatchError::Anomaly { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomaly_display_is_message() {
        let err = WatchError::Anomaly {
            unit: UnitKind::OneBedroom,
            kind: AnomalyKind::PhraseMissing,
            message: "get notified not in element for 1 bedroom!".to_string(),
        };
        assert!(err.is_anomaly());
        assert_eq!(err.to_string(), "get notified not in element for 1 bedroom!");
    }

    #[test]
    fn test_generic_errors_are_not_anomalies() {
        let errors = vec![
            WatchError::Provider(NotifyError::NoRecipients),
            WatchError::Config(ConfigError::MissingField("MY_NUMBER".to_string())),
            WatchError::Browser(BrowserError::NotConnected),
            WatchError::Io(std::io::Error::other("disk full")),
        ];

        for err in errors {
            assert!(!err.is_anomaly(), "{} should be generic", err);
        }
    }
}
