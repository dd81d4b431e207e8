//! Availability check for one unit type.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use estia_config::UnitLocatorConfig;

use crate::error::{AnomalyKind, WatchError};
use crate::unit::{UnitKind, UnitTarget};

/// Reads a unit's status text from the loaded page.
///
/// Implementations click the summary element, give the page time to render
/// and return the status element's text.
#[async_trait]
pub trait UnitProbe: Send + Sync {
    async fn probe(&self, locators: &UnitLocatorConfig) -> Result<String, WatchError>;
}

/// Decides whether a unit still shows its "unavailable" baseline.
#[derive(Debug, Clone)]
pub struct AvailabilityChecker {
    url: String,
    expected_phrase: String,
}

impl AvailabilityChecker {
    pub fn new(url: impl Into<String>, expected_phrase: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            expected_phrase: expected_phrase.into().to_lowercase(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Probe `target` and compare its status text with the expected phrase.
    ///
    /// Returns [`WatchError::Anomaly`] when the probe fails for any reason or
    /// the phrase is absent. No other error is produced.
    pub async fn check<P>(&self, probe: &P, target: &UnitTarget) -> Result<(), WatchError>
    where
        P: UnitProbe + ?Sized,
    {
        info!("Checking {}", target.kind);

        let text = match probe.probe(&target.locators).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Status lookup for {} failed: {}", target.kind, e);
                return Err(self.anomaly(target.kind, AnomalyKind::ElementMissing));
            }
        };

        debug!("{} status text: {:?}", target.kind, text);

        if text.to_lowercase().contains(&self.expected_phrase) {
            info!("{} still shows '{}'", target.kind, self.expected_phrase);
            Ok(())
        } else {
            Err(self.anomaly(target.kind, AnomalyKind::PhraseMissing))
        }
    }

    /// Alert text for an anomaly on `unit`.
    pub fn anomaly_message(&self, unit: UnitKind, kind: AnomalyKind) -> String {
        match kind {
            AnomalyKind::ElementMissing => format!(
                "Failed to find GET NOTIFIED ELEMENT for {}! go to {}",
                unit, self.url
            ),
            AnomalyKind::PhraseMissing => format!(
                "{} not in element for {}! go to {}",
                self.expected_phrase, unit, self.url
            ),
        }
    }

    fn anomaly(&self, unit: UnitKind, kind: AnomalyKind) -> WatchError {
        WatchError::Anomaly {
            unit,
            kind,
            message: self.anomaly_message(unit, kind),
        }
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
