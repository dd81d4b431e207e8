//! One watcher invocation: gate, check, alert, count.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use estia_config::{ConfigValidator, WatchConfig};
use estia_notify::Notifier;

use crate::checker::{AvailabilityChecker, UnitProbe};
use crate::counter::FailureCounter;
use crate::error::{AnomalyKind, WatchError};
use crate::gate::AlertGate;
use crate::unit::{UnitKind, UnitTarget};

/// Generic error alerts are cut to this many characters.
pub const GENERIC_ALERT_MAX_CHARS: usize = 500;

/// Opens and closes the browser session a run checks units in.
#[async_trait]
pub trait SessionLauncher: Send + Sync {
    type Session: UnitProbe;

    /// Start a session with `url` loaded.
    async fn open(&self, url: &str) -> Result<Self::Session, WatchError>;

    async fn close(&self, session: Self::Session) -> Result<(), WatchError>;
}

/// What happened to one unit type during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitStatus {
    /// Marker present, not checked.
    Skipped,
    /// Checked, baseline intact.
    Clear,
    /// Checked, anomaly alerted and marker written.
    Alerted(AnomalyKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitReport {
    pub unit: UnitKind,
    pub status: UnitStatus,
}

/// How a generic error was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericErrorOutcome {
    /// Under threshold: counted and texted.
    Alerted { previous_count: u32 },
    /// Counted, but sending the alert failed as well.
    AlertFailed { previous_count: u32 },
    /// At or over threshold: logged only.
    Silenced { count: u32 },
    /// The counter file could not be read or written; logged only.
    CounterUnavailable,
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed(Vec<UnitReport>),
    Failed {
        error: WatchError,
        outcome: GenericErrorOutcome,
    },
}

/// Runs the unit checks for one invocation and routes every failure to the
/// notifier.
pub struct Watcher {
    config: WatchConfig,
    notifier: Arc<dyn Notifier>,
    checker: AvailabilityChecker,
    units: Vec<UnitTarget>,
    counter: FailureCounter,
}

impl Watcher {
    /// Validate `config` and build a watcher.
    ///
    /// Nothing is launched or sent when validation fails.
    pub fn new(config: WatchConfig, notifier: Arc<dyn Notifier>) -> Result<Self, WatchError> {
        for warning in ConfigValidator::check(&config)? {
            warn!("Config {}: {}", warning.path, warning.message);
        }

        let checker = AvailabilityChecker::new(&config.target.url, &config.target.expected_phrase);
        let units = UnitTarget::from_config(&config);
        let counter = FailureCounter::new(
            config.state.failure_counter_path(),
            config.state.alert_threshold,
        );

        Ok(Self {
            config,
            notifier,
            checker,
            units,
            counter,
        })
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    pub fn counter(&self) -> &FailureCounter {
        &self.counter
    }

    pub fn units(&self) -> &[UnitTarget] {
        &self.units
    }

    /// Full invocation. Generic errors are handled here and reported in the
    /// outcome rather than returned.
    pub async fn run<L: SessionLauncher>(&self, launcher: &L) -> RunOutcome {
        info!(
            "checking availability {}...",
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        );

        match self.check_availability(launcher).await {
            Ok(reports) => {
                info!("Run complete");
                RunOutcome::Completed(reports)
            }
            Err(error) => {
                let outcome = self.handle_generic_error(&error).await;
                RunOutcome::Failed { error, outcome }
            }
        }
    }

    /// Open a session, check every unit in it and close it again.
    ///
    /// The session is closed on the error path too. A check error takes
    /// precedence over a close error.
    pub async fn check_availability<L: SessionLauncher>(
        &self,
        launcher: &L,
    ) -> Result<Vec<UnitReport>, WatchError> {
        let session = launcher.open(self.checker.url()).await?;
        let result = self.check_units(&session).await;
        let closed = launcher.close(session).await;

        match (result, closed) {
            (Ok(reports), Ok(())) => Ok(reports),
            (Ok(_), Err(e)) => Err(e),
            (Err(e), Ok(())) => Err(e),
            (Err(e), Err(close_err)) => {
                warn!("Failed to close browser session: {}", close_err);
                Err(e)
            }
        }
    }

    /// Check each armed unit, alerting and suppressing on anomalies.
    ///
    /// Errors returned here are generic: an anomaly whose alert could not be
    /// sent, or a marker that could not be written.
    pub async fn check_units<P>(&self, probe: &P) -> Result<Vec<UnitReport>, WatchError>
    where
        P: UnitProbe + ?Sized,
    {
        let mut reports = Vec::with_capacity(self.units.len());

        for target in &self.units {
            let gate = AlertGate::new(&target.marker_path);

            if gate.is_suppressed() {
                info!(
                    "Already checked! delete {} to check again",
                    gate.path().display()
                );
                reports.push(UnitReport {
                    unit: target.kind,
                    status: UnitStatus::Skipped,
                });
                continue;
            }

            let status = match self.checker.check(probe, target).await {
                Ok(()) => UnitStatus::Clear,
                Err(WatchError::Anomaly { kind, message, .. }) => {
                    warn!("{}", message);
                    self.notifier.notify(&message).await?;
                    gate.suppress()?;
                    UnitStatus::Alerted(kind)
                }
                Err(e) => return Err(e),
            };

            reports.push(UnitReport {
                unit: target.kind,
                status,
            });
        }

        Ok(reports)
    }

    /// Log a generic error and alert on it while the counter allows.
    pub async fn handle_generic_error(&self, err: &WatchError) -> GenericErrorOutcome {
        error!("{}", err);

        let count = match self.counter.read() {
            Ok(count) => count,
            Err(e) => {
                error!("Failure counter unavailable: {}", e);
                return GenericErrorOutcome::CounterUnavailable;
            }
        };

        if !self.counter.allows_alert(count) {
            warn!(
                "{}+ generic exceptions have occurred. delete {} to receive alerts again.",
                count,
                self.counter.path().display()
            );
            return GenericErrorOutcome::Silenced { count };
        }

        warn!("{} generic exceptions have occurred, alerting!", count);
        if let Err(e) = self.counter.increment() {
            error!("Failure counter unavailable: {}", e);
            return GenericErrorOutcome::CounterUnavailable;
        }

        match self.notifier.notify(&generic_alert_text(err)).await {
            Ok(_) => GenericErrorOutcome::Alerted {
                previous_count: count,
            },
            Err(e) => {
                error!("Failed to send error alert: {}", e);
                GenericErrorOutcome::AlertFailed {
                    previous_count: count,
                }
            }
        }
    }
}

fn generic_alert_text(err: &WatchError) -> String {
    err.to_string().chars().take(GENERIC_ALERT_MAX_CHARS).collect()
}

#[cfg(test)]
#[path = "watcher_tests.rs"]
mod tests;
