//! Marker-file alert gate.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::WatchError;

/// Content written to a marker file. Only the file's existence matters.
pub const MARKER_PLACEHOLDER: &str = "delete me to continue checking!";

/// Whether a unit type is still being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No marker file: the unit is checked on every run.
    Armed,
    /// Marker file present: an alert already went out, checks are skipped
    /// until an operator deletes the file.
    Suppressed,
}

/// Alert gate for one unit type, stored as the presence of a marker file.
#[derive(Debug, Clone)]
pub struct AlertGate {
    path: PathBuf,
}

impl AlertGate {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Marker file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> GateState {
        if self.path.exists() {
            GateState::Suppressed
        } else {
            GateState::Armed
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.state() == GateState::Suppressed
    }

    /// Move to [`GateState::Suppressed`] by writing the marker file.
    pub fn suppress(&self) -> Result<(), WatchError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, MARKER_PLACEHOLDER)?;
        info!(
            "Marker written: {} (delete it to re-arm checks)",
            self.path.display()
        );
        Ok(())
    }
}
