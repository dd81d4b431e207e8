//! Persisted count of generic (non-anomaly) errors.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WatchError;

/// On-disk shape: `{"count": 0}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterRecord {
    #[serde(default)]
    pub count: u32,
}

/// Counts generic errors across invocations and caps how many get alerted.
///
/// The count is never reset by the program; deleting the file is the reset.
#[derive(Debug, Clone)]
pub struct FailureCounter {
    path: PathBuf,
    threshold: u32,
}

impl FailureCounter {
    pub fn new<P: AsRef<Path>>(path: P, threshold: u32) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            threshold,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Current count. A missing file is created holding 0.
    pub fn read(&self) -> Result<u32, WatchError> {
        if !self.path.exists() {
            self.write(CounterRecord::default())?;
            debug!("Failure counter initialised at {}", self.path.display());
            return Ok(0);
        }

        let content = fs::read_to_string(&self.path)?;
        let record: CounterRecord =
            serde_json::from_str(&content).map_err(|source| WatchError::CounterFormat {
                path: self.path.clone(),
                source,
            })?;
        Ok(record.count)
    }

    /// Add one and persist. Returns the new count.
    pub fn increment(&self) -> Result<u32, WatchError> {
        let count = self.read()?.saturating_add(1);
        self.write(CounterRecord { count })?;
        Ok(count)
    }

    /// Whether an error seen at `count` previous errors still gets alerted.
    pub fn allows_alert(&self, count: u32) -> bool {
        count < self.threshold
    }

    fn write(&self, record: CounterRecord) -> Result<(), WatchError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(&record).map_err(|source| WatchError::CounterFormat {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
