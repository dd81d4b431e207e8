//! BrowserManager core: struct definition, Chrome discovery, launch and connect.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use tokio::process::{Child, Command};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cdp::{CdpClient, PageSession};
use super::{BrowserError, BrowserManagerConfig};

const LAUNCH_POLL_INTERVAL: Duration = Duration::from_millis(200);
const LAUNCH_MAX_ATTEMPTS: u32 = 50;
/// A debug port that accepts but never answers must not stall the run.
const PORT_PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Manages the Chrome process, the CDP connection and the run's page.
pub struct BrowserManager {
    pub(super) config: BrowserManagerConfig,
    pub(super) client: RwLock<Option<Arc<CdpClient>>>,
    pub(super) page: RwLock<Option<Arc<PageSession>>>,
    /// Chrome process handle (if we launched it).
    pub(super) chrome_process: RwLock<Option<Child>>,
}

impl BrowserManager {
    /// Create a new browser manager.
    pub fn new(config: BrowserManagerConfig) -> Self {
        Self {
            config,
            client: RwLock::new(None),
            page: RwLock::new(None),
            chrome_process: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &BrowserManagerConfig {
        &self.config
    }

    /// Find a Chrome executable in the usual install locations.
    pub fn find_chrome() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        let paths: &[&str] = &[
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
            "/Applications/Chromium.app/Contents/MacOS/Chromium",
        ];

        #[cfg(target_os = "linux")]
        let paths: &[&str] = &[
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux")))]
        let paths: &[&str] = &[
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        ];

        paths.iter().map(PathBuf::from).find(|p| p.exists())
    }

    fn chrome_binary(&self) -> Result<PathBuf, BrowserError> {
        match &self.config.chrome_path {
            Some(path) if path.exists() => Ok(path.clone()),
            Some(path) => Err(BrowserError::LaunchFailed(format!(
                "{} does not exist",
                path.display()
            ))),
            None => Self::find_chrome().ok_or(BrowserError::ChromeNotFound),
        }
    }

    /// Check if Chrome is already listening on the debug port.
    pub(super) async fn is_chrome_running(&self) -> bool {
        Self::endpoint_answers(&self.config.endpoint(), PORT_PROBE_TIMEOUT).await
    }

    /// Whether `{endpoint}/json/version` responds within `timeout`.
    pub(super) async fn endpoint_answers(endpoint: &str, timeout: Duration) -> bool {
        let client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!("Failed to build HTTP client: {}", e);
                return false;
            }
        };

        client
            .get(format!("{}/json/version", endpoint))
            .send()
            .await
            .is_ok()
    }

    /// Launch Chrome with remote debugging enabled.
    pub(super) async fn launch_chrome(&self) -> Result<Child, BrowserError> {
        let chrome_path = self.chrome_binary()?;
        let profile_dir = self.config.get_profile_dir();

        if let Err(e) = std::fs::create_dir_all(&profile_dir) {
            warn!("Failed to create profile directory: {}", e);
        }

        info!(
            "Launching Chrome {} (headless: {})",
            chrome_path.display(),
            self.config.headless
        );

        let child = Command::new(&chrome_path)
            .args(self.config.chrome_args())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| BrowserError::LaunchFailed(e.to_string()))?;

        info!("Chrome launched with PID: {:?}", child.id());
        Ok(child)
    }

    /// Connect to the browser, launching it if necessary.
    pub async fn connect(&self) -> Result<(), BrowserError> {
        if self.client.read().await.is_some() {
            return Ok(());
        }

        if !self.is_chrome_running().await {
            debug!("Chrome not running on port {}, launching", self.config.debug_port);

            let child = self.launch_chrome().await?;
            *self.chrome_process.write().await = Some(child);

            let mut ready = false;
            for _ in 0..LAUNCH_MAX_ATTEMPTS {
                tokio::time::sleep(LAUNCH_POLL_INTERVAL).await;
                if self.is_chrome_running().await {
                    ready = true;
                    break;
                }
            }

            if !ready {
                return Err(BrowserError::LaunchFailed(
                    "Chrome failed to start within timeout".to_string(),
                ));
            }
        } else {
            info!("Chrome already running on port {}", self.config.debug_port);
        }

        let client = CdpClient::connect(&self.config.endpoint()).await?;
        *self.client.write().await = Some(Arc::new(client));

        debug!("Connected to Chrome at {}", self.config.endpoint());
        Ok(())
    }

    /// Get the CDP client.
    pub(super) async fn client(&self) -> Result<Arc<CdpClient>, BrowserError> {
        self.client
            .read()
            .await
            .clone()
            .ok_or(BrowserError::NotConnected)
    }

    /// Drop the page and the CDP connection.
    pub async fn close(&self) -> Result<(), BrowserError> {
        if let Some(page) = self.page.write().await.take() {
            if let Ok(client) = self.client().await {
                if let Err(e) = client.close_page(page.target_id()).await {
                    debug!("Closing page failed: {}", e);
                }
            }
        }
        let _ = self.client.write().await.take();
        debug!("Browser connection closed");
        Ok(())
    }

    /// Close the connection and kill Chrome if we launched it.
    pub async fn shutdown(&self) -> Result<(), BrowserError> {
        self.close().await?;
        if let Some(mut child) = self.chrome_process.write().await.take() {
            info!("Shutting down Chrome");
            if let Err(e) = child.kill().await {
                warn!("Failed to kill Chrome: {}", e);
            }
        }
        Ok(())
    }
}
