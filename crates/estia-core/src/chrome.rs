//! Headless Chrome behind [`SessionLauncher`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use estia_browser::{BrowserError, BrowserManager, BrowserManagerConfig, PageSession};
use estia_config::{UnitLocatorConfig, WatchConfig};

use crate::checker::UnitProbe;
use crate::error::WatchError;
use crate::watcher::SessionLauncher;

/// Launches (or attaches to) Chrome and opens the target page.
pub struct ChromeLauncher {
    manager: BrowserManager,
    settle_delay: Duration,
}

impl ChromeLauncher {
    pub fn new(browser: BrowserManagerConfig, settle_delay: Duration) -> Self {
        Self {
            manager: BrowserManager::new(browser),
            settle_delay,
        }
    }

    pub fn from_config(config: &WatchConfig) -> Self {
        let browser = BrowserManagerConfig {
            debug_port: config.browser.debug_port,
            viewport_width: config.browser.viewport_width,
            viewport_height: config.browser.viewport_height,
            profile_dir: None,
            headless: config.browser.headless,
            chrome_path: config.browser.chrome_path.clone(),
            page_load_timeout: Duration::from_secs(config.browser.page_load_timeout_secs),
        };
        Self::new(browser, Duration::from_millis(config.target.settle_delay_ms))
    }

    pub fn browser_config(&self) -> &BrowserManagerConfig {
        self.manager.config()
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }
}

#[async_trait]
impl SessionLauncher for ChromeLauncher {
    type Session = ChromeSession;

    async fn open(&self, url: &str) -> Result<ChromeSession, WatchError> {
        match self.manager.open(url).await {
            Ok(page) => Ok(ChromeSession {
                page,
                settle_delay: self.settle_delay,
            }),
            Err(e) => {
                if let Err(shutdown_err) = self.manager.shutdown().await {
                    warn!("Browser shutdown after failed open: {}", shutdown_err);
                }
                Err(e.into())
            }
        }
    }

    async fn close(&self, session: ChromeSession) -> Result<(), WatchError> {
        drop(session);
        self.manager.shutdown().await?;
        Ok(())
    }
}

/// The loaded target page.
pub struct ChromeSession {
    page: Arc<PageSession>,
    settle_delay: Duration,
}

#[async_trait]
impl UnitProbe for ChromeSession {
    async fn probe(&self, locators: &UnitLocatorConfig) -> Result<String, WatchError> {
        self.page
            .click_xpath(&locators.summary_xpath)
            .await
            .map_err(BrowserError::from)?;

        debug!("Waiting {:?} for the page to render", self.settle_delay);
        tokio::time::sleep(self.settle_delay).await;

        let text = self
            .page
            .xpath_text(&locators.status_xpath)
            .await
            .map_err(BrowserError::from)?;
        Ok(text)
    }
}
