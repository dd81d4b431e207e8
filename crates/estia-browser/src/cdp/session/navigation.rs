//! Navigation operations for CDP page session.

use std::time::{Duration, Instant};

use serde_json::{json, Value};
use tracing::debug;

use crate::cdp::error::CdpError;

use super::core::PageSession;

const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(100);

impl PageSession {
    /// Navigate to URL and wait until the document is ready.
    ///
    /// `timeout` bounds the whole navigation, load included.
    pub async fn navigate(&self, url: &str, timeout: Duration) -> Result<String, CdpError> {
        let navigation = async {
            let result = self
                .call("Page.navigate", Some(json!({"url": url})))
                .await?;

            if let Some(error) = result.get("errorText") {
                return Err(CdpError::NavigationFailed(format!(
                    "{}: {}",
                    url,
                    error.as_str().unwrap_or("Unknown error")
                )));
            }

            let frame_id = result["frameId"].as_str().unwrap_or("main").to_string();
            self.wait_for_load(timeout).await?;
            Ok::<_, CdpError>(frame_id)
        };

        let frame_id = tokio::time::timeout(timeout, navigation)
            .await
            .map_err(|_| CdpError::Timeout(format!("Loading {} exceeded {:?}", url, timeout)))??;

        debug!("Navigated to {}", url);
        Ok(frame_id)
    }

    /// Poll `document.readyState` until the load event has fired.
    pub async fn wait_for_load(&self, timeout: Duration) -> Result<(), CdpError> {
        let start = Instant::now();

        loop {
            let result = self.evaluate("document.readyState").await?;

            if Self::load_complete(&result) {
                return Ok(());
            }

            if start.elapsed() > timeout {
                return Err(CdpError::Timeout("Page load timeout".to_string()));
            }

            tokio::time::sleep(LOAD_POLL_INTERVAL).await;
        }
    }

    /// Only `complete` counts: at `interactive` deferred scripts may still
    /// move or insert the elements about to be clicked.
    pub(super) fn load_complete(ready_state: &Value) -> bool {
        ready_state.as_str() == Some("complete")
    }

    /// Get page title.
    pub async fn get_title(&self) -> Result<String, CdpError> {
        let result = self.evaluate("document.title").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }
}
