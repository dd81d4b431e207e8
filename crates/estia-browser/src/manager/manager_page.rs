//! BrowserManager page handling.

use std::sync::Arc;

use tracing::info;

use crate::cdp::PageSession;
use super::{BrowserError, BrowserManager};

impl BrowserManager {
    /// Open the run's page on `url`, connecting first if needed.
    ///
    /// Navigation is bounded by the configured page load timeout.
    pub async fn open(&self, url: &str) -> Result<Arc<PageSession>, BrowserError> {
        self.connect().await?;
        let client = self.client().await?;

        let session = client.new_page().await?;
        session
            .set_viewport(self.config.viewport_width, self.config.viewport_height)
            .await?;
        session.navigate(url, self.config.page_load_timeout).await?;

        let title = session.get_title().await?;
        info!("Page Title: {}", title);

        let session = Arc::new(session);
        *self.page.write().await = Some(session.clone());
        Ok(session)
    }
}
