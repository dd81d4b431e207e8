//! XPath element lookup for CDP page session.

use tracing::debug;

use crate::cdp::error::CdpError;
use crate::cdp::protocol::ElementRect;

use super::core::PageSession;

impl PageSession {
    /// Build an expression that resolves `xpath` to its first node and runs
    /// `body` with it bound to `el`. The expression yields `null` when
    /// nothing matches.
    pub(super) fn xpath_script(xpath: &str, body: &str) -> Result<String, CdpError> {
        let literal = serde_json::to_string(xpath)?;
        Ok(format!(
            "(() => {{ \
                const el = document.evaluate({literal}, document, null, \
                    XPathResult.FIRST_ORDERED_NODE_TYPE, null).singleNodeValue; \
                if (!el) return null; \
                {body} \
            }})()"
        ))
    }

    /// Scroll the element into view and return its viewport rectangle.
    pub async fn xpath_rect(&self, xpath: &str) -> Result<Option<ElementRect>, CdpError> {
        let script = Self::xpath_script(
            xpath,
            "el.scrollIntoView({block: 'center', inline: 'center'}); \
             const r = el.getBoundingClientRect(); \
             return {x: r.x, y: r.y, width: r.width, height: r.height};",
        )?;

        let value = self.evaluate(&script).await?;
        if value.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value)?))
    }

    /// Click the centre of the element matched by `xpath`.
    pub async fn click_xpath(&self, xpath: &str) -> Result<(), CdpError> {
        let rect = self
            .xpath_rect(xpath)
            .await?
            .ok_or_else(|| CdpError::ElementNotFound(xpath.to_string()))?;

        if !rect.is_visible() {
            return Err(CdpError::ElementNotFound(format!("{} (not visible)", xpath)));
        }

        let (x, y) = rect.center();
        debug!("Clicking {} at ({}, {})", xpath, x, y);
        self.click(x, y).await
    }

    /// Rendered text of the element matched by `xpath`.
    pub async fn xpath_text(&self, xpath: &str) -> Result<String, CdpError> {
        let script = Self::xpath_script(xpath, "return el.innerText ?? el.textContent ?? '';")?;

        let value = self.evaluate(&script).await?;
        value
            .as_str()
            .map(|s| s.trim().to_string())
            .ok_or_else(|| CdpError::ElementNotFound(xpath.to_string()))
    }
}
