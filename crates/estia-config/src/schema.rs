//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default)]
    pub twilio: TwilioConfig,

    #[serde(default)]
    pub recipients: RecipientsConfig,

    #[serde(default)]
    pub target: TargetConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub state: StateConfig,
}

/// Twilio messaging credentials.
///
/// Phone numbers are stored without the leading `+`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    #[serde(default)]
    pub account_sid: String,

    #[serde(default)]
    pub auth_token: String,

    #[serde(default)]
    pub from_number: String,

    #[serde(default = "default_twilio_api_base")]
    pub api_base: String,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            api_base: default_twilio_api_base(),
        }
    }
}

fn default_twilio_api_base() -> String {
    "https://api.twilio.com".to_string()
}

/// Alert recipients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipientsConfig {
    #[serde(default)]
    pub primary: String,

    #[serde(default)]
    pub secondary: String,
}

/// The watched page and the elements inspected on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    #[serde(default = "default_target_url")]
    pub url: String,

    /// Lowercase phrase the status element must contain.
    #[serde(default = "default_expected_phrase")]
    pub expected_phrase: String,

    /// Delay after clicking a summary element, for client-side rendering.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    #[serde(default = "default_one_bedroom")]
    pub one_bedroom: UnitLocatorConfig,

    #[serde(default = "default_two_bedroom")]
    pub two_bedroom: UnitLocatorConfig,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: default_target_url(),
            expected_phrase: default_expected_phrase(),
            settle_delay_ms: default_settle_delay_ms(),
            one_bedroom: default_one_bedroom(),
            two_bedroom: default_two_bedroom(),
        }
    }
}

/// XPath locators for one unit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLocatorConfig {
    /// Clickable element that expands the unit listing.
    pub summary_xpath: String,
    /// Element whose text carries the availability state.
    pub status_xpath: String,
}

fn default_target_url() -> String {
    "https://estiaatlakewoodranch.prospectportal.com/bradenton/estia-at-lakewood-ranch/conventional/"
        .to_string()
}

fn default_expected_phrase() -> String {
    "get notified".to_string()
}

fn default_settle_delay_ms() -> u64 {
    5000
}

fn default_one_bedroom() -> UnitLocatorConfig {
    UnitLocatorConfig {
        summary_xpath: "/html/body/div[1]/div/section/section/div[2]/ul[1]/li[1]/a/span[1]"
            .to_string(),
        status_xpath: "/html/body/div/div/section/section/div[2]/ul[2]/li/div/div[2]/div[5]/a[1]"
            .to_string(),
    }
}

fn default_two_bedroom() -> UnitLocatorConfig {
    UnitLocatorConfig {
        summary_xpath: "/html/body/div[1]/div/section/section/div[2]/ul[1]/li[2]/a/span[1]"
            .to_string(),
        status_xpath: "/html/body/div/div/section/section/div[2]/ul[3]/li/div/div[2]/div[5]/a[1]"
            .to_string(),
    }
}

/// Headless browser options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_debug_port")]
    pub debug_port: u16,

    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,

    #[serde(default = "default_page_load_timeout_secs")]
    pub page_load_timeout_secs: u64,

    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Explicit Chrome binary; searched in the usual locations when unset.
    #[serde(default)]
    pub chrome_path: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            debug_port: default_debug_port(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            page_load_timeout_secs: default_page_load_timeout_secs(),
            headless: default_headless(),
            chrome_path: None,
        }
    }
}

fn default_debug_port() -> u16 {
    9222
}

fn default_viewport_width() -> u32 {
    1920
}

fn default_viewport_height() -> u32 {
    1080
}

fn default_page_load_timeout_secs() -> u64 {
    15
}

fn default_headless() -> bool {
    true
}

/// Locations of the marker files and the failure counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Directory holding the state files. Defaults to `$HOME`.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_one_bedroom_marker")]
    pub one_bedroom_marker: String,

    #[serde(default = "default_two_bedroom_marker")]
    pub two_bedroom_marker: String,

    #[serde(default = "default_failure_counter")]
    pub failure_counter: String,

    /// Generic errors alerted before the counter silences them.
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: u32,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            dir: None,
            one_bedroom_marker: default_one_bedroom_marker(),
            two_bedroom_marker: default_two_bedroom_marker(),
            failure_counter: default_failure_counter(),
            alert_threshold: default_alert_threshold(),
        }
    }
}

impl StateConfig {
    /// Directory the state files live in.
    pub fn base_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(home_dir)
    }

    pub fn one_bedroom_marker_path(&self) -> PathBuf {
        self.base_dir().join(&self.one_bedroom_marker)
    }

    pub fn two_bedroom_marker_path(&self) -> PathBuf {
        self.base_dir().join(&self.two_bedroom_marker)
    }

    pub fn failure_counter_path(&self) -> PathBuf {
        self.base_dir().join(&self.failure_counter)
    }
}

fn default_one_bedroom_marker() -> String {
    "check_one.log".to_string()
}

fn default_two_bedroom_marker() -> String {
    "check_two.log".to_string()
}

fn default_failure_counter() -> String {
    "count.json".to_string()
}

fn default_alert_threshold() -> u32 {
    3
}

/// `$HOME`, falling back to the platform home directory.
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
