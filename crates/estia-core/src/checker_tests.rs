use super::*;
use std::path::PathBuf;
use std::sync::Mutex;

use estia_browser::BrowserError;

const URL: &str = "https://example.com/floorplans";

struct FixedProbe {
    result: Mutex<Option<Result<String, WatchError>>>,
    calls: Mutex<Vec<String>>,
}

impl FixedProbe {
    fn text(text: &str) -> Self {
        Self {
            result: Mutex::new(Some(Ok(text.to_string()))),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: WatchError) -> Self {
        Self {
            result: Mutex::new(Some(Err(err))),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UnitProbe for FixedProbe {
    async fn probe(&self, locators: &UnitLocatorConfig) -> Result<String, WatchError> {
        self.calls.lock().unwrap().push(locators.summary_xpath.clone());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(String::new()))
    }
}

fn target(kind: UnitKind) -> UnitTarget {
    UnitTarget {
        kind,
        locators: UnitLocatorConfig {
            summary_xpath: "//div[@id='summary']".to_string(),
            status_xpath: "//div[@id='status']".to_string(),
        },
        marker_path: PathBuf::from("/tmp/unused.log"),
    }
}

fn checker() -> AvailabilityChecker {
    AvailabilityChecker::new(URL, "get notified")
}

#[tokio::test]
async fn test_phrase_present_is_clear() {
    let probe = FixedProbe::text("Get Notified when units open");
    checker()
        .check(&probe, &target(UnitKind::OneBedroom))
        .await
        .unwrap();
    assert_eq!(probe.calls.lock().unwrap().as_slice(), ["//div[@id='summary']"]);
}

#[tokio::test]
async fn test_phrase_match_ignores_case() {
    let probe = FixedProbe::text("GET NOTIFIED");
    assert!(checker()
        .check(&probe, &target(UnitKind::TwoBedroom))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_phrase_absent_is_anomaly() {
    let probe = FixedProbe::text("2 units available");
    let err = checker()
        .check(&probe, &target(UnitKind::TwoBedroom))
        .await
        .unwrap_err();

    match err {
        WatchError::Anomaly {
            unit,
            kind,
            message,
        } => {
            assert_eq!(unit, UnitKind::TwoBedroom);
            assert_eq!(kind, AnomalyKind::PhraseMissing);
            assert_eq!(
                message,
                format!("get notified not in element for 2 bedroom! go to {}", URL)
            );
        }
        other => panic!("expected anomaly, got {:?}", other),
    }
}

#[tokio::test]
async fn test_lookup_failure_is_anomaly() {
    let probe = FixedProbe::failing(WatchError::Browser(BrowserError::ElementNotFound(
        "//div[@id='status']".to_string(),
    )));
    let err = checker()
        .check(&probe, &target(UnitKind::OneBedroom))
        .await
        .unwrap_err();

    match err {
        WatchError::Anomaly { kind, message, .. } => {
            assert_eq!(kind, AnomalyKind::ElementMissing);
            assert_eq!(
                message,
                format!("Failed to find GET NOTIFIED ELEMENT for 1 bedroom! go to {}", URL)
            );
        }
        other => panic!("expected anomaly, got {:?}", other),
    }
}

#[tokio::test]
async fn test_any_probe_error_is_element_missing() {
    let probe = FixedProbe::failing(WatchError::Browser(BrowserError::NotConnected));
    let err = checker()
        .check(&probe, &target(UnitKind::OneBedroom))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WatchError::Anomaly {
            kind: AnomalyKind::ElementMissing,
            ..
        }
    ));
}

#[tokio::test]
async fn test_empty_text_is_phrase_missing() {
    let probe = FixedProbe::text("");
    let err = checker()
        .check(&probe, &target(UnitKind::OneBedroom))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        WatchError::Anomaly {
            kind: AnomalyKind::PhraseMissing,
            ..
        }
    ));
}

#[test]
fn test_messages_differ_per_kind() {
    let checker = checker();
    let missing = checker.anomaly_message(UnitKind::OneBedroom, AnomalyKind::ElementMissing);
    let mismatch = checker.anomaly_message(UnitKind::OneBedroom, AnomalyKind::PhraseMissing);
    assert_ne!(missing, mismatch);
    assert!(missing.ends_with(URL));
    assert!(mismatch.ends_with(URL));
}
