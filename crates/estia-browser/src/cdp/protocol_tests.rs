use super::*;

#[test]
fn test_cdp_request_serialize() {
    let req = CdpRequest {
        id: 1,
        method: "Page.navigate".to_string(),
        params: Some(serde_json::json!({"url": "https://example.com"})),
        session_id: None,
    };
    let json = serde_json::to_string(&req).unwrap();
    assert!(json.contains("Page.navigate"));
    assert!(json.contains("example.com"));
    assert!(!json.contains("sessionId"));
}

#[test]
fn test_cdp_request_with_session() {
    let req = CdpRequest {
        id: 7,
        method: "Runtime.evaluate".to_string(),
        params: None,
        session_id: Some("S1".to_string()),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["sessionId"], "S1");
    assert!(json.get("params").is_none());
}

#[test]
fn test_cdp_response_deserialize() {
    let json = r#"{"id": 1, "result": {"frameId": "abc"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.id, Some(1));
    assert!(resp.result.is_some());
    assert!(resp.error.is_none());
}

#[test]
fn test_cdp_error_response_deserialize() {
    let json = r#"{"id": 3, "error": {"code": -32000, "message": "No node with given id"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    let error = resp.error.unwrap();
    assert_eq!(error.code, -32000);
    assert!(error.message.contains("No node"));
}

#[test]
fn test_page_info_deserialize() {
    let json = r#"{
        "id": "page123",
        "type": "page",
        "title": "Estia",
        "url": "about:blank",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/page/page123"
    }"#;
    let info: PageInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.id, "page123");
    assert_eq!(info.page_type, "page");
}

#[test]
fn test_browser_version_deserialize() {
    let json = r#"{
        "Browser": "HeadlessChrome/126.0.0.0",
        "Protocol-Version": "1.3",
        "User-Agent": "Mozilla/5.0",
        "V8-Version": "12.6",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/browser/xyz"
    }"#;
    let version: BrowserVersion = serde_json::from_str(json).unwrap();
    assert!(version.browser.starts_with("HeadlessChrome"));
    assert!(version.web_socket_debugger_url.starts_with("ws://"));
}

#[test]
fn test_element_rect_center() {
    let rect = ElementRect {
        x: 10.0,
        y: 20.0,
        width: 100.0,
        height: 40.0,
    };
    assert_eq!(rect.center(), (60.0, 40.0));
    assert!(rect.is_visible());
}

#[test]
fn test_element_rect_hidden() {
    let rect = ElementRect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };
    assert!(!rect.is_visible());
}

#[test]
fn test_mouse_types_serialize() {
    assert_eq!(serde_json::to_string(&MouseButton::Left).unwrap(), "\"left\"");
    assert_eq!(
        serde_json::to_string(&MouseEventType::MousePressed).unwrap(),
        "\"mousePressed\""
    );
}
