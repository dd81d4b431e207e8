use super::*;

fn pending_with(id: u64) -> (PendingMap, oneshot::Receiver<Result<Value, CdpError>>) {
    let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
    let (tx, rx) = oneshot::channel();
    pending.lock().insert(id, tx);
    (pending, rx)
}

#[tokio::test]
async fn test_dispatch_resolves_result() {
    let (pending, rx) = pending_with(4);
    let resp: CdpResponse =
        serde_json::from_str(r#"{"id": 4, "result": {"frameId": "F1"}}"#).unwrap();

    CdpClient::dispatch(resp, &pending);

    let value = rx.await.unwrap().unwrap();
    assert_eq!(value["frameId"], "F1");
    assert!(pending.lock().is_empty());
}

#[tokio::test]
async fn test_dispatch_resolves_protocol_error() {
    let (pending, rx) = pending_with(9);
    let resp: CdpResponse =
        serde_json::from_str(r#"{"id": 9, "error": {"code": -32601, "message": "not found"}}"#)
            .unwrap();

    CdpClient::dispatch(resp, &pending);

    match rx.await.unwrap() {
        Err(CdpError::Protocol { code, message }) => {
            assert_eq!(code, -32601);
            assert_eq!(message, "not found");
        }
        other => panic!("expected protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dispatch_ignores_events_and_unknown_ids() {
    let (pending, _rx) = pending_with(1);

    let event: CdpResponse =
        serde_json::from_str(r#"{"method": "Page.loadEventFired", "params": {}}"#).unwrap();
    CdpClient::dispatch(event, &pending);

    let stray: CdpResponse = serde_json::from_str(r#"{"id": 77, "result": {}}"#).unwrap();
    CdpClient::dispatch(stray, &pending);

    assert_eq!(pending.lock().len(), 1);
}

#[tokio::test]
async fn test_connect_unreachable_endpoint() {
    let result = CdpClient::connect("http://127.0.0.1:1").await;
    assert!(matches!(result, Err(CdpError::EndpointUnreachable(_))));
}
