use super::*;
use wiremock::matchers::{basic_auth, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MESSAGES_PATH: &str = "/2010-04-01/Accounts/AC123/Messages.json";

fn message() -> SmsMessage {
    SmsMessage {
        to: "+15551111111".to_string(),
        from: "+15550000000".to_string(),
        body: "get notified not in element for 1 bedroom!".to_string(),
    }
}

#[test]
fn test_to_e164_adds_plus() {
    assert_eq!(to_e164("15551234567"), "+15551234567");
}

#[test]
fn test_to_e164_keeps_existing_plus() {
    assert_eq!(to_e164(" +15551234567 "), "+15551234567");
}

#[test]
fn test_messages_url() {
    let client = TwilioClient::new("https://api.twilio.com/", "AC123", "token").unwrap();
    assert_eq!(
        client.messages_url(),
        "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages.json"
    );
}

#[test]
fn test_debug_hides_token() {
    let client = TwilioClient::new("https://api.twilio.com", "AC123", "s3cret").unwrap();
    let debug = format!("{:?}", client);
    assert!(debug.contains("AC123"));
    assert!(!debug.contains("s3cret"));
}

#[tokio::test]
async fn test_send_sms_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .and(basic_auth("AC123", "token"))
        .and(body_string_contains("To=%2B15551111111"))
        .and(body_string_contains("From=%2B15550000000"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "sid": "SM0001",
            "status": "queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = TwilioClient::new(server.uri(), "AC123", "token").unwrap();
    let delivery = client.send_sms(&message()).await.unwrap();

    assert_eq!(delivery.channel, NotifyChannel::Sms);
    assert_eq!(delivery.recipient, "+15551111111");
    assert_eq!(delivery.delivery_id.as_deref(), Some("SM0001"));
    assert_eq!(delivery.status.as_deref(), Some("queued"));
}

#[tokio::test]
async fn test_send_sms_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = TwilioClient::new(server.uri(), "AC123", "wrong").unwrap();
    let result = client.send_sms(&message()).await;

    assert!(matches!(result, Err(NotifyError::Auth(_))));
}

#[tokio::test]
async fn test_send_sms_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MESSAGES_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": 21211,
            "message": "The 'To' number is not a valid phone number.",
            "status": 400
        })))
        .mount(&server)
        .await;

    let client = TwilioClient::new(server.uri(), "AC123", "token").unwrap();
    match client.send_sms(&message()).await {
        Err(NotifyError::Provider {
            status,
            code,
            message,
        }) => {
            assert_eq!(status, 400);
            assert_eq!(code, 21211);
            assert!(message.contains("not a valid phone number"));
        }
        other => panic!("expected provider error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_send_sms_unreachable() {
    let client = TwilioClient::new("http://127.0.0.1:1", "AC123", "token").unwrap();
    let result = client.send_sms(&message()).await;
    assert!(matches!(result, Err(NotifyError::Http(_))));
}
