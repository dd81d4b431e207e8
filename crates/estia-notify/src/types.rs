//! Notification types shared between channels.

use serde::{Deserialize, Serialize};

/// Delivery channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyChannel {
    /// Log to console/file (always available).
    Log,
    /// Twilio SMS.
    Sms,
}

/// One outbound text message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsMessage {
    /// Destination in E.164 form.
    pub to: String,
    /// Sender in E.164 form.
    pub from: String,
    pub body: String,
}

/// Outcome of a single delivery.
#[derive(Debug, Clone, Serialize)]
pub struct Delivery {
    pub channel: NotifyChannel,
    pub recipient: String,
    /// Provider message id, when the channel has one.
    pub delivery_id: Option<String>,
    /// Provider-reported status (e.g. `queued`).
    pub status: Option<String>,
}

/// Successful Twilio `Messages.json` response (fields we use).
#[derive(Debug, Deserialize)]
pub(crate) struct TwilioMessageResponse {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Twilio error payload.
#[derive(Debug, Deserialize)]
pub(crate) struct TwilioErrorResponse {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}
