//! Alert fan-out over a channel.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::NotifyError;
use crate::twilio::{to_e164, TwilioClient};
use crate::types::{Delivery, NotifyChannel, SmsMessage};

/// Delivers an alert message to every configured recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel this notifier delivers through.
    fn channel(&self) -> NotifyChannel;

    /// Send `message` to all recipients, in order. The first provider
    /// failure is returned and later recipients are not attempted.
    async fn notify(&self, message: &str) -> Result<Vec<Delivery>, NotifyError>;
}

/// Texts a primary and a secondary number through Twilio.
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    client: TwilioClient,
    from: String,
    recipients: Vec<String>,
}

impl SmsNotifier {
    /// Numbers may be given with or without the leading `+`.
    pub fn new(client: TwilioClient, from: &str, recipients: &[&str]) -> Self {
        Self {
            client,
            from: to_e164(from),
            recipients: recipients.iter().map(|r| to_e164(r)).collect(),
        }
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    fn channel(&self) -> NotifyChannel {
        NotifyChannel::Sms
    }

    async fn notify(&self, message: &str) -> Result<Vec<Delivery>, NotifyError> {
        if self.recipients.is_empty() {
            return Err(NotifyError::NoRecipients);
        }

        let mut deliveries = Vec::with_capacity(self.recipients.len());
        for recipient in &self.recipients {
            let sms = SmsMessage {
                to: recipient.clone(),
                from: self.from.clone(),
                body: message.to_string(),
            };
            deliveries.push(self.client.send_sms(&sms).await?);
        }

        info!("Alert texted to {} recipient(s)", deliveries.len());
        Ok(deliveries)
    }
}

/// Writes alerts to the log instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    recipients: Vec<String>,
}

impl LogNotifier {
    pub fn new(recipients: &[&str]) -> Self {
        Self {
            recipients: recipients.iter().map(|r| to_e164(r)).collect(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    fn channel(&self) -> NotifyChannel {
        NotifyChannel::Log
    }

    async fn notify(&self, message: &str) -> Result<Vec<Delivery>, NotifyError> {
        let timestamp = chrono::Utc::now().to_rfc3339();

        if self.recipients.is_empty() {
            warn!("[{}] ALERT (dry run): {}", timestamp, message);
            return Ok(vec![Delivery {
                channel: NotifyChannel::Log,
                recipient: "log".to_string(),
                delivery_id: None,
                status: None,
            }]);
        }

        Ok(self
            .recipients
            .iter()
            .map(|recipient| {
                warn!("[{}] ALERT (dry run) to {}: {}", timestamp, recipient, message);
                Delivery {
                    channel: NotifyChannel::Log,
                    recipient: recipient.clone(),
                    delivery_id: None,
                    status: None,
                }
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "notifier_tests.rs"]
mod tests;
