//! Twilio Programmable Messaging client.

use std::time::Duration;

use tracing::debug;

use crate::error::NotifyError;
use crate::types::{Delivery, NotifyChannel, SmsMessage, TwilioErrorResponse, TwilioMessageResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal client for `POST /2010-04-01/Accounts/{sid}/Messages.json`.
#[derive(Clone)]
pub struct TwilioClient {
    client: reqwest::Client,
    api_base: String,
    account_sid: String,
    auth_token: String,
}

impl std::fmt::Debug for TwilioClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioClient")
            .field("api_base", &self.api_base)
            .field("account_sid", &self.account_sid)
            .finish_non_exhaustive()
    }
}

impl TwilioClient {
    pub fn new(
        api_base: impl Into<String>,
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base, self.account_sid
        )
    }

    /// Send one message.
    pub async fn send_sms(&self, message: &SmsMessage) -> Result<Delivery, NotifyError> {
        let form = [
            ("To", message.to.as_str()),
            ("From", message.from.as_str()),
            ("Body", message.body.as_str()),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(NotifyError::Auth(format!(
                "Twilio rejected credentials for account {}",
                self.account_sid
            )));
        }

        if !status.is_success() {
            let body: TwilioErrorResponse = response
                .json()
                .await
                .unwrap_or(TwilioErrorResponse {
                    code: 0,
                    message: status.canonical_reason().unwrap_or("unknown").to_string(),
                });
            return Err(NotifyError::Provider {
                status: status.as_u16(),
                code: body.code,
                message: body.message,
            });
        }

        let body: TwilioMessageResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::Parse(e.to_string()))?;

        debug!("Twilio accepted message {} to {}", body.sid, message.to);

        Ok(Delivery {
            channel: NotifyChannel::Sms,
            recipient: message.to.clone(),
            delivery_id: Some(body.sid),
            status: body.status,
        })
    }
}

/// Prefix a bare number with `+`. Numbers already in E.164 form pass through.
pub fn to_e164(number: &str) -> String {
    let trimmed = number.trim();
    if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{}", trimmed)
    }
}

#[cfg(test)]
#[path = "twilio_tests.rs"]
mod tests;
