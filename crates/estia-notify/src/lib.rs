//! # Estia Notify
//!
//! Alert delivery for the availability watcher.
//!
//! - [`SmsNotifier`]: texts every configured recipient through Twilio
//! - [`LogNotifier`]: writes the alert to the log only (dry runs)

mod error;
mod notifier;
mod twilio;
mod types;

pub use error::NotifyError;
pub use notifier::{LogNotifier, Notifier, SmsNotifier};
pub use twilio::{to_e164, TwilioClient};
pub use types::{Delivery, NotifyChannel, SmsMessage};
