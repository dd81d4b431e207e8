//! CLI definitions for estia-watch.
//!
//! Every option is backed by an environment variable, so a scheduled bare
//! invocation is configured entirely from the environment.

use std::path::PathBuf;

use clap::Parser;

use estia_config::WatchConfig;

/// estia-watch CLI.
#[derive(Debug, Parser)]
#[command(name = "estia-watch")]
#[command(about = "Text two numbers when an apartment unit stops showing \"get notified\"")]
#[command(version)]
pub(crate) struct Cli {
    /// Optional TOML configuration file
    #[arg(short, long, env = "ESTIA_WATCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Twilio account SID
    #[arg(long, env = "TWILIO_ACCOUNT", hide_env_values = true)]
    pub twilio_account: Option<String>,

    /// Twilio auth token
    #[arg(long, env = "TWILIO_TOKEN", hide_env_values = true)]
    pub twilio_token: Option<String>,

    /// Sender number, with or without the leading +
    #[arg(long, env = "TWILIO_FROM_NUMBER", hide_env_values = true)]
    pub twilio_from_number: Option<String>,

    /// Primary recipient
    #[arg(long, env = "MY_NUMBER", hide_env_values = true)]
    pub my_number: Option<String>,

    /// Secondary recipient
    #[arg(long, env = "ALT_MY_NUMBER", hide_env_values = true)]
    pub alt_my_number: Option<String>,

    /// Directory holding marker and counter files (default: $HOME)
    #[arg(long, env = "ESTIA_WATCH_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    /// Log alerts instead of texting them
    #[arg(long, env = "ESTIA_WATCH_DRY_RUN")]
    pub dry_run: bool,
}

impl Cli {
    /// Overlay the values given on the command line or in the environment.
    pub fn apply(&self, config: &mut WatchConfig) {
        let overrides = [
            (&self.twilio_account, &mut config.twilio.account_sid),
            (&self.twilio_token, &mut config.twilio.auth_token),
            (&self.twilio_from_number, &mut config.twilio.from_number),
            (&self.my_number, &mut config.recipients.primary),
            (&self.alt_my_number, &mut config.recipients.secondary),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }

        if let Some(dir) = &self.state_dir {
            config.state.dir = Some(dir.clone());
        }
    }
}
