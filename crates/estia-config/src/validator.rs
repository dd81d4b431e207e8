//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::WatchConfig;

/// Required values, as `(config path, environment variable)`.
pub const REQUIRED_VALUES: [(&str, &str); 5] = [
    ("twilio.account_sid", "TWILIO_ACCOUNT"),
    ("twilio.auth_token", "TWILIO_TOKEN"),
    ("twilio.from_number", "TWILIO_FROM_NUMBER"),
    ("recipients.primary", "MY_NUMBER"),
    ("recipients.secondary", "ALT_MY_NUMBER"),
];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Collapse into a single error.
    ///
    /// Missing required values win and are reported by environment variable
    /// name; otherwise every invalid field is reported.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        if self.is_valid() {
            return Ok(self.warnings);
        }

        let (missing, invalid): (Vec<_>, Vec<_>) = self
            .errors
            .into_iter()
            .partition(|e| REQUIRED_VALUES.iter().any(|(path, _)| *path == e.path));

        if !missing.is_empty() {
            let vars: Vec<String> = missing.into_iter().map(|e| e.message).collect();
            return Err(ConfigError::MissingField(vars.join(", ")));
        }

        let fields: Vec<&str> = invalid.iter().map(|e| e.path.as_str()).collect();
        let messages: Vec<&str> = invalid.iter().map(|e| e.message.as_str()).collect();
        Err(ConfigError::InvalidValue {
            field: fields.join(", "),
            message: messages.join("; "),
        })
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &WatchConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_required(config, &mut result);
        Self::validate_target(config, &mut result);
        Self::validate_browser(config, &mut result);
        Self::validate_state(config, &mut result);

        result
    }

    /// Validate and fail on the first report containing errors.
    pub fn check(config: &WatchConfig) -> Result<Vec<ValidationWarning>, ConfigError> {
        Self::validate(config).into_result()
    }

    fn validate_required(config: &WatchConfig, result: &mut ValidationResult) {
        let values = [
            &config.twilio.account_sid,
            &config.twilio.auth_token,
            &config.twilio.from_number,
            &config.recipients.primary,
            &config.recipients.secondary,
        ];

        for ((path, env_var), value) in REQUIRED_VALUES.iter().zip(values) {
            if value.is_empty() {
                result.add_error(ValidationError::new(*path, *env_var));
            }
        }
    }

    fn validate_target(config: &WatchConfig, result: &mut ValidationResult) {
        let url = &config.target.url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "target.url",
                format!("must be an http(s) URL, got '{}'", url),
            ));
        }

        if config.target.expected_phrase.trim().is_empty() {
            result.add_error(ValidationError::new(
                "target.expected_phrase",
                "cannot be empty",
            ));
        }

        if config.target.settle_delay_ms == 0 {
            result.add_warning(ValidationWarning::new(
                "target.settle_delay_ms",
                "settle delay is 0, status text may be read before the page renders",
            ));
        }
    }

    fn validate_browser(config: &WatchConfig, result: &mut ValidationResult) {
        if config.browser.debug_port == 0 {
            result.add_error(ValidationError::new(
                "browser.debug_port",
                "cannot be 0",
            ));
        }

        if config.browser.page_load_timeout_secs == 0 {
            result.add_error(ValidationError::new(
                "browser.page_load_timeout_secs",
                "must be greater than 0",
            ));
        }
    }

    fn validate_state(config: &WatchConfig, result: &mut ValidationResult) {
        if config.state.alert_threshold == 0 {
            result.add_warning(ValidationWarning::new(
                "state.alert_threshold",
                "alert threshold is 0, generic errors will never be texted",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
