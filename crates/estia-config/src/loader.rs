//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::WatchConfig;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<WatchConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<WatchConfig, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let mut config: WatchConfig = toml::from_str(&expanded)?;
        config.state.dir = config.state.dir.map(|d| Self::expand_pathbuf(&d));
        config.browser.chrome_path = config.browser.chrome_path.map(|p| Self::expand_pathbuf(&p));
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();

        for cap in ENV_VAR_PATTERN.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/estia`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }

    fn expand_pathbuf(path: &Path) -> PathBuf {
        PathBuf::from(Self::expand_path(&path.to_string_lossy()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.browser.debug_port, 9222);
        assert_eq!(config.state.alert_threshold, 3);
        assert!(config.twilio.account_sid.is_empty());
    }

    #[test]
    fn test_load_target_overrides() {
        let content = r#"
            [target]
            url = "https://example.com/floorplans"
            expected_phrase = "join waitlist"
            settle_delay_ms = 250

            [target.one_bedroom]
            summary_xpath = "//li[1]/a"
            status_xpath = "//ul[2]//a"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.target.url, "https://example.com/floorplans");
        assert_eq!(config.target.expected_phrase, "join waitlist");
        assert_eq!(config.target.settle_delay_ms, 250);
        assert_eq!(config.target.one_bedroom.summary_xpath, "//li[1]/a");
        assert!(config.target.two_bedroom.summary_xpath.contains("li[2]"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[browser]").unwrap();
        writeln!(file, "debug_port = 9333").unwrap();
        writeln!(file, "headless = false").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.browser.debug_port, 9333);
        assert!(!config.browser.headless);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/watch.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: test-only variable name, not read anywhere else
        unsafe {
            std::env::set_var("ESTIA_TEST_SID", "AC123");
        }
        let content = "[twilio]\naccount_sid = \"${ESTIA_TEST_SID}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.twilio.account_sid, "AC123");
        unsafe {
            std::env::remove_var("ESTIA_TEST_SID");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_ESTIA_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_state_dir_tilde_expanded() {
        let content = "[state]\ndir = \"~/estia-state\"";
        let config = ConfigLoader::load_str(content).unwrap();
        let dir = config.state.dir.unwrap();
        assert!(!dir.to_string_lossy().starts_with('~'));
        assert!(dir.ends_with("estia-state"));
    }

    #[test]
    fn test_expand_path_no_tilde() {
        let path = "/usr/local/bin";
        assert_eq!(ConfigLoader::expand_path(path), path);
    }
}
