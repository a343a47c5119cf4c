//! # Application configuration: `hervoice.toml`
//!
//! ```toml
//! [guard]
//! spinner_delay_ms = 200   # how long a session check may run before the spinner shows
//!
//! [about]
//! version = "1.0"
//! powered_by = "Slytherin"
//! helpline = "1800-1090"
//! ```
//!
//! Every field has a default, so a missing or partial file is equivalent to
//! the default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `hervoice.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HerVoiceConfig {
    #[serde(default)]
    pub guard: GuardConfig,
    #[serde(default)]
    pub about: AboutConfig,
}

/// Route guard behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    #[serde(default = "default_spinner_delay")]
    pub spinner_delay_ms: u64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            spinner_delay_ms: default_spinner_delay(),
        }
    }
}

impl GuardConfig {
    pub fn spinner_delay(&self) -> Duration {
        Duration::from_millis(self.spinner_delay_ms)
    }
}

/// Text shown in the profile footer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AboutConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_powered_by")]
    pub powered_by: String,
    /// Women safety helpline number.
    #[serde(default = "default_helpline")]
    pub helpline: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            powered_by: default_powered_by(),
            helpline: default_helpline(),
        }
    }
}

fn default_spinner_delay() -> u64 {
    200
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_powered_by() -> String {
    "Slytherin".to_string()
}

fn default_helpline() -> String {
    "1800-1090".to_string()
}

impl HerVoiceConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "hervoice.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = HerVoiceConfig::from_toml("").unwrap();
        assert_eq!(config, HerVoiceConfig::default());
        assert_eq!(config.guard.spinner_delay(), Duration::from_millis(200));
        assert_eq!(config.about.helpline, "1800-1090");
    }

    #[test]
    fn test_partial_sections() {
        let config = HerVoiceConfig::from_toml(
            r#"
            [guard]
            spinner_delay_ms = 350

            [about]
            version = "1.1"
            "#,
        )
        .unwrap();

        assert_eq!(config.guard.spinner_delay_ms, 350);
        assert_eq!(config.about.version, "1.1");
        assert_eq!(config.about.powered_by, "Slytherin");
    }

    #[test]
    fn test_toml_output_parses_back() {
        let mut config = HerVoiceConfig::default();
        config.about.helpline = "181".to_string();

        let text = config.to_toml().unwrap();
        assert!(text.contains("[guard]"));
        assert_eq!(HerVoiceConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(HerVoiceConfig::from_toml("[guard]\nspinner_delay_ms = \"fast\"").is_err());
    }
}
