// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that serde attributes cannot express.

use crate::diagnostic::ConfigError;
use crate::model::CardcraftConfig;

/// Log levels accepted by `app.log_level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure rather than stopping at the first.
pub fn validate_config(config: &CardcraftConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` is not one of {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    let openai = &config.openai;

    if openai.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "openai.model must not be empty".to_string(),
        });
    }

    let base_url = openai.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(ConfigError::Validation {
            message: format!("openai.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if !(0.0..=2.0).contains(&openai.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "openai.temperature must be between 0.0 and 2.0, got {}",
                openai.temperature
            ),
        });
    }

    if openai.max_tokens < 1 {
        errors.push(ConfigError::Validation {
            message: "openai.max_tokens must be at least 1".to_string(),
        });
    }

    if openai.timeout_secs < 1 {
        errors.push(ConfigError::Validation {
            message: "openai.timeout_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&CardcraftConfig::default()).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = CardcraftConfig::default();
        config.app.log_level = "loud".into();
        config.openai.base_url = "ftp://example.com".into();
        config.openai.temperature = 3.5;
        config.openai.max_tokens = 0;
        config.openai.timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = CardcraftConfig::default();
        config.app.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
