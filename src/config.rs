use std::env;
use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TRANSCRIPT_CHAR_LIMIT: usize = 15_000;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_api_base: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub transcript_char_limit: usize,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub request_timeout_secs: u64,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(env::var("OPENAI_API_KEY").unwrap_or_default()),
            openai_api_base: env::var("OPENAI_API_BASE").ok().filter(|b| !b.is_empty()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature: env::var("OPENAI_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
            transcript_char_limit: env::var("TRANSCRIPT_CHAR_LIMIT")
                .ok()
                .and_then(|l| l.parse().ok())
                .unwrap_or(DEFAULT_TRANSCRIPT_CHAR_LIMIT),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(90),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok().filter(|o| !o.is_empty()),
        }
    }

    /// Checks the values the generation pipeline cannot run without.
    pub fn validate(&self) -> AppResult<()> {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret().trim().is_empty() {
            return Err(AppError::InternalError(
                "OPENAI_API_KEY is not set".to_string(),
            ));
        }

        if !(self.temperature > 0.0 && self.temperature <= 2.0) {
            return Err(AppError::InternalError(format!(
                "OPENAI_TEMPERATURE must be in (0, 2], got {}",
                self.temperature
            )));
        }

        if self.transcript_char_limit == 0 {
            return Err(AppError::InternalError(
                "TRANSCRIPT_CHAR_LIMIT must be greater than zero".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::InternalError(
                "REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("sk-test-key".to_string()),
            openai_api_base: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            transcript_char_limit: DEFAULT_TRANSCRIPT_CHAR_LIMIT,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            request_timeout_secs: 5,
            cors_allowed_origin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.model.is_empty());
        assert!(config.transcript_char_limit > 0);
        assert!(!config.web_server_host.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.transcript_char_limit, 15_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_api_key() {
        let config = Config {
            openai_api_key: SecretString::from(String::new()),
            ..Config::test_config()
        };

        assert!(matches!(config.validate(), Err(AppError::InternalError(_))));
    }

    #[test]
    fn validate_rejects_zero_temperature_and_zero_limit() {
        let cold = Config {
            temperature: 0.0,
            ..Config::test_config()
        };
        assert!(cold.validate().is_err());

        let no_limit = Config {
            transcript_char_limit: 0,
            ..Config::test_config()
        };
        assert!(no_limit.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_request_timeout() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::test_config()
        };

        assert_eq!(
            config.validate(),
            Err(AppError::InternalError(
                "REQUEST_TIMEOUT_SECS must be greater than zero".to_string()
            ))
        );
    }
}
