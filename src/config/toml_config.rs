use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Gateway settings loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub gateway: GatewaySection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewaySection {
    pub payment_endpoint: String,
    pub reservation_endpoint: String,
    pub timeout_seconds: Option<u64>,
}

impl GatewayConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TicketError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| TicketError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // ${VAR} references are replaced from the environment; unset variables
    // are left verbatim so endpoint validation reports them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for GatewayConfig {
    fn payment_endpoint(&self) -> &str {
        &self.gateway.payment_endpoint
    }

    fn reservation_endpoint(&self) -> &str {
        &self.gateway.reservation_endpoint
    }

    fn timeout_seconds(&self) -> u64 {
        self.gateway.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_url("gateway.payment_endpoint", &self.gateway.payment_endpoint)?;
        validate_url(
            "gateway.reservation_endpoint",
            &self.gateway.reservation_endpoint,
        )?;
        validate_positive_number("gateway.timeout_seconds", self.timeout_seconds(), 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[gateway]
payment_endpoint = "https://payments.example.com/charge"
reservation_endpoint = "https://booking.example.com/reserve"
timeout_seconds = 10
"#;

        let config = GatewayConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.payment_endpoint(),
            "https://payments.example.com/charge"
        );
        assert_eq!(
            config.reservation_endpoint(),
            "https://booking.example.com/reserve"
        );
        assert_eq!(config.timeout_seconds(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_defaults_when_absent() {
        let toml_content = r#"
[gateway]
payment_endpoint = "https://payments.example.com/charge"
reservation_endpoint = "https://booking.example.com/reserve"
"#;

        let config = GatewayConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CINEMA_PAYMENT_HOST", "payments.internal");
        let toml_content = r#"
[gateway]
payment_endpoint = "https://${CINEMA_PAYMENT_HOST}/charge"
reservation_endpoint = "https://booking.example.com/reserve"
"#;

        let config = GatewayConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.payment_endpoint(),
            "https://payments.internal/charge"
        );
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let toml_content = r#"
[gateway]
payment_endpoint = "https://${CINEMA_NO_SUCH_VAR}/charge"
reservation_endpoint = "https://booking.example.com/reserve"
"#;

        let config = GatewayConfig::from_toml_str(toml_content).unwrap();

        assert!(config.payment_endpoint().contains("${CINEMA_NO_SUCH_VAR}"));
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = GatewayConfig::from_toml_str("this is not toml at all [");

        match result {
            Err(TicketError::ConfigError { message }) => {
                assert!(message.contains("TOML parsing error"))
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_unsupported_scheme() {
        let toml_content = r#"
[gateway]
payment_endpoint = "ftp://payments.example.com/charge"
reservation_endpoint = "https://booking.example.com/reserve"
"#;

        let config = GatewayConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_err());
    }
}
