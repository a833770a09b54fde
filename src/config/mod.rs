use crate::utils::error::{MarketError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub otp: OtpConfig,
    pub notifier: NotifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpConfig {
    pub ttl_minutes: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub headers: Option<HashMap<String, String>>,
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MarketError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MarketError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn ttl(&self) -> Duration {
        Duration::minutes(
            self.otp
                .ttl_minutes
                .unwrap_or(crate::core::otp::DEFAULT_TTL_MINUTES),
        )
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("notifier.endpoint", &self.notifier.endpoint)?;

        if let Some(ttl) = self.otp.ttl_minutes {
            validate_range("otp.ttl_minutes", ttl, 1, 60)?;
        }

        if let Some(timeout) = self.notifier.timeout_seconds {
            validate_range("notifier.timeout_seconds", timeout, 1, 120)?;
        }

        Ok(())
    }
}
