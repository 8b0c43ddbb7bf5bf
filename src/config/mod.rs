use crate::utils::error::{AwxError, Result};
use crate::utils::validation::{validate_non_empty, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Connection settings for an AWX instance. The token is supplied by the
/// caller; this crate never acquires or refreshes credentials itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwxConfig {
    pub host: String,
    pub token: String,
    pub timeout_seconds: Option<u64>,
}

impl AwxConfig {
    pub fn new(host: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            token: token.into(),
            timeout_seconds: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AwxError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_env() -> Result<Self> {
        let host = std::env::var("AWX_HOST").map_err(|_| AwxError::Config {
            message: "AWX_HOST is not set".to_string(),
        })?;
        let token = std::env::var("AWX_TOKEN").map_err(|_| AwxError::Config {
            message: "AWX_TOKEN is not set".to_string(),
        })?;
        let timeout_seconds = match std::env::var("AWX_TIMEOUT_SECONDS") {
            Ok(raw) => Some(raw.parse().map_err(|_| AwxError::InvalidConfigValue {
                field: "AWX_TIMEOUT_SECONDS".to_string(),
                value: raw.clone(),
                reason: "expected a number of seconds".to_string(),
            })?),
            Err(_) => None,
        };

        Ok(Self {
            host,
            token,
            timeout_seconds,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }
}

impl Validate for AwxConfig {
    fn validate(&self) -> Result<()> {
        validate_url("host", &self.host)?;
        validate_non_empty("token", &self.token)?;
        Ok(())
    }
}

/// Replace `${VAR_NAME}` references with the environment value; unknown
/// variables are left as-is.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
