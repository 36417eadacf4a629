use crate::{ConfigError, ConfigErrorResult, DEFAULT_MOCK_LATENCY_MS, MAX_MOCK_LATENCY_MS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated round trip of the placeholder authenticator
    pub mock_latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.mock_latency_ms > MAX_MOCK_LATENCY_MS {
            return Err(ConfigError::auth(format!(
                "auth.mock_latency_ms must be <= {}, got {}",
                MAX_MOCK_LATENCY_MS, self.mock_latency_ms
            )));
        }

        Ok(())
    }
}
