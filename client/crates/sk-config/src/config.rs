use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, LoggingConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for SK_CONFIG_DIR env var, else use ./.starter/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SK_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SK_CONFIG_DIR env var > ./.starter/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.storage.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Absolute directory holding persisted store records.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        let dir = Path::new(&self.storage.dir);
        if dir.is_absolute() {
            return Ok(dir.to_path_buf());
        }

        Ok(Self::config_dir()?.join(dir))
    }

    /// Log file path, resolved like the storage dir.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = self.logging.file.as_deref() else {
            return Ok(None);
        };

        let path = Path::new(file);
        if path.is_absolute() {
            return Ok(Some(path.to_path_buf()));
        }

        Ok(Some(Self::config_dir()?.join(path)))
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  storage: {}", self.storage.dir);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        info!("  auth: mock latency {}ms", self.auth.mock_latency_ms);
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("SK_STORAGE_DIR", &mut self.storage.dir);

        // Logging
        Self::apply_env_parse("SK_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SK_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SK_LOG_FILE", &mut self.logging.file);

        // Auth
        Self::apply_env_parse("SK_AUTH_MOCK_LATENCY_MS", &mut self.auth.mock_latency_ms);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
