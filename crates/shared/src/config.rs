//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Conversion defaults.
    pub converter: ConverterConfig,
    /// Preference persistence.
    pub preferences: PreferencesConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Conversion defaults used when nothing was remembered from a previous run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Whether the fee is applied when the caller does not say.
    pub apply_fee: bool,
    /// Fee percentage as decimal text.
    pub default_fee_percentage: String,
    /// Amount as decimal text.
    pub default_amount: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            apply_fee: false,
            default_fee_percentage: "2.5".to_string(),
            default_amount: "1.00".to_string(),
        }
    }
}

/// Preference persistence configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Whether the last inputs are remembered across runs.
    pub enabled: bool,
    /// Path of the JSON preference file.
    pub path: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "fxdesk-preferences.json".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "fxdesk=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FXDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
