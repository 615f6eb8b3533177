//! # upkeep-config
//!
//! Layered configuration loading for Upkeep using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`UPKEEP_*` prefix, `__` as separator)
//! 2. Project-level `.upkeep/config.toml`
//! 3. User-level `~/.config/upkeep/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `UPKEEP_RECURRENCE__MONTH_OVERFLOW` -> `recurrence.month_overflow`,
//! `UPKEEP_INSPECTION__STRICT_TEMPLATES` -> `inspection.strict_templates`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use upkeep_config::UpkeepConfig;
//!
//! let config = UpkeepConfig::load_with_dotenv().expect("config");
//! println!("month overflow policy: {}", config.recurrence.month_overflow);
//! ```

mod error;
mod general;
mod inspection;
mod recurrence;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use inspection::InspectionConfig;
pub use recurrence::RecurrenceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpkeepConfig {
    #[serde(default)]
    pub recurrence: RecurrenceConfig,
    #[serde(default)]
    pub inspection: InspectionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl UpkeepConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary provider chain.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".upkeep/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("UPKEEP_").split("__"))
    }

    /// Reject values that would make the engines misbehave.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recurrence.default_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "recurrence.default_count".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.general.workbook.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.workbook".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("upkeep").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or falls back to the
    /// current dir. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
