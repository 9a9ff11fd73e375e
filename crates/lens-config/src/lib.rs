//! # lens-config
//!
//! Layered configuration loading for CookieLens using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COOKIELENS_*` prefix, `__` as separator)
//! 2. Legacy deployment variables (`BEDROCK_API_KEY`, `AWS_REGION`, `S3_BUCKET`)
//! 3. Project-level `.cookielens/config.toml`
//! 4. User-level `~/.config/cookielens/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COOKIELENS_NARRATIVE__API_KEY` -> `narrative.api_key`,
//! `COOKIELENS_STORAGE__BUCKET` -> `storage.bucket`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use lens_config::LensConfig;
//!
//! let config = LensConfig::load_with_dotenv().expect("config");
//!
//! if config.storage.is_configured() {
//!     println!("Reports go to {}", config.storage.bucket);
//! }
//! ```

mod classifier;
mod error;
mod general;
mod narrative;
mod scanner;
mod storage;

pub use classifier::{ClassifierConfig, ClassifierRuleConfig};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use narrative::NarrativeConfig;
pub use scanner::ScannerConfig;
pub use storage::StorageConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Environment prefix for all CookieLens settings.
pub const ENV_PREFIX: &str = "COOKIELENS_";

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".cookielens/config.toml";

/// Unprefixed variables honored for existing deployments, and the key each
/// one fills.
pub const LEGACY_ENV: &[(&str, &str)] = &[
    ("BEDROCK_API_KEY", "narrative.api_key"),
    ("AWS_REGION", "narrative.region"),
    ("AWS_REGION", "storage.region"),
    ("S3_BUCKET", "storage.bucket"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LensConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scanner: ScannerConfig,
    #[serde(default)]
    pub narrative: NarrativeConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl LensConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; use [`LensConfig::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed and
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// Variables already set in the process environment are not overridden.
    ///
    /// # Errors
    ///
    /// Same as [`LensConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the working directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_in(Path::new("."))
    }

    /// Build the figment provider chain with `project_dir` as the project root.
    ///
    /// Public so tests and callers can add providers on top.
    #[must_use]
    pub fn figment_in(project_dir: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_dir.join(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Legacy unprefixed variables
        for &(var, key) in LEGACY_ENV {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }

        // Layer 4: Prefixed environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values no collaborator can work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: &str| ConfigError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        };

        if self
            .general
            .default_frameworks
            .iter()
            .all(|id| id.trim().is_empty())
        {
            return Err(invalid(
                "general.default_frameworks",
                "must name at least one framework",
            ));
        }
        if self.scanner.timeout_secs == 0 {
            return Err(invalid("scanner.timeout_secs", "must be greater than 0"));
        }
        if self.narrative.timeout_secs == 0 {
            return Err(invalid("narrative.timeout_secs", "must be greater than 0"));
        }
        if self.narrative.max_tokens == 0 {
            return Err(invalid("narrative.max_tokens", "must be greater than 0"));
        }
        if self
            .classifier
            .rules
            .iter()
            .any(|rule| rule.pattern.trim().is_empty())
        {
            return Err(invalid("classifier.rules", "pattern must not be empty"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cookielens").join("config.toml"))
    }
}
