//! Per-invocation state shared by command handlers.

mod config_warnings;

use anyhow::Context;
use lens_catalog::Catalog;
use lens_config::LensConfig;
use lens_engine::{TrackerClassifier, TrackerRule};

pub use config_warnings::warn_unconfigured;

/// Loaded configuration plus the catalog and classifier it describes.
pub struct AppContext {
    pub config: LensConfig,
    pub catalog: Catalog,
    pub classifier: TrackerClassifier,
}

impl AppContext {
    /// Build the catalog (built-in, overlaid with `general.catalog_path`) and
    /// the classifier (configured rules before the built-in table).
    pub fn init(config: LensConfig) -> anyhow::Result<Self> {
        let mut catalog = Catalog::builtin();
        if let Some(path) = config.general.catalog_path() {
            let custom = Catalog::load(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            tracing::debug!(path = %path.display(), frameworks = custom.len(), "catalog overlay loaded");
            catalog = catalog.merge(custom);
        }

        let classifier = TrackerClassifier::new().with_rules(
            config
                .classifier
                .rules
                .iter()
                .map(|rule| TrackerRule::new(&rule.pattern, rule.category, rule.risk_level)),
        );

        Ok(Self {
            config,
            catalog,
            classifier,
        })
    }

    /// `requested` when non-empty, otherwise `general.default_frameworks`.
    #[must_use]
    pub fn frameworks_or_default(&self, requested: &[String]) -> Vec<String> {
        if requested.is_empty() {
            self.config.general.default_frameworks.clone()
        } else {
            requested.to_vec()
        }
    }
}
