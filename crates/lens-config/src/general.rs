//! General application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

fn default_frameworks() -> Vec<String> {
    vec!["gdpr".into(), "ccpa".into()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Frameworks evaluated when a command names none.
    #[serde(default = "default_frameworks")]
    pub default_frameworks: Vec<String>,

    /// TOML catalog merged over the built-in frameworks. Empty means none.
    #[serde(default)]
    pub catalog_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_frameworks: default_frameworks(),
            catalog_path: String::new(),
        }
    }
}

impl GeneralConfig {
    #[must_use]
    pub fn catalog_path(&self) -> Option<&Path> {
        (!self.catalog_path.is_empty()).then(|| Path::new(&self.catalog_path))
    }
}
