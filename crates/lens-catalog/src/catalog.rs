//! Framework catalog: an ordered set of frameworks with their controls.

use std::path::Path;

use lens_core::entities::{Control, FrameworkInfo};
use lens_core::{ControlSource, SourceError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builtin;
use crate::error::CatalogError;

/// A compliance framework and the controls it is evaluated against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Framework {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub controls: Vec<Control>,
}

impl Framework {
    #[must_use]
    pub fn info(&self) -> FrameworkInfo {
        FrameworkInfo {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            control_count: self.controls.len(),
        }
    }
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    frameworks: Vec<Framework>,
}

/// Ordered collection of frameworks, looked up by case-insensitive id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    frameworks: Vec<Framework>,
}

impl Catalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with CookieLens.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            frameworks: builtin::frameworks(),
        }
    }

    /// Parse a catalog from TOML text.
    ///
    /// ```toml
    /// [[frameworks]]
    /// id = "pci"
    /// name = "PCI DSS"
    ///
    /// [[frameworks.controls]]
    /// id = "pci-secure-cookies"
    /// name = "Secure cookies"
    /// category = "Security"
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] on malformed TOML and
    /// [`CatalogError::Invalid`] on empty or repeated framework ids.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text).map_err(|source| CatalogError::Parse {
            origin: "<inline>".into(),
            source,
        })?;
        Self::from_frameworks(file.frameworks)
    }

    /// Read a TOML catalog from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if the file cannot be read, otherwise
    /// the errors of [`Catalog::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: CatalogFile = toml::from_str(&text).map_err(|source| CatalogError::Parse {
            origin: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_frameworks(file.frameworks)?;
        debug!(path = %path.display(), frameworks = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Build a catalog, rejecting empty and duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] on an empty or repeated id.
    pub fn from_frameworks(frameworks: Vec<Framework>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for framework in frameworks {
            if framework.id.trim().is_empty() {
                return Err(CatalogError::Invalid("framework with empty id".into()));
            }
            if catalog.get(&framework.id).is_some() {
                return Err(CatalogError::Invalid(format!(
                    "framework '{}' defined more than once",
                    framework.id
                )));
            }
            catalog.frameworks.push(framework);
        }
        Ok(catalog)
    }

    /// Overlay `other` on this catalog. A framework of `other` replaces the
    /// one with the same id in place; new frameworks are appended.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for framework in other.frameworks {
            match self
                .frameworks
                .iter_mut()
                .find(|existing| existing.id.eq_ignore_ascii_case(&framework.id))
            {
                Some(existing) => *existing = framework,
                None => self.frameworks.push(framework),
            }
        }
        self
    }

    #[must_use]
    pub fn get(&self, framework_id: &str) -> Option<&Framework> {
        self.frameworks
            .iter()
            .find(|framework| framework.id.eq_ignore_ascii_case(framework_id))
    }

    /// Framework summaries, restricted to `filter` ids when given.
    ///
    /// Catalog order is kept; filter ids that match nothing are ignored.
    #[must_use]
    pub fn frameworks(&self, filter: Option<&[String]>) -> Vec<FrameworkInfo> {
        self.frameworks
            .iter()
            .filter(|framework| {
                filter.is_none_or(|ids| ids.iter().any(|id| framework.id.eq_ignore_ascii_case(id)))
            })
            .map(Framework::info)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Framework> {
        self.frameworks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }
}

impl ControlSource for Catalog {
    fn controls(&self, framework_id: &str) -> Result<Option<Vec<Control>>, SourceError> {
        Ok(self.get(framework_id).map(|framework| framework.controls.clone()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_lists_gdpr_ccpa_soc2() {
        let ids: Vec<String> = Catalog::builtin()
            .frameworks(None)
            .into_iter()
            .map(|info| info.id)
            .collect();
        assert_eq!(ids, vec!["gdpr", "ccpa", "soc2"]);
    }

    #[test]
    fn control_counts_reflect_catalog() {
        let infos = Catalog::builtin().frameworks(None);
        let counts: Vec<usize> = infos.iter().map(|info| info.control_count).collect();
        assert_eq!(counts, vec![5, 5, 0]);
    }

    #[test]
    fn filter_keeps_catalog_order_and_ignores_unknown_ids() {
        let filter = vec!["SOC2".to_string(), "gdpr".to_string(), "hipaa".to_string()];
        let ids: Vec<String> = Catalog::builtin()
            .frameworks(Some(&filter))
            .into_iter()
            .map(|info| info.id)
            .collect();
        assert_eq!(ids, vec!["gdpr", "soc2"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("GDPR").map(|f| f.id.as_str()), Some("gdpr"));
        assert!(catalog.get("hipaa").is_none());
    }

    #[test]
    fn source_distinguishes_unknown_from_empty() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.controls("hipaa").unwrap(), None);
        assert_eq!(catalog.controls("soc2").unwrap(), Some(Vec::new()));
        assert_eq!(catalog.controls("ccpa").unwrap().map(|c| c.len()), Some(5));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = Catalog::from_toml_str(
            r#"
            [[frameworks]]
            id = "x"
            [[frameworks]]
            id = "X"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn rejects_empty_id() {
        let err = Catalog::from_toml_str("[[frameworks]]\nid = \"  \"\n").unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }
}
