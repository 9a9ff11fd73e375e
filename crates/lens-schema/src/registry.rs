//! Named JSON Schemas for CookieLens documents.

use std::collections::BTreeMap;

use lens_core::entities;
use schemars::schema_for;

use crate::error::SchemaError;

/// Name of the schema describing a full `cookielens scan` result.
pub const SCAN_REPORT: &str = "scan_report";

/// Lookup table from document name to JSON Schema.
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, serde_json::Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = BTreeMap::new();

        // Scanner input
        register!(schemas, "snapshot", entities::Snapshot);
        register!(schemas, "cookie", entities::Cookie);

        // Catalog
        register!(schemas, "control", entities::Control);
        register!(schemas, "framework_info", entities::FrameworkInfo);

        // Engine output
        register!(schemas, "verdict", entities::Verdict);
        register!(schemas, "framework_result", entities::FrameworkResult);
        register!(schemas, "third_party_risk", entities::ThirdPartyRisk);
        register!(schemas, "overall_summary", entities::OverallSummary);
        register!(schemas, "report", entities::Report);
        register!(schemas, SCAN_REPORT, entities::ScanReport);

        Self { schemas }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate `instance` against the schema called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NotFound`] for an unknown name and
    /// [`SchemaError::ValidationFailed`] with every violation otherwise.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Compilation(e.to_string()))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| e.to_string())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}
