use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::enums::ComplianceStatus;

/// Evaluation result for a single framework.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FrameworkResult {
    pub framework: String,
    /// Rounded to one decimal, always within `[0, 100]`.
    pub score: f64,
    pub status: ComplianceStatus,
    pub passed_controls: Vec<String>,
    pub failed_controls: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

impl FrameworkResult {
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.passed_controls.len()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.failed_controls.len()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }
}

/// Framework results keyed by framework id, in evaluation order.
///
/// Serializes as a JSON object whose keys keep the order the frameworks were
/// requested in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameworkResults {
    entries: Vec<(String, FrameworkResult)>,
}

impl FrameworkResults {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a result. A repeated id replaces the earlier result in place.
    pub fn insert(&mut self, framework_id: impl Into<String>, result: FrameworkResult) {
        let framework_id = framework_id.into();
        if let Some(slot) = self.entries.iter_mut().find(|(id, _)| *id == framework_id) {
            slot.1 = result;
        } else {
            self.entries.push((framework_id, result));
        }
    }

    #[must_use]
    pub fn get(&self, framework_id: &str) -> Option<&FrameworkResult> {
        self.entries
            .iter()
            .find(|(id, _)| id == framework_id)
            .map(|(_, result)| result)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &FrameworkResult> {
        self.entries.iter().map(|(_, result)| result)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrameworkResult)> {
        self.entries.iter().map(|(id, result)| (id.as_str(), result))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, FrameworkResult)> for FrameworkResults {
    fn from_iter<I: IntoIterator<Item = (String, FrameworkResult)>>(iter: I) -> Self {
        let mut results = Self::new();
        for (id, result) in iter {
            results.insert(id, result);
        }
        results
    }
}

impl Serialize for FrameworkResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, result) in &self.entries {
            map.serialize_entry(id, result)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FrameworkResults {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor;

        impl<'de> Visitor<'de> for OrderedVisitor {
            type Value = FrameworkResults;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of framework id to framework result")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut results = FrameworkResults::new();
                while let Some((id, result)) = access.next_entry::<String, FrameworkResult>()? {
                    results.insert(id, result);
                }
                Ok(results)
            }
        }

        deserializer.deserialize_map(OrderedVisitor)
    }
}

impl JsonSchema for FrameworkResults {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("FrameworkResults")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "object",
            "additionalProperties": generator.subschema_for::<FrameworkResult>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn result(framework: &str, score: f64) -> FrameworkResult {
        FrameworkResult {
            framework: framework.to_string(),
            score,
            status: ComplianceStatus::from_score(score),
            passed_controls: Vec::new(),
            failed_controls: Vec::new(),
            warnings: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    #[test]
    fn serialization_keeps_insertion_order() {
        let mut results = FrameworkResults::new();
        results.insert("gdpr", result("GDPR", 100.0));
        results.insert("ccpa", result("CCPA", 50.0));
        results.insert("aaa", result("AAA", 0.0));

        let json = serde_json::to_string(&results).unwrap();
        let gdpr = json.find("\"gdpr\"").unwrap();
        let ccpa = json.find("\"ccpa\"").unwrap();
        let aaa = json.find("\"aaa\"").unwrap();
        assert!(gdpr < ccpa && ccpa < aaa, "unexpected key order: {json}");
    }

    #[test]
    fn deserialization_keeps_document_order() {
        let mut results = FrameworkResults::new();
        results.insert("zeta", result("ZETA", 10.0));
        results.insert("alpha", result("ALPHA", 90.0));

        let json = serde_json::to_string(&results).unwrap();
        let recovered: FrameworkResults = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }

    #[test]
    fn repeated_insert_replaces_in_place() {
        let mut results = FrameworkResults::new();
        results.insert("gdpr", result("GDPR", 10.0));
        results.insert("ccpa", result("CCPA", 20.0));
        results.insert("gdpr", result("GDPR", 30.0));

        assert_eq!(results.len(), 2);
        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["gdpr", "ccpa"]);
        assert!((results.get("gdpr").unwrap().score - 30.0).abs() < f64::EPSILON);
    }
}
