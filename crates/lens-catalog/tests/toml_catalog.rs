use std::io::Write;

use lens_catalog::{Catalog, CatalogError};
use lens_core::ControlSource;
use lens_core::enums::ControlCategory;
use pretty_assertions::assert_eq;

const CUSTOM: &str = r#"
[[frameworks]]
id = "pci"
name = "PCI DSS"
description = "Payment Card Industry Data Security Standard"

[[frameworks.controls]]
id = "pci-secure-cookies"
name = "Secure cookies"
category = "Security"
requirement = "Cardholder cookies must be Secure"

[[frameworks.controls]]
id = "pci-network-segmentation"
name = "Network segmentation"
category = "Infrastructure"

[[frameworks]]
id = "gdpr"
name = "GDPR (consent only)"

[[frameworks.controls]]
id = "gdpr-consent"
name = "Consent"
category = "Privacy"
"#;

fn write_catalog(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn loads_frameworks_and_controls_from_file() {
    let file = write_catalog(CUSTOM);
    let catalog = Catalog::load(file.path()).unwrap();

    assert_eq!(catalog.len(), 2);
    let pci = catalog.get("PCI").unwrap();
    assert_eq!(pci.name, "PCI DSS");
    assert_eq!(pci.controls.len(), 2);
    assert_eq!(pci.controls[0].category, ControlCategory::Security);
    assert_eq!(pci.controls[0].requirement, "Cardholder cookies must be Secure");
    assert!(pci.controls[0].description.is_empty());
    assert_eq!(
        pci.controls[1].category,
        ControlCategory::Other("Infrastructure".into())
    );
}

#[test]
fn merge_replaces_in_place_and_appends_new() {
    let custom = Catalog::from_toml_str(CUSTOM).unwrap();
    let merged = Catalog::builtin().merge(custom);

    let ids: Vec<&str> = merged.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["gdpr", "ccpa", "soc2", "pci"]);

    let gdpr = merged.controls("gdpr").unwrap().unwrap();
    assert_eq!(gdpr.len(), 1);
    assert_eq!(gdpr[0].id, "gdpr-consent");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_file_is_parse_error() {
    let file = write_catalog("[[frameworks]]\nid = 3\n");
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[test]
fn empty_file_is_empty_catalog() {
    let file = write_catalog("");
    let catalog = Catalog::load(file.path()).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.controls("gdpr").unwrap(), None);
}
