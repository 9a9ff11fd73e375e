use std::sync::Arc;

use chrono::{TimeZone, Utc};
use lens_config::StorageConfig;
use lens_core::entities::{FrameworkResults, OverallSummary, Report, ScanReport, Snapshot};
use lens_store::{ReportStore, StoreError};
use object_store::memory::InMemory;
use pretty_assertions::assert_eq;

fn scan_report() -> ScanReport {
    let scanned_at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
    let mut report = ScanReport::new(Report {
        scan_results: Snapshot::new("https://shop.example", scanned_at),
        compliance_analysis: FrameworkResults::new(),
        third_party_risks: Vec::new(),
        overall_summary: OverallSummary::default(),
    });
    report.narrative = Some("**Risk Level**: Low".into());
    report
}

#[tokio::test]
async fn put_then_get_in_memory() {
    let store = ReportStore::new(Arc::new(InMemory::new()), "s3://reports", "scans");
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 31, 5).unwrap();

    let location = store.put(&scan_report(), at).await.unwrap();
    assert_eq!(location, "s3://reports/scans/20250115T093105.000_scan.json");

    let restored = store.get("scans/20250115T093105.000_scan.json").await.unwrap();
    assert_eq!(restored, scan_report());
}

#[tokio::test]
async fn local_directory_backend_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        local_dir: dir.path().join("reports").display().to_string(),
        ..StorageConfig::default()
    };
    let store = ReportStore::from_config(&config).unwrap();
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();

    let location = store.put(&scan_report(), at).await.unwrap();
    assert!(location.starts_with("file://"));
    assert!(location.ends_with("/reports/scans/20250115T093000.000_scan.json"));

    let written = dir.path().join("reports/scans/20250115T093000.000_scan.json");
    let text = std::fs::read_to_string(written).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["scan_results"]["url"], "https://shop.example");
    assert_eq!(value["narrative"], "**Risk Level**: Low");
}

#[tokio::test]
async fn missing_report_is_object_store_error() {
    let store = ReportStore::new(Arc::new(InMemory::new()), "memory://", "scans");
    let err = store.get("scans/nope_scan.json").await.unwrap_err();
    assert!(matches!(err, StoreError::ObjectStore(_)));
}
