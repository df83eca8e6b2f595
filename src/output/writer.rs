//! JSON report writer
//!
//! Groups ordered integrity records by file name, then algorithm, and
//! writes the nested report to a file or stdout.

use crate::error::{Result, SrigenError};
use crate::hash::IntegrityRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One algorithm's entry in the grouped report
#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    /// Rendered digest
    pub digest: &'a str,
    /// Embeddable markup fragment
    pub tag: &'a str,
    /// Fetch URL for remote targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
}

/// Group records by file name, then algorithm.
pub fn group_records(
    records: &[IntegrityRecord],
) -> BTreeMap<&str, BTreeMap<&str, ReportEntry<'_>>> {
    let mut report: BTreeMap<&str, BTreeMap<&str, ReportEntry>> = BTreeMap::new();

    for record in records {
        report.entry(record.file_name.as_str()).or_default().insert(
            record.algorithm(),
            ReportEntry {
                digest: &record.digest,
                tag: &record.tag,
                source: record.source.as_deref(),
            },
        );
    }

    report
}

/// Write the grouped JSON report to `out`, or stdout when `out` is `None`.
pub fn write_report(records: &[IntegrityRecord], out: Option<&Path>) -> Result<()> {
    let report = group_records(records);

    match out {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| SrigenError::output_write(path, e))?;
            serde_json::to_writer_pretty(&mut file, &report)
                .map_err(|e| SrigenError::output_write(path, e.into()))?;
            writeln!(file).map_err(|e| SrigenError::output_write(path, e))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, &report)
                .map_err(|e| SrigenError::output_write("stdout", e.into()))?;
            writeln!(handle).map_err(|e| SrigenError::output_write("stdout", e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file_name: &str, digest: &str, source: Option<&str>) -> IntegrityRecord {
        IntegrityRecord {
            digest: digest.to_string(),
            file_name: file_name.to_string(),
            tag: format!("<script src='{file_name}' integrity='{digest}'></script>"),
            source: source.map(String::from),
        }
    }

    #[test]
    fn test_groups_by_file_then_algorithm() {
        let records = vec![
            record("app.js", "sha256-aaa", None),
            record("app.js", "sha512-bbb", None),
            record("site.css", "sha256-ccc", None),
        ];

        let report = group_records(&records);

        assert_eq!(report.len(), 2);
        assert_eq!(report["app.js"].len(), 2);
        assert_eq!(report["app.js"]["sha256"].digest, "sha256-aaa");
        assert_eq!(report["site.css"]["sha256"].digest, "sha256-ccc");
    }

    #[test]
    fn test_source_omitted_for_local_records() {
        let records = vec![
            record("app.js", "sha256-aaa", None),
            record("lib.js", "sha256-bbb", Some("https://cdn.example.com/lib.js")),
        ];

        let value = serde_json::to_value(group_records(&records)).unwrap();

        assert!(value["app.js"]["sha256"].get("source").is_none());
        assert_eq!(
            value["lib.js"]["sha256"]["source"],
            "https://cdn.example.com/lib.js"
        );
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sri.json");
        let records = vec![record("app.js", "sha256-aaa", None)];

        write_report(&records, Some(&out)).unwrap();

        let contents = std::fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["app.js"]["sha256"]["digest"], "sha256-aaa");
        assert!(value["app.js"]["sha256"]["tag"]
            .as_str()
            .unwrap()
            .contains("sha256-aaa"));
    }

    #[test]
    fn test_write_report_bad_path_fails() {
        let records = vec![record("app.js", "sha256-aaa", None)];
        let err = write_report(&records, Some(Path::new("no/such/dir/sri.json"))).unwrap_err();
        assert!(matches!(err, SrigenError::OutputWrite { .. }));
    }
}
