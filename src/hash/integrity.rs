//! Integrity record construction and markup rendering
//!
//! One record per (target, algorithm) pair: the rendered digest, the
//! target's base name, an embeddable markup tag, and the fetch URL for
//! remote targets.

use crate::hash::DigestValue;
use reqwest::Url;
use serde::Serialize;

/// One Subresource Integrity record for a (target, algorithm) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityRecord {
    /// Rendered digest, e.g. `sha256-<base64>`
    pub digest: String,
    /// Base name of the target (final path segment)
    #[serde(rename = "file")]
    pub file_name: String,
    /// Embeddable markup fragment carrying the digest
    pub tag: String,
    /// Fetch URL, set only for remote targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl IntegrityRecord {
    /// The SRI algorithm prefix of this record's digest, e.g. "sha256"
    pub fn algorithm(&self) -> &str {
        self.digest.split('-').next().unwrap_or(&self.digest)
    }
}

/// Build one integrity record per computed digest for a target.
pub fn records_for_target(target: &str, digests: Vec<DigestValue>) -> Vec<IntegrityRecord> {
    let source = Url::parse(target)
        .ok()
        .filter(|url| url.has_authority())
        .map(|_| target.to_string());

    digests
        .into_iter()
        .map(|digest| IntegrityRecord {
            file_name: base_name(target),
            tag: render_tag(target, &digest.value),
            source: source.clone(),
            digest: digest.value,
        })
        .collect()
}

/// Markup fragment referencing `target` with `digest` as its integrity
/// attribute: a stylesheet link for `.css` targets, a script tag otherwise.
fn render_tag(target: &str, digest: &str) -> String {
    if target.ends_with(".css") {
        format!("<link rel='stylesheet' href='{target}' integrity='{digest}'>")
    } else {
        format!("<script src='{target}' integrity='{digest}'></script>")
    }
}

/// Final path segment of a target path or URL.
fn base_name(target: &str) -> String {
    let trimmed = target.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HashAlgorithm;

    fn digest() -> DigestValue {
        DigestValue {
            algorithm: HashAlgorithm::Sha256,
            value: "sha256-lClGOfcWqtQdAvO3zCRzZEg/4RmOMbr9/V54QO76j/A=".into(),
        }
    }

    #[test]
    fn test_script_tag_for_js_target() {
        let records = records_for_target("assets/app.js", vec![digest()]);

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].tag,
            "<script src='assets/app.js' integrity='sha256-lClGOfcWqtQdAvO3zCRzZEg/4RmOMbr9/V54QO76j/A='></script>"
        );
    }

    #[test]
    fn test_link_tag_for_css_target() {
        let records = records_for_target("assets/site.css", vec![digest()]);
        assert!(records[0].tag.starts_with("<link rel='stylesheet'"));
        assert!(records[0].tag.contains("href='assets/site.css'"));
    }

    #[test]
    fn test_file_name_is_base_name() {
        let records = records_for_target("dist/vendor/app.min.js", vec![digest()]);
        assert_eq!(records[0].file_name, "app.min.js");
    }

    #[test]
    fn test_source_set_for_remote_target() {
        let target = "https://cdn.example.com/lib/app.js";
        let records = records_for_target(target, vec![digest()]);

        assert_eq!(records[0].source.as_deref(), Some(target));
        assert_eq!(records[0].file_name, "app.js");
    }

    #[test]
    fn test_source_empty_for_local_target() {
        let records = records_for_target("assets/app.js", vec![digest()]);
        assert!(records[0].source.is_none());
    }

    #[test]
    fn test_algorithm_extracted_from_digest() {
        let records = records_for_target("app.js", vec![digest()]);
        assert_eq!(records[0].algorithm(), "sha256");
    }

    #[test]
    fn test_one_record_per_digest() {
        let digests = vec![
            digest(),
            DigestValue {
                algorithm: HashAlgorithm::Sha512,
                value: "sha512-abc".into(),
            },
        ];

        let records = records_for_target("app.js", digests);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.file_name == "app.js"));
    }
}
