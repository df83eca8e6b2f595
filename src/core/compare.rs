//! Two-target sha256 comparison
//!
//! A thin specialization of the generation engine: digest both targets
//! under sha256 and reduce to an equality verdict.

use crate::core::Generator;
use crate::error::{Result, SrigenError};

/// Outcome of comparing the sha256 digests of two targets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Whether the two digests match
    pub equal: bool,
    /// Digest of the first target
    pub digest_a: String,
    /// Digest of the second target
    pub digest_b: String,
}

/// Compare the sha256 digests of two targets.
///
/// Each target is digested through an independent generate call and
/// must yield at least one record; a target producing none fails with
/// an error naming it. Fetch and I/O errors from the underlying calls
/// propagate unchanged.
pub fn compare(generator: &Generator, a: &str, b: &str) -> Result<Comparison> {
    let digest_a = first_digest(generator, a)?;
    let digest_b = first_digest(generator, b)?;

    Ok(Comparison {
        equal: digest_a == digest_b,
        digest_a,
        digest_b,
    })
}

fn first_digest(generator: &Generator, target: &str) -> Result<String> {
    let records = generator.generate(&[target.to_string()])?;
    records
        .into_iter()
        .next()
        .map(|record| record.digest)
        .ok_or_else(|| SrigenError::empty_result([target]))
}

/// Validate comparison-mode arguments before any hashing is attempted.
///
/// Exactly two non-empty, distinct targets are required.
pub fn validate_compare_targets(targets: &[String]) -> Result<()> {
    if targets.len() != 2 {
        return Err(SrigenError::ComparisonInput(
            "expected exactly two targets for comparison".into(),
        ));
    }

    if targets.iter().any(|target| target.is_empty()) {
        return Err(SrigenError::ComparisonInput(
            "received an empty target for comparison".into(),
        ));
    }

    if targets[0] == targets[1] {
        return Err(SrigenError::ComparisonInput(
            "received two identical targets for comparison".into(),
        ));
    }

    Ok(())
}
