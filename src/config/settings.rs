//! CLI arguments and algorithm selection
//!
//! Defines the command-line surface and the closed set of supported
//! hash algorithms.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SriGen - Subresource Integrity digest generator
#[derive(Parser, Debug, Clone)]
#[command(name = "srigen")]
#[command(author = "SriGen Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate Subresource Integrity digests for files, directories and URLs")]
#[command(long_about = r#"
SriGen computes Subresource Integrity digests for heterogeneous targets:
local files, the immediate regular files of a directory, or remote assets
fetched over HTTP. Each digest is rendered as an SRI string together with
an embeddable script or stylesheet tag.

Examples:
  srigen assets/app.js                        # digest one file, all algorithms
  srigen assets/ -a sha256 -o sri.json        # digest a directory into a file
  srigen https://cdn.example.com/lib.min.js   # digest a remote script
  srigen -c dist/app.js build/app.js          # compare two targets by sha256
"#)]
pub struct CliArgs {
    /// Targets to digest: file paths, directories, or absolute URLs
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<String>,

    /// Hash algorithm(s) to compute
    #[arg(
        short = 'a',
        long,
        value_enum,
        default_value = "all",
        value_name = "ALGO"
    )]
    pub algorithm: HashSelection,

    /// Write the JSON report to this file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Compare the sha256 digests of exactly two targets
    #[arg(short = 'c', long)]
    pub compare: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Hash algorithm selection for digest generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashSelection {
    /// SHA-256 only
    Sha256,
    /// SHA-384 only
    Sha384,
    /// SHA-512 only
    Sha512,
    /// All three algorithms
    All,
}

impl HashSelection {
    /// The concrete algorithms this selection expands to
    pub fn algorithms(&self) -> &'static [HashAlgorithm] {
        match self {
            Self::Sha256 => &[HashAlgorithm::Sha256],
            Self::Sha384 => &[HashAlgorithm::Sha384],
            Self::Sha512 => &[HashAlgorithm::Sha512],
            Self::All => &[
                HashAlgorithm::Sha256,
                HashAlgorithm::Sha384,
                HashAlgorithm::Sha512,
            ],
        }
    }
}

/// A single supported hash algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256 (32-byte digest)
    Sha256,
    /// SHA-384 (48-byte digest)
    Sha384,
    /// SHA-512 (64-byte digest)
    Sha512,
}

impl HashAlgorithm {
    /// SRI prefix name, e.g. "sha256"
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest length in bits
    pub fn bits(&self) -> usize {
        match self {
            Self::Sha256 => 256,
            Self::Sha384 => 384,
            Self::Sha512 => 512,
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_expands_to_algorithms() {
        assert_eq!(
            HashSelection::Sha256.algorithms(),
            &[HashAlgorithm::Sha256]
        );
        assert_eq!(HashSelection::All.algorithms().len(), 3);
    }

    #[test]
    fn test_algorithm_names_match_bits() {
        for algorithm in HashSelection::All.algorithms() {
            assert_eq!(
                algorithm.name(),
                format!("sha{}", algorithm.bits())
            );
        }
    }

    #[test]
    fn test_algorithm_ordering() {
        assert!(HashAlgorithm::Sha256 < HashAlgorithm::Sha384);
        assert!(HashAlgorithm::Sha384 < HashAlgorithm::Sha512);
    }
}
