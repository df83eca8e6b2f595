//! # SriGen - Subresource Integrity Digest Generator
//!
//! SriGen computes cryptographic content digests (SHA-256, SHA-384,
//! SHA-512) for local files, directories and remote assets, and renders
//! each digest as a Subresource Integrity record ready for embedding in
//! HTML markup.
//!
//! ## Features
//!
//! - **Heterogeneous targets**: files, directories, and HTTP(S) URLs
//! - **Concurrent fan-out**: one worker per target, per directory file,
//!   and per algorithm finalization
//! - **Single-pass streaming**: each byte source is read exactly once,
//!   broadcast to every requested hasher
//! - **Deterministic output**: records ordered by file name, then
//!   algorithm, for reproducible reports
//! - **Compare mode**: reduce two targets to a sha256 equality verdict
//!
//! ## Quick Start
//!
//! ```no_run
//! use srigen::config::HashSelection;
//! use srigen::core::Generator;
//!
//! let generator = Generator::new(HashSelection::Sha256);
//! let records = generator.generate(&["assets/app.js".to_string()]).unwrap();
//!
//! for record in &records {
//!     println!("{}  {}", record.digest, record.file_name);
//! }
//! ```
//!
//! ## Comparing Targets
//!
//! ```no_run
//! use srigen::config::HashSelection;
//! use srigen::core::{compare, Generator};
//!
//! let generator = Generator::new(HashSelection::Sha256);
//! let outcome = compare(&generator, "dist/app.js", "build/app.js").unwrap();
//!
//! println!("equal: {}", outcome.equal);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod error;
pub mod hash;
pub mod output;
pub mod target;

// Re-export commonly used types
pub use crate::config::{HashAlgorithm, HashSelection};
pub use crate::core::{Comparison, Generator};
pub use crate::error::{Result, SrigenError};
pub use crate::hash::IntegrityRecord;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```no_run
    //! use srigen::prelude::*;
    //! ```

    pub use crate::config::{CliArgs, HashAlgorithm, HashSelection};
    pub use crate::core::{compare, validate_compare_targets, Comparison, Generator};
    pub use crate::error::{Result, SrigenError};
    pub use crate::hash::{digest_stream, DigestValue, IntegrityRecord};
    pub use crate::output::{group_records, write_report};
    pub use crate::target::{classify, handle_target, TargetKind};
}
