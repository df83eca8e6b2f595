//! Digest computation and integrity record construction
//!
//! Streams each byte source exactly once through the requested SHA-2
//! hash functions and renders the results as Subresource Integrity
//! records with embeddable markup tags.

mod digest;
mod integrity;

pub use digest::*;
pub use integrity::*;
