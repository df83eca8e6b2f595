//! Configuration module for SriGen
//!
//! Provides CLI argument parsing and the hash algorithm
//! selection domain.

mod settings;

pub use settings::*;
