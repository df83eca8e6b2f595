//! Grouped JSON serialization of integrity records

mod writer;

pub use writer::*;
