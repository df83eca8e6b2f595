//! Target classification and per-kind handling
//!
//! A target string names a remote URL, a regular file, or a directory.
//! Classification picks the kind; the handler obtains a byte stream for
//! it and feeds the digest computer.

mod classifier;
mod handler;

pub use classifier::*;
pub use handler::*;
