//! Orchestration: concurrent multi-target generation and comparison

mod compare;
mod generator;

pub use compare::*;
pub use generator::*;
