//! CLI command implementations

pub mod chart;
pub mod eval;
pub mod list;
