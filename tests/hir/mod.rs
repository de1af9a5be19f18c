//! HIR layer tests
//!
//! Tests for symbol extraction over whole files:
//! - Symbols of a realistic include
//! - Syntax-shape diagnostics and their ranges
//! - Malformed input that must not panic

pub mod tests_diagnostics;
pub mod tests_edge_cases;
