//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Schedule string parsing tests
//!
//! Type and conflict-detection tests live inline next to their code.

#[cfg(test)]
mod parser_tests;
