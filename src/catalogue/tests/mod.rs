//! Catalogue module tests
//!
//! Contains test suites for catalogue loading:
//! - CSV record splitting and row mapping tests
//! - Course grouping and search tests
//! - End-to-end loader tests against real temp files

#[cfg(test)]
mod index_tests;
