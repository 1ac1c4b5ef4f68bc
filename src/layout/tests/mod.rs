//! Layout module tests
//!
//! Contains test suites for the calendar layout engine:
//! - Same-course grouping (stacking) tests
//! - Greedy lane-assignment tests
