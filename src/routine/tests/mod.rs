//! Routine module tests
//!
//! Contains test suites for routine state management:
//! - Admission, rejection and role assignment tests
//!
//! Palette and notification tests live inline next to their code.
