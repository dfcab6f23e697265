//! UI module tests
//!
//! Contains test suites for the headless UI models:
//! - Slide-in menu state machine tests
//! - File selector controller tests
//! - Engine launcher tests

#[cfg(test)]
mod menu_tests;
