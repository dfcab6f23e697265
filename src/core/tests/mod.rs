//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Game folder detection tests
//! - Listing and path tests

#[cfg(test)]
mod folder_tests;
