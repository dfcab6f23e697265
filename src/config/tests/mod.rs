//! Config module tests
//!
//! - Store tests (typed accessors, XML persistence, corrupt files)
//! - Local preference file tests

#[cfg(test)]
mod store_tests;
