//! Preference framework tests
//!
//! - Descriptor dispatch and bound controls
//! - Registry contents and renderer sub-screen selection

#[cfg(test)]
mod item_tests;
