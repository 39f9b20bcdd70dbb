//! Shared test utilities used across amity crates.

pub mod dataset;
pub mod property_profile;
pub mod tracing;
