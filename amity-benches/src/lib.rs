//! Benchmark support crate for amity.
//!
//! Provides seeded synthetic networks and parameter types used by the
//! Criterion benchmarks for path search, recommendations, and community
//! detection.

pub mod error;
pub mod params;
pub mod source;
