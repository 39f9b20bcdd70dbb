//! Property-based tests for the social-network structures.
//!
//! Random operation sequences are replayed into both the real network and a
//! deliberately naive oracle, then every derived analysis is compared:
//! symmetry and idempotence of mutation, path optimality, recommendation
//! ranking, and community membership against brute-force reachability.

mod oracle;
mod strategies;
