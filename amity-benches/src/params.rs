//! Benchmark parameter types.

use std::fmt;

/// Parameters identifying one synthetic network in benchmark output.
#[derive(Clone, Debug)]
pub struct NetworkBenchParams {
    /// Number of users in the network.
    pub user_count: usize,
    /// Friendships generated per user.
    pub friendships_per_user: usize,
}

impl fmt::Display for NetworkBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.user_count, self.friendships_per_user)
    }
}
