//! Operation strategies for property suites.
//!
//! Identifiers are drawn from a small pool so random sequences produce dense
//! overlaps: repeated friendships, self-pairs, multi-hop chains, and several
//! disjoint communities.

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::{SocialNetwork, UserId};

use super::oracle::OracleGraph;

/// Upper bound (exclusive) for generated identifiers.
pub(super) const ID_POOL: u64 = 16;

/// A single mutation applied to both the network and the oracle.
#[derive(Arbitrary, Clone, Copy, Debug)]
pub(super) enum Operation {
    AddUser(#[strategy(0..ID_POOL)] u64),
    AddFriendship(#[strategy(0..ID_POOL)] u64, #[strategy(0..ID_POOL)] u64),
}

impl Operation {
    pub(super) fn apply(self, network: &mut SocialNetwork, oracle: &mut OracleGraph) {
        match self {
            Self::AddUser(user) => {
                network.add_user(UserId::new(user));
                oracle.add_user(user);
            }
            Self::AddFriendship(left, right) => {
                network
                    .add_friendship(UserId::new(left), UserId::new(right))
                    .expect("default policy accepts every pair");
                oracle.add_friendship(left, right);
            }
        }
    }
}

/// Sequences of up to `max_len` operations.
pub(super) fn operations(max_len: usize) -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(any::<Operation>(), 0..=max_len)
}

/// Replays `operations` into a fresh network and oracle.
pub(super) fn replay(operations: &[Operation]) -> (SocialNetwork, OracleGraph) {
    let mut network = SocialNetwork::default();
    let mut oracle = OracleGraph::default();
    for operation in operations {
        operation.apply(&mut network, &mut oracle);
    }
    (network, oracle)
}
