//! Seeded synthetic social networks for benchmarking.
//!
//! Users `0..user_count` are dealt round-robin into `community_count`
//! communities, and every user befriends `friendships_per_user` random members
//! of their own community. Communities therefore never touch, which gives the
//! community benchmarks a known answer and the path benchmarks disconnected
//! pairs to miss.

use amity_core::{SocialNetwork, SocialNetworkBuilder, UserId};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Errors that may occur during synthetic network generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested user count was zero.
    #[error("user count must be greater than zero")]
    ZeroUsers,
    /// The requested community count was zero.
    #[error("community count must be greater than zero")]
    ZeroCommunities,
    /// More communities were requested than there are users.
    #[error("cannot split {users} users into {communities} communities")]
    TooManyCommunities {
        /// Requested user count.
        users: usize,
        /// Requested community count.
        communities: usize,
    },
}

/// Configuration for synthetic network generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of users to generate.
    pub user_count: usize,
    /// Friendships each user initiates inside their community.
    pub friendships_per_user: usize,
    /// Number of disjoint communities.
    pub community_count: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Friendship pairs generated from a [`SyntheticConfig`].
///
/// # Examples
///
/// ```
/// use amity_benches::source::{SyntheticConfig, SyntheticFriendships};
///
/// let config = SyntheticConfig {
///     user_count: 12,
///     friendships_per_user: 2,
///     community_count: 3,
///     seed: 7,
/// };
/// let friendships = SyntheticFriendships::generate(&config).expect("valid config");
/// assert_eq!(friendships.pairs().len(), 24);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticFriendships {
    users: Vec<UserId>,
    pairs: Vec<(UserId, UserId)>,
}

impl SyntheticFriendships {
    /// Generates friendships eagerly from the given configuration.
    ///
    /// Pairs may repeat or join a user to themself; the network treats both
    /// as no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError`] when either count is zero or there are more
    /// communities than users.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        let SyntheticConfig {
            user_count,
            friendships_per_user,
            community_count,
            seed,
        } = *config;
        if user_count == 0 {
            return Err(SyntheticError::ZeroUsers);
        }
        if community_count == 0 {
            return Err(SyntheticError::ZeroCommunities);
        }
        if community_count > user_count {
            return Err(SyntheticError::TooManyCommunities {
                users: user_count,
                communities: community_count,
            });
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let users: Vec<UserId> = (0..user_count).map(|index| UserId::new(index as u64)).collect();
        let mut pairs = Vec::with_capacity(user_count.saturating_mul(friendships_per_user));
        for first in 0..community_count {
            let members: Vec<UserId> = users
                .iter()
                .skip(first)
                .step_by(community_count)
                .copied()
                .collect();
            for &user in &members {
                for _ in 0..friendships_per_user {
                    if let Some(&friend) = members.get(rng.gen_range(0..members.len())) {
                        pairs.push((user, friend));
                    }
                }
            }
        }

        Ok(Self { users, pairs })
    }

    /// Every generated user, ascending.
    #[must_use]
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    /// Generated friendship pairs.
    #[must_use]
    pub fn pairs(&self) -> &[(UserId, UserId)] {
        &self.pairs
    }

    /// Builds a network holding every user and friendship.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by the network builder.
    pub fn build_network(&self) -> Result<SocialNetwork, BenchSetupError> {
        let mut network = SocialNetworkBuilder::new()
            .with_expected_users(self.users.len())
            .build()?;
        for &user in &self.users {
            network.add_user(user);
        }
        network.extend_friendships(self.pairs.iter().copied())?;
        Ok(network)
    }
}
