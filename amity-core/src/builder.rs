//! Builder utilities for configuring [`SocialNetwork`] instances.
//!
//! Exposes the self-friendship policy and the default recommendation limit,
//! validated before a network is constructed.

use std::num::NonZeroUsize;

use crate::{Result, error::NetworkError, graph::DEFAULT_RECOMMENDATION_LIMIT, network::SocialNetwork};

/// How [`SocialNetwork::add_friendship`] treats a user befriending themself.
///
/// # Examples
/// ```
/// use amity_core::SelfFriendshipPolicy;
///
/// assert_eq!(SelfFriendshipPolicy::default(), SelfFriendshipPolicy::Ignore);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelfFriendshipPolicy {
    /// Ensure the user exists and store no edge.
    #[default]
    Ignore,
    /// Fail with [`NetworkError::SelfFriendship`] without touching either
    /// structure.
    Reject,
}

/// Configures and constructs [`SocialNetwork`] instances.
///
/// # Examples
/// ```
/// use amity_core::{SelfFriendshipPolicy, SocialNetworkBuilder};
///
/// let network = SocialNetworkBuilder::new()
///     .with_recommendation_limit(3)
///     .with_self_friendship(SelfFriendshipPolicy::Reject)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(network.recommendation_limit().get(), 3);
/// assert_eq!(network.self_friendship(), SelfFriendshipPolicy::Reject);
/// ```
#[derive(Debug, Clone)]
pub struct SocialNetworkBuilder {
    recommendation_limit: usize,
    self_friendship: SelfFriendshipPolicy,
    expected_users: usize,
}

impl Default for SocialNetworkBuilder {
    fn default() -> Self {
        Self {
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
            self_friendship: SelfFriendshipPolicy::Ignore,
            expected_users: 0,
        }
    }
}

impl SocialNetworkBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use amity_core::{SelfFriendshipPolicy, SocialNetworkBuilder};
    ///
    /// let builder = SocialNetworkBuilder::new();
    /// assert_eq!(builder.recommendation_limit(), 5);
    /// assert_eq!(builder.self_friendship(), SelfFriendshipPolicy::Ignore);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of suggestions returned by
    /// [`SocialNetwork::recommendations`].
    #[must_use]
    pub const fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    /// Returns the configured recommendation limit.
    #[must_use]
    pub const fn recommendation_limit(&self) -> usize {
        self.recommendation_limit
    }

    /// Sets how self-friendships are handled.
    #[must_use]
    pub const fn with_self_friendship(mut self, policy: SelfFriendshipPolicy) -> Self {
        self.self_friendship = policy;
        self
    }

    /// Returns the configured self-friendship policy.
    #[must_use]
    pub const fn self_friendship(&self) -> SelfFriendshipPolicy {
        self.self_friendship
    }

    /// Reserves room for `users` identifiers in both structures.
    #[must_use]
    pub const fn with_expected_users(mut self, users: usize) -> Self {
        self.expected_users = users;
        self
    }

    /// Returns the configured capacity hint.
    #[must_use]
    pub const fn expected_users(&self) -> usize {
        self.expected_users
    }

    /// Validates the configuration and constructs a [`SocialNetwork`].
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidRecommendationLimit`] when the
    /// recommendation limit is zero.
    ///
    /// # Examples
    /// ```
    /// use amity_core::{NetworkError, SocialNetworkBuilder};
    ///
    /// let err = SocialNetworkBuilder::new()
    ///     .with_recommendation_limit(0)
    ///     .build()
    ///     .expect_err("zero limit is rejected");
    /// assert!(matches!(err, NetworkError::InvalidRecommendationLimit { got: 0 }));
    /// ```
    pub fn build(self) -> Result<SocialNetwork> {
        let recommendation_limit = NonZeroUsize::new(self.recommendation_limit).ok_or(
            NetworkError::InvalidRecommendationLimit {
                got: self.recommendation_limit,
            },
        )?;

        Ok(SocialNetwork::new(
            recommendation_limit,
            self.self_friendship,
            self.expected_users,
        ))
    }
}
