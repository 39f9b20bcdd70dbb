//! Social-network facade composing the adjacency graph and the disjoint set.
//!
//! Mutations are mirrored into both structures so path and recommendation
//! queries (answered by the graph) and community queries (answered by the
//! disjoint set) describe the same network. Neither structure knows about the
//! other.

use std::num::NonZeroUsize;

use tracing::{field, instrument, warn};

use crate::{
    Result,
    builder::SelfFriendshipPolicy,
    disjoint_set::{Communities, DisjointSet},
    error::NetworkError,
    graph::{AdjacencyGraph, DEFAULT_RECOMMENDATION_LIMIT, Recommendation},
    id::UserId,
};

/// Entry point for building a social network and querying its analyses.
///
/// # Examples
/// ```
/// use amity_core::{Recommendation, SocialNetwork, UserId};
///
/// let mut network = SocialNetwork::default();
/// for (left, right) in [(1, 2), (2, 3), (7, 8)] {
///     network.add_friendship(UserId::new(left), UserId::new(right))?;
/// }
///
/// assert_eq!(network.shortest_path(UserId::new(1), UserId::new(3)).len(), 3);
/// assert_eq!(
///     network.recommendations(UserId::new(1)),
///     vec![Recommendation::new(UserId::new(3), 1)],
/// );
/// assert_eq!(network.communities().len(), 2);
/// # Ok::<(), amity_core::NetworkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SocialNetwork {
    graph: AdjacencyGraph,
    communities: DisjointSet,
    recommendation_limit: NonZeroUsize,
    self_friendship: SelfFriendshipPolicy,
}

const DEFAULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(DEFAULT_RECOMMENDATION_LIMIT) {
    Some(limit) => limit,
    None => NonZeroUsize::MIN,
};

impl Default for SocialNetwork {
    /// Equivalent to `SocialNetworkBuilder::new().build()`.
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, SelfFriendshipPolicy::default(), 0)
    }
}

impl SocialNetwork {
    pub(crate) fn new(
        recommendation_limit: NonZeroUsize,
        self_friendship: SelfFriendshipPolicy,
        expected_users: usize,
    ) -> Self {
        Self {
            graph: AdjacencyGraph::with_capacity(expected_users),
            communities: DisjointSet::with_capacity(expected_users),
            recommendation_limit,
            self_friendship,
        }
    }

    /// Builds a network with the default configuration from friendship pairs.
    ///
    /// Self-friendships only register the user, as with
    /// [`SelfFriendshipPolicy::Ignore`].
    #[must_use]
    pub fn from_friendships<I>(friendships: I) -> Self
    where
        I: IntoIterator<Item = (UserId, UserId)>,
    {
        let mut network = Self::default();
        for (left, right) in friendships {
            network.link(left, right);
        }
        network
    }

    /// Number of suggestions returned by [`Self::recommendations`].
    #[must_use]
    pub const fn recommendation_limit(&self) -> NonZeroUsize {
        self.recommendation_limit
    }

    /// Self-friendship policy applied by [`Self::add_friendship`].
    #[must_use]
    pub const fn self_friendship(&self) -> SelfFriendshipPolicy {
        self.self_friendship
    }

    /// Read-only access to the adjacency graph.
    #[must_use]
    pub const fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Registers `user` in both structures. Returns `true` when the user is new.
    pub fn add_user(&mut self, user: UserId) -> bool {
        let created = self.graph.add_user(user);
        self.communities.add(user);
        created
    }

    /// Records a friendship in both structures, creating missing users.
    ///
    /// Returns `true` when the friendship is new. Repeating a friendship in
    /// either direction changes nothing.
    ///
    /// # Errors
    /// Returns [`NetworkError::SelfFriendship`] when `left == right` and the
    /// network was built with [`SelfFriendshipPolicy::Reject`]. Neither
    /// structure is modified in that case.
    #[instrument(
        name = "network.add_friendship",
        level = "debug",
        skip_all,
        fields(left = %left, right = %right),
    )]
    pub fn add_friendship(&mut self, left: UserId, right: UserId) -> Result<bool> {
        if left == right && self.self_friendship == SelfFriendshipPolicy::Reject {
            warn!(user = %left, "rejected self-friendship");
            return Err(NetworkError::SelfFriendship { user: left });
        }
        Ok(self.link(left, right))
    }

    /// Adds every friendship from `friendships`, stopping at the first error.
    ///
    /// Returns how many friendships were new.
    ///
    /// # Errors
    /// Propagates the first error from [`Self::add_friendship`]; friendships
    /// before it stay applied.
    pub fn extend_friendships<I>(&mut self, friendships: I) -> Result<usize>
    where
        I: IntoIterator<Item = (UserId, UserId)>,
    {
        let mut created = 0;
        for (left, right) in friendships {
            if self.add_friendship(left, right)? {
                created += 1;
            }
        }
        Ok(created)
    }

    fn link(&mut self, left: UserId, right: UserId) -> bool {
        let created = self.graph.add_friendship(left, right);
        self.communities.unite(left, right);
        created
    }

    /// Returns `true` when `user` is part of the network.
    #[must_use]
    pub fn has_user(&self, user: UserId) -> bool {
        self.graph.has_user(user)
    }

    /// Iterates the direct friends of `user`; empty for an unknown user.
    pub fn neighbours(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        self.graph.neighbours(user)
    }

    /// Snapshot of every user in unspecified order.
    #[must_use]
    pub fn users(&self) -> Vec<UserId> {
        self.graph.users()
    }

    /// Number of users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.graph.user_count()
    }

    /// Number of friendships.
    #[must_use]
    pub fn friendship_count(&self) -> usize {
        self.graph.friendship_count()
    }

    /// Number of friends `left` and `right` share.
    #[must_use]
    pub fn mutual_friends_count(&self, left: UserId, right: UserId) -> usize {
        self.graph.mutual_friends_count(left, right)
    }

    /// Shortest chain of friendships between two users.
    ///
    /// See [`AdjacencyGraph::shortest_path`].
    #[must_use]
    #[instrument(
        name = "network.shortest_path",
        level = "debug",
        skip_all,
        fields(source = %source, target = %target, hops = field::Empty),
    )]
    pub fn shortest_path(&self, source: UserId, target: UserId) -> Vec<UserId> {
        let path = self.graph.shortest_path(source, target);
        if let Some(hops) = path.len().checked_sub(1) {
            tracing::Span::current().record("hops", hops);
        }
        path
    }

    /// Ranks up to `limit` people `user` may know.
    ///
    /// See [`AdjacencyGraph::recommend_friends`].
    #[must_use]
    #[instrument(
        name = "network.recommend_friends",
        level = "debug",
        skip_all,
        fields(user = %user, limit = limit, returned = field::Empty),
    )]
    pub fn recommend_friends(&self, user: UserId, limit: usize) -> Vec<Recommendation> {
        let ranked = self.graph.recommend_friends(user, limit);
        tracing::Span::current().record("returned", ranked.len());
        ranked
    }

    /// Ranks suggestions for `user` using the configured limit.
    #[must_use]
    pub fn recommendations(&self, user: UserId) -> Vec<Recommendation> {
        self.recommend_friends(user, self.recommendation_limit.get())
    }

    /// Groups users into connected communities.
    ///
    /// See [`DisjointSet::communities`].
    #[instrument(
        name = "network.communities",
        level = "debug",
        skip_all,
        fields(users = self.communities.len(), communities = field::Empty),
    )]
    pub fn communities(&mut self) -> Communities {
        let communities = self.communities.communities();
        tracing::Span::current().record("communities", communities.len());
        communities
    }

    /// Number of connected communities.
    #[must_use]
    pub const fn community_count(&self) -> usize {
        self.communities.component_count()
    }

    /// Root of the community containing `user`.
    ///
    /// # Errors
    /// Returns [`NetworkError::DisjointSet`] when `user` is not part of the
    /// network.
    pub fn community_of(&mut self, user: UserId) -> Result<UserId> {
        Ok(self.communities.find(user)?)
    }

    /// Returns whether a chain of friendships connects `left` and `right`.
    ///
    /// # Errors
    /// Returns [`NetworkError::UnknownUser`] naming the first user that is not
    /// part of the network.
    pub fn are_connected(&mut self, left: UserId, right: UserId) -> Result<bool> {
        for user in [left, right] {
            if !self.has_user(user) {
                return Err(NetworkError::UnknownUser { user });
            }
        }
        Ok(self.communities.connected(left, right)?)
    }
}

#[cfg(test)]
mod tests;
