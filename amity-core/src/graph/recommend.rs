//! Friend recommendations ranked by mutual-friend overlap.
//!
//! A candidate is any user who is neither the subject nor already one of
//! their friends. Only candidates sharing at least one friend with the subject
//! are ranked, and those are exactly the users two hops away, so the
//! candidate pool is gathered from the friends-of-friends frontier instead of
//! scanning every user.

use indexmap::IndexSet;

use super::AdjacencyGraph;
use crate::id::UserId;

/// Number of recommendations returned when the caller does not choose.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// A suggested friend and the number of friends they share with the subject.
///
/// # Examples
/// ```
/// use amity_core::{Recommendation, UserId};
///
/// let recommendation = Recommendation::new(UserId::new(3), 2);
/// assert_eq!(recommendation.user(), UserId::new(3));
/// assert_eq!(recommendation.mutual_friends(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Recommendation {
    user: UserId,
    mutual_friends: usize,
}

impl Recommendation {
    /// Creates a recommendation for `user` backed by `mutual_friends` shared
    /// friends.
    #[must_use]
    pub const fn new(user: UserId, mutual_friends: usize) -> Self {
        Self {
            user,
            mutual_friends,
        }
    }

    /// The recommended user.
    #[must_use]
    pub const fn user(&self) -> UserId {
        self.user
    }

    /// Number of friends shared with the subject.
    #[must_use]
    pub const fn mutual_friends(&self) -> usize {
        self.mutual_friends
    }
}

impl AdjacencyGraph {
    /// Ranks up to `limit` users that `user` might know.
    ///
    /// Results are ordered by mutual-friend count descending, then by
    /// identifier ascending. Neither `user` nor their current friends are ever
    /// suggested, and candidates without a mutual friend are dropped. Returns
    /// an empty vector for an unknown user or a zero `limit`.
    ///
    /// # Examples
    /// ```
    /// use amity_core::{AdjacencyGraph, Recommendation, UserId};
    ///
    /// let mut graph = AdjacencyGraph::new();
    /// graph.add_friendship(UserId::new(1), UserId::new(2));
    /// graph.add_friendship(UserId::new(2), UserId::new(3));
    ///
    /// let ranked = graph.recommend_friends(UserId::new(1), 5);
    /// assert_eq!(ranked, vec![Recommendation::new(UserId::new(3), 1)]);
    /// ```
    #[must_use]
    pub fn recommend_friends(&self, user: UserId, limit: usize) -> Vec<Recommendation> {
        if limit == 0 {
            return Vec::new();
        }
        let Some(friends) = self.neighbour_set(user) else {
            return Vec::new();
        };

        let mut ranked: Vec<Recommendation> = self
            .friends_of_friends(user, friends)
            .into_iter()
            .map(|candidate| {
                Recommendation::new(candidate, self.mutual_friends_count(user, candidate))
            })
            .filter(|recommendation| recommendation.mutual_friends > 0)
            .collect();

        ranked.sort_unstable_by(|left, right| {
            right
                .mutual_friends
                .cmp(&left.mutual_friends)
                .then_with(|| left.user.cmp(&right.user))
        });
        ranked.truncate(limit);
        ranked
    }

    fn friends_of_friends(&self, user: UserId, friends: &IndexSet<UserId>) -> IndexSet<UserId> {
        friends
            .iter()
            .flat_map(|&friend| self.neighbours(friend))
            .filter(|candidate| *candidate != user && !friends.contains(candidate))
            .collect()
    }
}
