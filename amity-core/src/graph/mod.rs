//! Undirected adjacency graph of users and friendships.
//!
//! The graph owns exact adjacency and answers every neighbourhood query:
//! membership, neighbour lookup, breadth-first shortest paths, and
//! mutual-friend recommendations. Neighbour sets preserve insertion order so
//! traversals are reproducible for a given mutation history.
//!
//! Queries are total. An identifier the graph has never seen behaves like an
//! isolated user with no neighbours.

mod invariants;
mod path;
mod recommend;

use indexmap::{IndexMap, IndexSet};

use crate::id::UserId;

pub use self::invariants::SymmetryViolation;
pub use self::recommend::{DEFAULT_RECOMMENDATION_LIMIT, Recommendation};

/// Undirected friendship graph keyed by [`UserId`].
///
/// # Examples
/// ```
/// use amity_core::{AdjacencyGraph, UserId};
///
/// let mut graph = AdjacencyGraph::new();
/// graph.add_friendship(UserId::new(1), UserId::new(2));
/// assert!(graph.are_friends(UserId::new(2), UserId::new(1)));
/// assert_eq!(graph.user_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: IndexMap<UserId, IndexSet<UserId>>,
}

impl AdjacencyGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `users` nodes.
    #[must_use]
    pub fn with_capacity(users: usize) -> Self {
        Self {
            adjacency: IndexMap::with_capacity(users),
        }
    }

    /// Ensures `user` is present. Returns `true` when the user was created.
    pub fn add_user(&mut self, user: UserId) -> bool {
        if self.adjacency.contains_key(&user) {
            return false;
        }
        self.adjacency.insert(user, IndexSet::new());
        true
    }

    /// Ensures both endpoints exist and links them in both directions.
    ///
    /// Returns `true` when a new edge was created. Naming the same user on both
    /// ends only ensures the user exists; the graph never stores self-loops.
    ///
    /// # Examples
    /// ```
    /// use amity_core::{AdjacencyGraph, UserId};
    ///
    /// let mut graph = AdjacencyGraph::new();
    /// assert!(graph.add_friendship(UserId::new(1), UserId::new(2)));
    /// assert!(!graph.add_friendship(UserId::new(2), UserId::new(1)));
    /// assert!(!graph.add_friendship(UserId::new(3), UserId::new(3)));
    /// assert_eq!(graph.degree(UserId::new(3)), 0);
    /// ```
    pub fn add_friendship(&mut self, left: UserId, right: UserId) -> bool {
        if left == right {
            self.add_user(left);
            return false;
        }
        let inserted = self.adjacency.entry(left).or_default().insert(right);
        self.adjacency.entry(right).or_default().insert(left);
        inserted
    }

    /// Returns `true` when `user` is present.
    #[must_use]
    pub fn has_user(&self, user: UserId) -> bool {
        self.adjacency.contains_key(&user)
    }

    /// Iterates the neighbours of `user` in insertion order.
    ///
    /// Yields nothing for an unknown user.
    pub fn neighbours(&self, user: UserId) -> impl Iterator<Item = UserId> + '_ {
        self.neighbour_set(user).into_iter().flatten().copied()
    }

    /// Returns `true` when `left` and `right` are direct friends.
    #[must_use]
    pub fn are_friends(&self, left: UserId, right: UserId) -> bool {
        self.neighbour_set(left)
            .is_some_and(|neighbours| neighbours.contains(&right))
    }

    /// Number of friends `user` has; zero for an unknown user.
    #[must_use]
    pub fn degree(&self, user: UserId) -> usize {
        self.neighbour_set(user).map_or(0, IndexSet::len)
    }

    /// Snapshot of every known user.
    ///
    /// The order follows first reference, but callers must not rely on it.
    #[must_use]
    pub fn users(&self) -> Vec<UserId> {
        self.adjacency.keys().copied().collect()
    }

    /// Number of known users.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected friendships.
    #[must_use]
    pub fn friendship_count(&self) -> usize {
        self.adjacency
            .iter()
            .map(|(user, friends)| friends.iter().filter(|friend| *friend > user).count())
            .sum()
    }

    /// Counts the friends `left` and `right` have in common.
    ///
    /// Iterates the smaller neighbour set and probes the larger one, so the
    /// cost is `O(min(deg(left), deg(right)))`.
    ///
    /// # Examples
    /// ```
    /// use amity_core::{AdjacencyGraph, UserId};
    ///
    /// let mut graph = AdjacencyGraph::new();
    /// graph.add_friendship(UserId::new(1), UserId::new(3));
    /// graph.add_friendship(UserId::new(2), UserId::new(3));
    /// assert_eq!(graph.mutual_friends_count(UserId::new(1), UserId::new(2)), 1);
    /// ```
    #[must_use]
    pub fn mutual_friends_count(&self, left: UserId, right: UserId) -> usize {
        let Some(left_set) = self.neighbour_set(left) else {
            return 0;
        };
        let Some(right_set) = self.neighbour_set(right) else {
            return 0;
        };
        let (smaller, larger) = if left_set.len() <= right_set.len() {
            (left_set, right_set)
        } else {
            (right_set, left_set)
        };
        smaller
            .iter()
            .filter(|candidate| larger.contains(*candidate))
            .count()
    }

    pub(crate) fn neighbour_set(&self, user: UserId) -> Option<&IndexSet<UserId>> {
        self.adjacency.get(&user)
    }
}

#[cfg(test)]
mod tests;
