//! Union-find (disjoint set union) over user identifiers.
//!
//! Tracks which users are connected by some chain of friendships without
//! storing the chains themselves. Unions link roots by rank and lookups
//! compress the paths they walk, so repeated queries stay near-constant time.
//! Elements are created on first reference and merges are permanent.

mod communities;

use std::collections::HashMap;

use tracing::debug;

use crate::{error::DisjointSetError, id::UserId};

pub use self::communities::Communities;

/// Parent link and rank bound stored for every tracked identifier.
///
/// Keeping both in one entry means every tracked user always has a parent and
/// a rank.
#[derive(Clone, Copy, Debug)]
struct Entry {
    parent: UserId,
    rank: u8,
}

/// Disjoint-set forest keyed by [`UserId`].
///
/// # Examples
/// ```
/// use amity_core::{DisjointSet, UserId};
///
/// let mut set = DisjointSet::new();
/// set.unite(UserId::new(1), UserId::new(2));
/// set.add(UserId::new(3));
/// assert_eq!(set.connected(UserId::new(2), UserId::new(1)), Ok(true));
/// assert_eq!(set.connected(UserId::new(1), UserId::new(3)), Ok(false));
/// assert_eq!(set.component_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DisjointSet {
    entries: HashMap<UserId, Entry>,
    components: usize,
}

impl DisjointSet {
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `users` identifiers.
    #[must_use]
    pub fn with_capacity(users: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(users),
            components: 0,
        }
    }

    /// Tracks `user` as a singleton set if it is not already present.
    ///
    /// Returns `true` when the user was newly added.
    pub fn add(&mut self, user: UserId) -> bool {
        if self.entries.contains_key(&user) {
            return false;
        }
        self.entries.insert(
            user,
            Entry {
                parent: user,
                rank: 0,
            },
        );
        self.components += 1;
        true
    }

    /// Returns `true` when `user` has been added.
    #[must_use]
    pub fn contains(&self, user: UserId) -> bool {
        self.entries.contains_key(&user)
    }

    /// Number of tracked identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no identifiers are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of disjoint sets. Never increases as unions are applied.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the root representing the set that contains `user`.
    ///
    /// Every node visited on the way is re-pointed directly at the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownUser`] when `user` was never added.
    pub fn find(&mut self, user: UserId) -> Result<UserId, DisjointSetError> {
        if !self.contains(user) {
            return Err(DisjointSetError::UnknownUser { user });
        }
        Ok(self.find_tracked(user))
    }

    /// Returns whether `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownUser`] when either user was never
    /// added.
    pub fn connected(&mut self, left: UserId, right: UserId) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Merges the sets containing `left` and `right`, adding either if absent.
    ///
    /// The root of lower rank is linked beneath the other. On equal ranks the
    /// root of `right` is linked beneath the root of `left`, whose rank grows
    /// by one. Returns `true` when two distinct sets were merged.
    pub fn unite(&mut self, left: UserId, right: UserId) -> bool {
        self.add(left);
        self.add(right);
        let left_root = self.find_tracked(left);
        let right_root = self.find_tracked(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.rank(left_root);
        let right_rank = self.rank(right_root);
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        if let Some(entry) = self.entries.get_mut(&child) {
            entry.parent = parent;
        }
        if left_rank == right_rank
            && let Some(entry) = self.entries.get_mut(&parent)
        {
            entry.rank = entry.rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        debug!(%parent, %child, components = self.components, "merged communities");
        true
    }

    /// Groups every tracked user under the root of its set.
    ///
    /// Compresses every path as a side effect. Member order within a group is
    /// unspecified; use [`Communities::sorted`] for a deterministic view.
    pub fn communities(&mut self) -> Communities {
        let users: Vec<UserId> = self.entries.keys().copied().collect();
        let mut groups: HashMap<UserId, Vec<UserId>> = HashMap::with_capacity(self.components);
        for user in users {
            let root = self.find_tracked(user);
            groups.entry(root).or_default().push(user);
        }
        Communities::new(groups)
    }

    fn rank(&self, user: UserId) -> u8 {
        self.entries.get(&user).map_or(0, |entry| entry.rank)
    }

    /// Walks to the root of a tracked user and compresses the walked path.
    fn find_tracked(&mut self, user: UserId) -> UserId {
        let mut root = user;
        while let Some(entry) = self.entries.get(&root)
            && entry.parent != root
        {
            root = entry.parent;
        }

        let mut node = user;
        while node != root {
            let Some(entry) = self.entries.get_mut(&node) else {
                break;
            };
            let next = entry.parent;
            entry.parent = root;
            node = next;
        }
        root
    }
}
