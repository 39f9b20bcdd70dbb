//! Community snapshots produced by [`super::DisjointSet::communities`].

use std::collections::HashMap;

use crate::id::UserId;

/// Mapping from each community root to the users it contains.
///
/// The root is whichever member the disjoint set elected as representative;
/// it is stable only until the next merge. Member order is unspecified.
///
/// # Examples
/// ```
/// use amity_core::{DisjointSet, UserId};
///
/// let mut set = DisjointSet::new();
/// set.unite(UserId::new(2), UserId::new(1));
/// set.add(UserId::new(5));
///
/// let communities = set.communities();
/// assert_eq!(communities.len(), 2);
/// assert_eq!(
///     communities.sorted(),
///     vec![vec![UserId::new(1), UserId::new(2)], vec![UserId::new(5)]],
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Communities {
    groups: HashMap<UserId, Vec<UserId>>,
}

impl Communities {
    pub(crate) fn new(groups: HashMap<UserId, Vec<UserId>>) -> Self {
        Self { groups }
    }

    /// Number of communities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` when there are no users at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates `(root, members)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, &[UserId])> + '_ {
        self.groups
            .iter()
            .map(|(root, members)| (*root, members.as_slice()))
    }

    /// Members of the community whose root is `root`.
    #[must_use]
    pub fn members(&self, root: UserId) -> Option<&[UserId]> {
        self.groups.get(&root).map(Vec::as_slice)
    }

    /// Root of the community containing `user`.
    ///
    /// This scans every group; prefer the disjoint set's `find` for repeated
    /// lookups.
    #[must_use]
    pub fn community_of(&self, user: UserId) -> Option<UserId> {
        self.groups
            .iter()
            .find(|(_, members)| members.contains(&user))
            .map(|(root, _)| *root)
    }

    /// Deterministic view: members sorted ascending, groups ordered by their
    /// smallest member.
    #[must_use]
    pub fn sorted(&self) -> Vec<Vec<UserId>> {
        let mut groups: Vec<Vec<UserId>> = self
            .groups
            .values()
            .map(|members| {
                let mut sorted = members.clone();
                sorted.sort_unstable();
                sorted
            })
            .collect();
        groups.sort_unstable_by_key(|members| members.first().copied());
        groups
    }
}

impl IntoIterator for Communities {
    type Item = (UserId, Vec<UserId>);
    type IntoIter = std::collections::hash_map::IntoIter<UserId, Vec<UserId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
