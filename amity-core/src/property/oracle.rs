//! Naive reference model used to check the real structures.
//!
//! Stores friendships as a flat, normalised edge list and answers every
//! query by exhaustive relaxation or full scans. Slow, but it shares no code
//! or data layout with the implementation under test.

use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default)]
pub(super) struct OracleGraph {
    users: BTreeSet<u64>,
    edges: BTreeSet<(u64, u64)>,
}

impl OracleGraph {
    pub(super) fn add_user(&mut self, user: u64) {
        self.users.insert(user);
    }

    pub(super) fn add_friendship(&mut self, left: u64, right: u64) {
        self.users.insert(left);
        self.users.insert(right);
        if left != right {
            self.edges.insert((left.min(right), left.max(right)));
        }
    }

    pub(super) fn users(&self) -> &BTreeSet<u64> {
        &self.users
    }

    pub(super) fn are_friends(&self, left: u64, right: u64) -> bool {
        self.edges.contains(&(left.min(right), left.max(right)))
    }

    /// Hop distance from `source` to every reachable user, computed by
    /// repeated edge relaxation until a fixed point.
    pub(super) fn distances_from(&self, source: u64) -> BTreeMap<u64, usize> {
        let mut distances = BTreeMap::new();
        if !self.users.contains(&source) {
            return distances;
        }
        distances.insert(source, 0);
        loop {
            let mut changed = false;
            for &(left, right) in &self.edges {
                for (from, to) in [(left, right), (right, left)] {
                    let Some(&base) = distances.get(&from) else {
                        continue;
                    };
                    let candidate = base + 1;
                    if distances.get(&to).is_none_or(|&current| candidate < current) {
                        distances.insert(to, candidate);
                        changed = true;
                    }
                }
            }
            if !changed {
                return distances;
            }
        }
    }

    pub(super) fn mutual_friends(&self, left: u64, right: u64) -> usize {
        self.users
            .iter()
            .filter(|&&other| self.are_friends(left, other) && self.are_friends(right, other))
            .count()
    }

    /// Every ranked recommendation for `user`, before truncation.
    pub(super) fn recommendations(&self, user: u64) -> Vec<(u64, usize)> {
        if !self.users.contains(&user) {
            return Vec::new();
        }
        let mut ranked: Vec<(u64, usize)> = self
            .users
            .iter()
            .filter(|&&candidate| candidate != user && !self.are_friends(user, candidate))
            .map(|&candidate| (candidate, self.mutual_friends(user, candidate)))
            .filter(|&(_, mutual)| mutual > 0)
            .collect();
        ranked.sort_by(|left, right| right.1.cmp(&left.1).then(left.0.cmp(&right.0)));
        ranked
    }

    /// Connected components as sorted member lists ordered by first member.
    pub(super) fn components(&self) -> Vec<Vec<u64>> {
        let mut seen = BTreeSet::new();
        let mut components = Vec::new();
        for &user in &self.users {
            if seen.contains(&user) {
                continue;
            }
            let members: Vec<u64> = self.distances_from(user).into_keys().collect();
            seen.extend(members.iter().copied());
            components.push(members);
        }
        components
    }
}
