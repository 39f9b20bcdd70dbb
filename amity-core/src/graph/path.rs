//! Breadth-first shortest connection paths.

use std::collections::{HashMap, VecDeque};

use tracing::trace;

use super::AdjacencyGraph;
use crate::id::UserId;

impl AdjacencyGraph {
    /// Finds a shortest chain of friendships from `source` to `target`.
    ///
    /// The path starts at `source`, ends at `target`, and has the minimum
    /// number of edges. When several shortest paths exist the one returned is
    /// unspecified. Returns `[source]` when `source == target` and an empty
    /// vector when either user is unknown or `target` is unreachable.
    ///
    /// # Examples
    /// ```
    /// use amity_core::{AdjacencyGraph, UserId};
    ///
    /// let mut graph = AdjacencyGraph::new();
    /// graph.add_friendship(UserId::new(1), UserId::new(2));
    /// graph.add_friendship(UserId::new(2), UserId::new(3));
    /// graph.add_user(UserId::new(9));
    ///
    /// let path = graph.shortest_path(UserId::new(1), UserId::new(3));
    /// assert_eq!(path, vec![UserId::new(1), UserId::new(2), UserId::new(3)]);
    /// assert!(graph.shortest_path(UserId::new(1), UserId::new(9)).is_empty());
    /// ```
    #[must_use]
    pub fn shortest_path(&self, source: UserId, target: UserId) -> Vec<UserId> {
        if !self.has_user(source) || !self.has_user(target) {
            return Vec::new();
        }
        if source == target {
            return vec![source];
        }

        let Some(predecessors) = self.search(source, target) else {
            return Vec::new();
        };
        reconstruct(&predecessors, source, target)
    }

    /// Number of friendships on a shortest path, or `None` when unreachable.
    #[must_use]
    pub fn distance(&self, source: UserId, target: UserId) -> Option<usize> {
        self.shortest_path(source, target)
            .len()
            .checked_sub(1)
    }

    /// Runs BFS from `source` until `target` is discovered and returns the
    /// predecessor of every discovered user.
    fn search(&self, source: UserId, target: UserId) -> Option<HashMap<UserId, UserId>> {
        let mut predecessors = HashMap::from([(source, source)]);
        let mut queue = VecDeque::from([source]);

        while let Some(current) = queue.pop_front() {
            trace!(user = %current, frontier = queue.len(), "expanding user");
            for neighbour in self.neighbours(current) {
                if predecessors.contains_key(&neighbour) {
                    continue;
                }
                predecessors.insert(neighbour, current);
                if neighbour == target {
                    return Some(predecessors);
                }
                queue.push_back(neighbour);
            }
        }
        None
    }
}

fn reconstruct(
    predecessors: &HashMap<UserId, UserId>,
    source: UserId,
    target: UserId,
) -> Vec<UserId> {
    let mut path = vec![target];
    let mut current = target;
    while current != source {
        match predecessors.get(&current) {
            Some(&previous) => {
                path.push(previous);
                current = previous;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
