//! Structural invariant checks for [`AdjacencyGraph`].
//!
//! Mutation keeps the graph symmetric and free of self-loops. The checker
//! walks every directed link and reports the first one that breaks either
//! rule, which lets property suites assert the invariant after arbitrary
//! operation sequences.

use thiserror::Error;
use tracing::debug;

use super::AdjacencyGraph;
use crate::id::UserId;

/// A link that violates the undirected-graph invariants.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SymmetryViolation {
    /// `origin` lists `target` as a friend but not the other way round.
    #[error("user {origin} lists {target} as a friend without a backlink")]
    MissingBacklink {
        /// User whose neighbour set holds the link.
        origin: UserId,
        /// User missing the reverse link.
        target: UserId,
    },
    /// A link from `origin` to a neighbour that is not a known user.
    #[error("user {origin} lists unknown user {target} as a friend")]
    DanglingLink {
        /// User whose neighbour set holds the link.
        origin: UserId,
        /// Neighbour missing from the user set.
        target: UserId,
    },
    /// A user lists themself as a friend.
    #[error("user {user} lists themself as a friend")]
    SelfLoop {
        /// The offending user.
        user: UserId,
    },
}

impl AdjacencyGraph {
    /// Verifies that every friendship is stored in both directions, points at a
    /// known user, and never loops back to its origin.
    ///
    /// # Errors
    /// Returns the first [`SymmetryViolation`] encountered.
    ///
    /// # Examples
    /// ```
    /// use amity_core::{AdjacencyGraph, UserId};
    ///
    /// let mut graph = AdjacencyGraph::new();
    /// graph.add_friendship(UserId::new(1), UserId::new(2));
    /// assert!(graph.check_symmetry().is_ok());
    /// ```
    pub fn check_symmetry(&self) -> Result<(), SymmetryViolation> {
        for (&origin, neighbours) in &self.adjacency {
            for &target in neighbours {
                if origin == target {
                    return Err(SymmetryViolation::SelfLoop { user: origin });
                }
                let Some(backlinks) = self.adjacency.get(&target) else {
                    debug!(%origin, %target, "link to unknown user");
                    return Err(SymmetryViolation::DanglingLink { origin, target });
                };
                if !backlinks.contains(&origin) {
                    debug!(%origin, %target, "missing backlink");
                    return Err(SymmetryViolation::MissingBacklink { origin, target });
                }
            }
        }
        Ok(())
    }
}
