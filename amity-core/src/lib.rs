//! Amity core library.
//!
//! Models an undirected social graph and derives three analyses from it:
//! shortest connection paths, friend recommendations ranked by mutual
//! friends, and connected communities. [`SocialNetwork`] keeps an
//! [`AdjacencyGraph`] and a [`DisjointSet`] in lockstep and routes every query
//! to the structure that owns the answer.

mod builder;
mod disjoint_set;
mod error;
mod graph;
mod id;
mod network;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{SelfFriendshipPolicy, SocialNetworkBuilder},
    disjoint_set::{Communities, DisjointSet},
    error::{DisjointSetError, DisjointSetErrorCode, NetworkError, NetworkErrorCode, Result},
    graph::{AdjacencyGraph, DEFAULT_RECOMMENDATION_LIMIT, Recommendation, SymmetryViolation},
    id::UserId,
    network::SocialNetwork,
};
