//! Unit tests for the adjacency graph.

use std::collections::HashSet;

use amity_test_support::dataset::{REFERENCE_FRIENDSHIPS, REFERENCE_USERS};
use rstest::{fixture, rstest};

use super::{AdjacencyGraph, Recommendation};
use crate::id::UserId;

fn id(raw: u64) -> UserId {
    UserId::new(raw)
}

fn neighbour_set(graph: &AdjacencyGraph, user: u64) -> HashSet<UserId> {
    graph.neighbours(id(user)).collect()
}

#[fixture]
fn reference() -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::new();
    for user in REFERENCE_USERS {
        graph.add_user(id(user));
    }
    for (left, right) in REFERENCE_FRIENDSHIPS {
        graph.add_friendship(id(left), id(right));
    }
    graph
}

#[test]
fn add_user_is_idempotent() {
    let mut graph = AdjacencyGraph::new();
    assert!(graph.add_user(id(1)));
    assert!(!graph.add_user(id(1)));
    assert_eq!(graph.users(), vec![id(1)]);
    assert_eq!(graph.degree(id(1)), 0);
}

#[test]
fn add_friendship_links_both_directions() {
    let mut graph = AdjacencyGraph::new();
    assert!(graph.add_friendship(id(1), id(2)));

    assert!(graph.has_user(id(1)));
    assert!(graph.has_user(id(2)));
    assert_eq!(neighbour_set(&graph, 1), HashSet::from([id(2)]));
    assert_eq!(neighbour_set(&graph, 2), HashSet::from([id(1)]));
    assert_eq!(graph.friendship_count(), 1);
}

#[test]
fn repeated_friendship_leaves_graph_unchanged() {
    let mut graph = AdjacencyGraph::new();
    graph.add_friendship(id(1), id(2));
    assert!(!graph.add_friendship(id(1), id(2)));
    assert!(!graph.add_friendship(id(2), id(1)));

    assert_eq!(graph.degree(id(1)), 1);
    assert_eq!(graph.degree(id(2)), 1);
    assert_eq!(graph.friendship_count(), 1);
}

#[test]
fn adding_existing_user_keeps_friends() {
    let mut graph = AdjacencyGraph::new();
    graph.add_friendship(id(1), id(2));
    graph.add_user(id(1));
    assert!(graph.are_friends(id(1), id(2)));
}

#[test]
fn self_friendship_creates_user_without_loop() {
    let mut graph = AdjacencyGraph::new();
    assert!(!graph.add_friendship(id(3), id(3)));
    assert!(graph.has_user(id(3)));
    assert_eq!(graph.degree(id(3)), 0);
    assert!(graph.check_symmetry().is_ok());
}

#[test]
fn unknown_user_has_no_neighbours() {
    let graph = AdjacencyGraph::new();
    assert!(!graph.has_user(id(42)));
    assert_eq!(graph.neighbours(id(42)).count(), 0);
    assert_eq!(graph.degree(id(42)), 0);
}

#[rstest]
fn reference_graph_is_symmetric(reference: AdjacencyGraph) {
    assert!(reference.check_symmetry().is_ok());
    assert_eq!(reference.user_count(), 8);
    assert_eq!(reference.friendship_count(), REFERENCE_FRIENDSHIPS.len());
}

#[rstest]
fn shortest_path_between_reference_users(reference: AdjacencyGraph) {
    let path = reference.shortest_path(id(1), id(5));
    assert_eq!(path, vec![id(1), id(3), id(5)]);
}

#[rstest]
#[case::direct(1, 2, Some(1))]
#[case::two_hops(4, 3, Some(2))]
#[case::three_hops(4, 5, Some(3))]
#[case::same_user(7, 7, Some(0))]
#[case::other_community(1, 8, None)]
#[case::unknown_target(1, 99, None)]
#[case::unknown_source(99, 1, None)]
fn distance_matches_hop_count(
    reference: AdjacencyGraph,
    #[case] source: u64,
    #[case] target: u64,
    #[case] expected: Option<usize>,
) {
    assert_eq!(reference.distance(id(source), id(target)), expected);
}

#[rstest]
fn path_endpoints_and_links_are_valid(reference: AdjacencyGraph) {
    let path = reference.shortest_path(id(4), id(5));
    assert_eq!(path.len(), 4);
    assert_eq!(path.first(), Some(&id(4)));
    assert_eq!(path.last(), Some(&id(5)));
    for pair in path.windows(2) {
        if let [left, right] = pair {
            assert!(reference.are_friends(*left, *right));
        }
    }
}

#[rstest]
fn path_to_self_is_single_user(reference: AdjacencyGraph) {
    assert_eq!(reference.shortest_path(id(6), id(6)), vec![id(6)]);
}

#[test]
fn path_to_self_of_unknown_user_is_empty() {
    let graph = AdjacencyGraph::new();
    assert!(graph.shortest_path(id(6), id(6)).is_empty());
}

#[rstest]
#[case(1, 4, 1)]
#[case(2, 3, 1)]
#[case(4, 5, 0)]
#[case(1, 6, 0)]
#[case(1, 99, 0)]
fn mutual_friends_count_is_symmetric(
    reference: AdjacencyGraph,
    #[case] left: u64,
    #[case] right: u64,
    #[case] expected: usize,
) {
    assert_eq!(reference.mutual_friends_count(id(left), id(right)), expected);
    assert_eq!(reference.mutual_friends_count(id(right), id(left)), expected);
}

#[rstest]
fn recommends_reference_candidates_by_identifier_on_ties(reference: AdjacencyGraph) {
    // 5 is three hops from 4 and shares no friend with it.
    let ranked = reference.recommend_friends(id(4), 5);
    assert_eq!(
        ranked,
        vec![Recommendation::new(id(1), 1), Recommendation::new(id(3), 1)]
    );
}

#[rstest]
fn recommends_across_a_single_shared_friend(reference: AdjacencyGraph) {
    assert_eq!(
        reference.recommend_friends(id(6), 5),
        vec![Recommendation::new(id(8), 1)]
    );
}

#[rstest]
fn recommends_nobody_without_shared_friends() {
    let mut graph = AdjacencyGraph::new();
    graph.add_friendship(id(1), id(2));
    graph.add_user(id(3));
    assert!(graph.recommend_friends(id(3), 5).is_empty());
    assert!(graph.recommend_friends(id(1), 5).is_empty());
}

#[rstest]
#[case::zero_limit(4, 0)]
#[case::unknown_user(99, 5)]
fn recommendation_edge_cases_are_empty(
    reference: AdjacencyGraph,
    #[case] user: u64,
    #[case] limit: usize,
) {
    assert!(reference.recommend_friends(id(user), limit).is_empty());
}

#[rstest]
fn recommendations_are_truncated_to_limit(reference: AdjacencyGraph) {
    let ranked = reference.recommend_friends(id(1), 1);
    assert_eq!(ranked, vec![Recommendation::new(id(4), 1)]);
}

#[test]
fn recommendations_rank_by_mutual_count_first() {
    let mut graph = AdjacencyGraph::new();
    // 1 shares friends 10 and 11 with 3, and only 10 with 2.
    for (left, right) in [(1, 10), (1, 11), (2, 10), (3, 10), (3, 11)] {
        graph.add_friendship(id(left), id(right));
    }

    let ranked = graph.recommend_friends(id(1), 5);
    assert_eq!(
        ranked,
        vec![Recommendation::new(id(3), 2), Recommendation::new(id(2), 1)]
    );
}

#[rstest]
fn recommendations_exclude_existing_friends(reference: AdjacencyGraph) {
    let ranked = reference.recommend_friends(id(1), 5);
    let suggested: HashSet<UserId> = ranked.iter().map(Recommendation::user).collect();
    assert!(!suggested.contains(&id(1)));
    assert!(!suggested.contains(&id(2)));
    assert!(!suggested.contains(&id(3)));
    assert_eq!(
        ranked,
        vec![Recommendation::new(id(4), 1), Recommendation::new(id(5), 1)]
    );
}
