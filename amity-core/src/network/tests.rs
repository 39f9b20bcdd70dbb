//! Unit tests for the social-network facade.

use amity_test_support::dataset::{REFERENCE_FRIENDSHIPS, REFERENCE_USERS};
use rstest::{fixture, rstest};

use crate::{
    NetworkError, NetworkErrorCode, Recommendation, SelfFriendshipPolicy, SocialNetwork,
    SocialNetworkBuilder, UserId,
};

fn id(raw: u64) -> UserId {
    UserId::new(raw)
}

fn ids(raw: &[u64]) -> Vec<UserId> {
    raw.iter().copied().map(UserId::new).collect()
}

#[fixture]
fn reference() -> SocialNetwork {
    let mut network = SocialNetwork::default();
    for user in REFERENCE_USERS {
        network.add_user(id(user));
    }
    network
        .extend_friendships(
            REFERENCE_FRIENDSHIPS
                .iter()
                .map(|&(left, right)| (id(left), id(right))),
        )
        .expect("reference friendships are valid");
    network
}

#[fixture]
fn strict() -> SocialNetwork {
    SocialNetworkBuilder::new()
        .with_self_friendship(SelfFriendshipPolicy::Reject)
        .build()
        .expect("configuration must be valid")
}

#[test]
fn default_matches_builder_defaults() {
    let network = SocialNetwork::default();
    let built = SocialNetworkBuilder::new()
        .build()
        .expect("defaults are valid");
    assert_eq!(network.recommendation_limit(), built.recommendation_limit());
    assert_eq!(network.self_friendship(), built.self_friendship());
    assert_eq!(network.recommendation_limit().get(), 5);
}

#[test]
fn add_user_registers_in_both_structures() {
    let mut network = SocialNetwork::default();
    assert!(network.add_user(id(1)));
    assert!(!network.add_user(id(1)));
    assert!(network.has_user(id(1)));
    assert_eq!(network.community_of(id(1)), Ok(id(1)));
    assert_eq!(network.community_count(), 1);
}

#[test]
fn add_friendship_mirrors_into_communities() {
    let mut network = SocialNetwork::default();
    assert_eq!(network.add_friendship(id(1), id(2)), Ok(true));
    assert_eq!(network.add_friendship(id(2), id(1)), Ok(false));
    assert_eq!(network.friendship_count(), 1);
    assert_eq!(network.are_connected(id(1), id(2)), Ok(true));
    assert_eq!(network.community_count(), 1);
}

#[test]
fn ignored_self_friendship_registers_user_only() {
    let mut network = SocialNetwork::default();
    assert_eq!(network.add_friendship(id(4), id(4)), Ok(false));
    assert!(network.has_user(id(4)));
    assert_eq!(network.neighbours(id(4)).count(), 0);
    assert_eq!(network.community_count(), 1);
}

#[rstest]
fn rejected_self_friendship_leaves_network_untouched(strict: SocialNetwork) {
    let mut network = strict;
    let err = network
        .add_friendship(id(4), id(4))
        .expect_err("self-friendship must be rejected");
    assert_eq!(err, NetworkError::SelfFriendship { user: id(4) });
    assert_eq!(err.code(), NetworkErrorCode::SelfFriendship);
    assert!(!network.has_user(id(4)));
    assert_eq!(network.community_count(), 0);
}

#[rstest]
fn extend_stops_at_first_rejection(strict: SocialNetwork) {
    let mut network = strict;
    let err = network
        .extend_friendships([(id(1), id(2)), (id(3), id(3)), (id(4), id(5))])
        .expect_err("second pair is a self-friendship");
    assert!(matches!(err, NetworkError::SelfFriendship { .. }));
    assert!(network.has_user(id(2)));
    assert!(!network.has_user(id(4)));
}

#[test]
fn from_friendships_ignores_self_pairs() {
    let network = SocialNetwork::from_friendships([(id(1), id(2)), (id(3), id(3))]);
    assert_eq!(network.user_count(), 3);
    assert_eq!(network.friendship_count(), 1);
}

#[rstest]
fn reference_shortest_path(reference: SocialNetwork) {
    assert_eq!(reference.shortest_path(id(1), id(5)), ids(&[1, 3, 5]));
    assert!(reference.shortest_path(id(1), id(6)).is_empty());
}

#[rstest]
fn reference_recommendations(reference: SocialNetwork) {
    assert_eq!(
        reference.recommend_friends(id(4), 5),
        vec![Recommendation::new(id(1), 1), Recommendation::new(id(3), 1)]
    );
    assert_eq!(
        reference.recommend_friends(id(6), 5),
        vec![Recommendation::new(id(8), 1)]
    );
    assert_eq!(
        reference.recommendations(id(4)),
        reference.recommend_friends(id(4), 5)
    );
}

#[test]
fn configured_limit_truncates_recommendations() {
    let mut network = SocialNetworkBuilder::new()
        .with_recommendation_limit(1)
        .with_expected_users(8)
        .build()
        .expect("configuration must be valid");
    network
        .extend_friendships([(id(1), id(2)), (id(2), id(3)), (id(2), id(4))])
        .expect("friendships are valid");
    assert_eq!(
        network.recommendations(id(1)),
        vec![Recommendation::new(id(3), 1)]
    );
}

#[rstest]
fn reference_communities(reference: SocialNetwork) {
    let mut network = reference;
    let communities = network.communities();
    assert_eq!(communities.len(), 2);
    assert_eq!(
        communities.sorted(),
        vec![ids(&[1, 2, 3, 4, 5]), ids(&[6, 7, 8])]
    );
}

#[rstest]
fn community_queries_reject_unknown_users(reference: SocialNetwork) {
    let mut network = reference;
    let err = network
        .community_of(id(99))
        .expect_err("user 99 is not part of the network");
    assert_eq!(err.code(), NetworkErrorCode::DisjointSetFailure);
    assert_eq!(
        err.disjoint_set_code().map(|code| code.as_str()),
        Some("DISJOINT_SET_UNKNOWN_USER")
    );

    assert_eq!(
        network.are_connected(id(1), id(99)),
        Err(NetworkError::UnknownUser { user: id(99) })
    );
}

#[rstest]
#[case(1, 5, true)]
#[case(2, 8, false)]
fn reference_connectivity(
    reference: SocialNetwork,
    #[case] left: u64,
    #[case] right: u64,
    #[case] expected: bool,
) {
    let mut network = reference;
    assert_eq!(network.are_connected(id(left), id(right)), Ok(expected));
}

#[test]
fn builder_rejects_zero_recommendation_limit() {
    let err = SocialNetworkBuilder::new()
        .with_recommendation_limit(0)
        .build()
        .expect_err("zero limit must be rejected");
    assert_eq!(err, NetworkError::InvalidRecommendationLimit { got: 0 });
    assert_eq!(
        err.code().as_str(),
        "NETWORK_INVALID_RECOMMENDATION_LIMIT"
    );
}
