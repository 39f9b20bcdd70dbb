use amity_core::{SocialNetwork, UserId};
use amity_test_support::dataset::{REFERENCE_FRIENDSHIPS, REFERENCE_USERS};

#[must_use]
pub fn id(raw: u64) -> UserId {
    UserId::new(raw)
}

#[must_use]
pub fn ids(raw: &[u64]) -> Vec<UserId> {
    raw.iter().copied().map(UserId::new).collect()
}

/// Seeds the reference dataset the same way the demo does.
#[must_use]
pub fn reference_network() -> SocialNetwork {
    let mut network = SocialNetwork::default();
    for user in REFERENCE_USERS {
        network.add_user(id(user));
    }
    for (left, right) in REFERENCE_FRIENDSHIPS {
        network
            .add_friendship(id(left), id(right))
            .expect("reference friendships are valid");
    }
    network
}
