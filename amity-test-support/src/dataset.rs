//! Reference social graph shared by unit, integration, and CLI tests.
//!
//! Identifiers are plain `u64` values so this crate stays independent of
//! `amity-core`.

/// Users seeded by the reference dataset: `1..=8`.
pub const REFERENCE_USERS: [u64; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Friendships seeded by the reference dataset, in insertion order.
///
/// Produces two communities: `{1, 2, 3, 4, 5}` and `{6, 7, 8}`.
pub const REFERENCE_FRIENDSHIPS: [(u64, u64); 7] =
    [(1, 2), (1, 3), (2, 3), (2, 4), (3, 5), (6, 7), (7, 8)];

/// Renders the reference dataset in the whitespace-separated edge-list format
/// read by the CLI.
///
/// # Examples
/// ```
/// use amity_test_support::dataset::reference_edge_list;
///
/// let text = reference_edge_list();
/// assert!(text.lines().any(|line| line == "1 2"));
/// ```
#[must_use]
pub fn reference_edge_list() -> String {
    let mut out = String::from("# reference dataset\n");
    for user in REFERENCE_USERS {
        out.push_str(&format!("{user}\n"));
    }
    for (left, right) in REFERENCE_FRIENDSHIPS {
        out.push_str(&format!("{left} {right}\n"));
    }
    out
}
