//! User identifiers.

use std::fmt;

/// Identifier naming a user in the social graph.
///
/// Identity is the key itself: there is no separate user record. Ordering is
/// used only to break ties deterministically.
///
/// # Examples
/// ```
/// use amity_core::UserId;
///
/// let id = UserId::new(4);
/// assert_eq!(id.get(), 4);
/// assert!(UserId::new(1) < id);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(u64);

impl UserId {
    /// Creates a user identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
