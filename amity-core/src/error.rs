//! Error types for the amity core library.
//!
//! Every query in the core is total, so the taxonomy is small: it covers
//! lookups of identifiers the disjoint set has never seen, rejected
//! self-friendships, and builder validation.

use std::fmt;

use thiserror::Error;

use crate::id::UserId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] lookups.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The identifier was never added to the disjoint set.
    #[error("user {user} is not tracked by the disjoint set")]
    UnknownUser {
        /// The identifier that was looked up.
        user: UserId,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The identifier was never added to the disjoint set.
        UnknownUser => UnknownUser { .. } => "DISJOINT_SET_UNKNOWN_USER",
    }
}

/// Error type produced when configuring or mutating a [`crate::SocialNetwork`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NetworkError {
    /// A friendship from a user to themself was rejected by
    /// [`crate::SelfFriendshipPolicy::Reject`].
    #[error("user {user} cannot befriend themself")]
    SelfFriendship {
        /// The user named on both ends of the friendship.
        user: UserId,
    },
    /// The user is not part of the network.
    #[error("user {user} is not part of the network")]
    UnknownUser {
        /// The identifier that was looked up.
        user: UserId,
    },
    /// The default recommendation limit must be greater than zero.
    #[error("recommendation_limit must be at least 1 (got {got})")]
    InvalidRecommendationLimit {
        /// The invalid limit supplied by the caller.
        got: usize,
    },
    /// A [`crate::DisjointSet`] lookup failed.
    #[error("community lookup failed: {error}")]
    DisjointSet {
        #[source]
        /// Underlying disjoint-set error.
        error: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// A friendship from a user to themself was rejected.
        SelfFriendship => SelfFriendship { .. } => "NETWORK_SELF_FRIENDSHIP",
        /// The user is not part of the network.
        UnknownUser => UnknownUser { .. } => "NETWORK_UNKNOWN_USER",
        /// The default recommendation limit must be greater than zero.
        InvalidRecommendationLimit => InvalidRecommendationLimit { .. } => "NETWORK_INVALID_RECOMMENDATION_LIMIT",
        /// A [`crate::DisjointSet`] lookup failed.
        DisjointSetFailure => DisjointSet { .. } => "NETWORK_DISJOINT_SET_FAILURE",
    }
}

impl NetworkError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in
    /// a [`crate::DisjointSet`].
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::DisjointSet { error } => Some(error.code()),
            _ => None,
        }
    }
}

impl From<DisjointSetError> for NetworkError {
    fn from(error: DisjointSetError) -> Self {
        Self::DisjointSet { error }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;
