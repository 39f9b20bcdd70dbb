//! Whitespace-separated edge-list parsing.
//!
//! Each non-blank line holds either one user identifier (an isolated user) or
//! two identifiers (a friendship). Text after `#` is ignored.

use std::io::{self, BufRead};

use amity_core::{SocialNetwork, UserId};
use thiserror::Error;

/// One meaningful line of an edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeListEntry {
    /// A user listed on its own.
    User(UserId),
    /// A friendship between two users.
    Friendship(UserId, UserId),
}

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// 1-based line number.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A field was not an unsigned integer.
    #[error("line {line}: `{token}` is not a valid user identifier")]
    InvalidUserId {
        /// 1-based line number.
        line: usize,
        /// Offending field.
        token: String,
    },
    /// A line carried more than two fields.
    #[error("line {line}: expected one or two identifiers, found {fields}")]
    TooManyFields {
        /// 1-based line number.
        line: usize,
        /// Number of fields found.
        fields: usize,
    },
}

/// Parsed edge list, preserving file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList {
    entries: Vec<EdgeListEntry>,
}

impl EdgeList {
    /// Parses an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] naming the first offending line.
    ///
    /// # Examples
    /// ```
    /// use amity_cli::cli::{EdgeList, EdgeListEntry};
    /// use amity_core::UserId;
    ///
    /// let list = EdgeList::parse("# friends\n1 2\n3\n".as_bytes())?;
    /// assert_eq!(
    ///     list.entries(),
    ///     &[
    ///         EdgeListEntry::Friendship(UserId::new(1), UserId::new(2)),
    ///         EdgeListEntry::User(UserId::new(3)),
    ///     ],
    /// );
    /// # Ok::<(), amity_cli::cli::EdgeListError>(())
    /// ```
    pub fn parse(reader: impl BufRead) -> Result<Self, EdgeListError> {
        let mut entries = Vec::new();
        for (index, read) in reader.lines().enumerate() {
            let line = index + 1;
            let text = read.map_err(|source| EdgeListError::Read { line, source })?;
            if let Some(entry) = parse_line(line, &text)? {
                entries.push(entry);
            }
        }
        Ok(Self { entries })
    }

    /// Entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[EdgeListEntry] {
        &self.entries
    }

    /// Applies every entry to `network` in file order.
    ///
    /// # Errors
    /// Propagates the first error raised by `network`, for example a rejected
    /// self-friendship.
    pub fn apply(&self, network: &mut SocialNetwork) -> amity_core::Result<()> {
        for entry in &self.entries {
            match *entry {
                EdgeListEntry::User(user) => {
                    network.add_user(user);
                }
                EdgeListEntry::Friendship(left, right) => {
                    network.add_friendship(left, right)?;
                }
            }
        }
        Ok(())
    }
}

fn parse_line(line: usize, text: &str) -> Result<Option<EdgeListEntry>, EdgeListError> {
    let content = text.split_once('#').map_or(text, |(before, _)| before);
    let fields: Vec<&str> = content.split_whitespace().collect();
    match fields.as_slice() {
        [] => Ok(None),
        [user] => Ok(Some(EdgeListEntry::User(parse_id(line, user)?))),
        [left, right] => Ok(Some(EdgeListEntry::Friendship(
            parse_id(line, left)?,
            parse_id(line, right)?,
        ))),
        more => Err(EdgeListError::TooManyFields {
            line,
            fields: more.len(),
        }),
    }
}

fn parse_id(line: usize, token: &str) -> Result<UserId, EdgeListError> {
    token
        .parse::<u64>()
        .map(UserId::new)
        .map_err(|_| EdgeListError::InvalidUserId {
            line,
            token: token.to_owned(),
        })
}
