//! Error type shared by every public entry point.
//!
//! Scoring itself cannot fail. Errors only come from validating inputs at
//! the API boundary, before any candidate is scored.

/// Errors returned when a search request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The query string was empty.
    #[error("query must not be empty")]
    EmptyQuery,

    /// A search mode name could not be parsed.
    #[error(
        "unknown search mode `{0}` (expected strict-case-sensitive, strict-case-insensitive or fuzzy)"
    )]
    UnknownMode(String),

    /// A scoring policy rewards wrong-case matches above exact ones.
    #[error("case-folded score {folded} exceeds case-exact score {exact}")]
    InvalidPolicy {
        /// Points for a correctly cased character.
        exact: u32,
        /// Points for a character that only matches ignoring case.
        folded: u32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
