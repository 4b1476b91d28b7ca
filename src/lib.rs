#![warn(missing_docs)]

//! A run-based term matching and ranking library.
//!
//! `termrank` scores each `(id, term)` candidate against a query by scanning
//! the term for contiguous runs that match the whole query, then returns
//! every candidate sorted best-first. Three strictness modes control how
//! case differences and stray characters are treated.

/// Error type for rejected inputs.
pub mod error;

/// Candidate inputs and scored results.
pub mod candidate;

/// The matching automaton and per-term scoring.
pub mod ranking;

/// Search modes, scoring policy and search options.
pub mod options;

/// Ordering of scored results.
pub mod sort;

mod search;

// Re-export primary public API types and functions at the crate root.
pub use candidate::{AsCandidate, CandidateItem, MatchResult};
pub use error::{Error, Result};
pub use options::{
    CASE_EXACT_SCORE, CASE_FOLDED_SCORE, DEVIATION_TOLERANCE, ScoringPolicy, SearchMode,
    SearchOptions, TieBreak,
};
pub use ranking::{TermScore, score_term};
pub use search::{search, search_with_options};
