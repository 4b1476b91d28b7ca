//! Configuration for a search: strictness mode, scoring policy and tie-breaking.
//!
//! [`SearchOptions`] bundles everything that controls how candidates are
//! scored and ordered. The defaults reproduce the standard behavior:
//! case-insensitive matching, `+2`/`+1` scoring, a deviation tolerance of
//! two per run, and ties kept in input order.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Points awarded for a character that matches the query exactly.
pub const CASE_EXACT_SCORE: u32 = 2;

/// Points awarded for a character that matches only when case is ignored.
pub const CASE_FOLDED_SCORE: u32 = 1;

/// Non-matching characters a single fuzzy run may absorb.
pub const DEVIATION_TOLERANCE: u32 = 2;

/// How strictly candidate characters must agree with the query.
///
/// # Examples
///
/// ```
/// use termrank::SearchMode;
///
/// assert_eq!(SearchMode::default(), SearchMode::StrictCaseInsensitive);
/// assert_eq!("fuzzy".parse::<SearchMode>().unwrap(), SearchMode::Fuzzy);
/// assert_eq!(SearchMode::StrictCaseSensitive.to_string(), "strict-case-sensitive");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SearchMode {
    /// Only case-exact characters extend a run.
    StrictCaseSensitive,
    /// Case is ignored; wrong-case characters score less than exact ones.
    #[default]
    StrictCaseInsensitive,
    /// Case is ignored and an active run may absorb a few non-matching
    /// characters, up to the policy's deviation tolerance.
    Fuzzy,
}

impl SearchMode {
    /// All modes, strictest first.
    pub const ALL: [SearchMode; 3] = [
        SearchMode::StrictCaseSensitive,
        SearchMode::StrictCaseInsensitive,
        SearchMode::Fuzzy,
    ];

    /// Whether wrong-case characters count as matches.
    pub fn folds_case(self) -> bool {
        !matches!(self, SearchMode::StrictCaseSensitive)
    }

    /// Whether an active run may absorb non-matching characters.
    pub fn tolerates_deviation(self) -> bool {
        matches!(self, SearchMode::Fuzzy)
    }

    /// The canonical kebab-case name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMode::StrictCaseSensitive => "strict-case-sensitive",
            SearchMode::StrictCaseInsensitive => "strict-case-insensitive",
            SearchMode::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a mode name, ignoring case and any `-` or `_` separators, so
/// `fuzzy`, `strict_case_sensitive` and `StrictCaseInsensitive` all parse.
impl FromStr for SearchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "strictcasesensitive" => Ok(SearchMode::StrictCaseSensitive),
            "strictcaseinsensitive" => Ok(SearchMode::StrictCaseInsensitive),
            "fuzzy" => Ok(SearchMode::Fuzzy),
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

/// Point values and tolerance used by the matching automaton.
///
/// # Defaults
///
/// - `case_exact_score`: [`CASE_EXACT_SCORE`] (2)
/// - `case_folded_score`: [`CASE_FOLDED_SCORE`] (1)
/// - `deviation_tolerance`: [`DEVIATION_TOLERANCE`] (2)
///
/// # Examples
///
/// ```
/// use termrank::ScoringPolicy;
///
/// let policy = ScoringPolicy { case_folded_score: 0, ..Default::default() };
/// assert!(policy.validate().is_ok());
///
/// let inverted = ScoringPolicy { case_exact_score: 1, case_folded_score: 2, ..Default::default() };
/// assert!(inverted.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringPolicy {
    /// Points for a character equal to the expected query character.
    pub case_exact_score: u32,
    /// Points for a character equal to the expected one only ignoring case.
    pub case_folded_score: u32,
    /// Deviations allowed within a single run under [`SearchMode::Fuzzy`].
    /// Resets with every new run.
    pub deviation_tolerance: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            case_exact_score: CASE_EXACT_SCORE,
            case_folded_score: CASE_FOLDED_SCORE,
            deviation_tolerance: DEVIATION_TOLERANCE,
        }
    }
}

impl ScoringPolicy {
    /// Rejects a policy that scores wrong-case characters above exact ones.
    pub fn validate(&self) -> Result<()> {
        if self.case_folded_score > self.case_exact_score {
            return Err(Error::InvalidPolicy {
                exact: self.case_exact_score,
                folded: self.case_folded_score,
            });
        }
        Ok(())
    }
}

/// Ordering applied among results with equal scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TieBreak {
    /// Equal scores keep the order the candidates were supplied in.
    #[default]
    InputOrder,
    /// Equal scores are ordered by ascending id (byte-wise).
    Id,
    /// No guarantee; uses an unstable sort.
    Unspecified,
}

/// Full set of options for [`search_with_options`](crate::search_with_options).
///
/// # Examples
///
/// ```
/// use termrank::{SearchMode, SearchOptions, TieBreak};
///
/// let opts = SearchOptions::default()
///     .with_mode(SearchMode::Fuzzy)
///     .with_tie_break(TieBreak::Id);
/// assert_eq!(opts.mode, SearchMode::Fuzzy);
/// assert_eq!(opts.policy.deviation_tolerance, 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Strictness mode.
    pub mode: SearchMode,
    /// Scoring constants.
    pub policy: ScoringPolicy,
    /// Ordering among equal scores.
    pub tie_break: TieBreak,
}

impl SearchOptions {
    /// Options with the given mode and everything else defaulted.
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Replace the search mode.
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replace the scoring policy.
    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }
}
