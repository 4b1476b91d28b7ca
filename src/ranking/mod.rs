//! Run-based matching automaton and per-term scoring.
//!
//! A candidate term is scanned left to right, one character at a time. A
//! *run* is an attempt to match the whole query against consecutive
//! characters of the term. Each accepted character extends the run and adds
//! points; a rejected character abandons it. When a run covers the full
//! query its score and deviation are banked, and scanning continues looking
//! for further occurrences. Partial runs left at the end of the term are
//! discarded.
//!
//! | Character vs. expected query char | Points | Modes                     |
//! |-----------------------------------|--------|---------------------------|
//! | Equal                             | 2      | all                       |
//! | Equal ignoring case               | 1      | case-insensitive, fuzzy   |
//! | Different, run active, budget left| 0      | fuzzy (counts a deviation)|
//! | Anything else                     | -      | breaks the run            |
//!
//! A broken character is not retried against the start of the query.

use crate::error::{Error, Result};
use crate::options::{ScoringPolicy, SearchMode};

/// A query split into characters once, ready to score many terms.
///
/// # Examples
///
/// ```
/// use termrank::ranking::PreparedQuery;
///
/// let pq = PreparedQuery::new("cat").unwrap();
/// assert_eq!(pq.len(), 3);
/// assert!(PreparedQuery::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    chars: Vec<char>,
    /// First query character when it is ASCII; enables the byte-level
    /// fast-forward over ASCII terms.
    first_ascii: Option<u8>,
}

impl PreparedQuery {
    /// Split `query` into characters.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyQuery`] if `query` is empty.
    pub fn new(query: &str) -> Result<Self> {
        let chars: Vec<char> = query.chars().collect();
        let Some(&first) = chars.first() else {
            return Err(Error::EmptyQuery);
        };
        let first_ascii = first.is_ascii().then_some(first as u8);
        Ok(Self { chars, first_ascii })
    }

    /// Number of characters in the query. Never zero.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; empty queries are rejected by [`PreparedQuery::new`].
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Byte offset in `haystack` of the next character that could start a
    /// run, or `None` if there is none.
    ///
    /// Only meaningful for ASCII haystacks with an ASCII first query char:
    /// in that case no other byte can equal the first query character, with
    /// or without case folding, and a run can never start on a deviation.
    fn next_run_start(&self, haystack: &[u8], first: u8, mode: SearchMode) -> Option<usize> {
        if mode.folds_case() {
            memchr::memchr2(
                first.to_ascii_lowercase(),
                first.to_ascii_uppercase(),
                haystack,
            )
        } else {
            memchr::memchr(first, haystack)
        }
    }
}

/// Outcome of scoring a single term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TermScore {
    /// Sum of run scores over every completed run.
    pub score: u32,
    /// Sum of run deviations over every completed run.
    pub deviation: u32,
    /// Number of completed runs (full occurrences of the query).
    pub runs: u32,
}

/// State of the run in progress plus the totals banked so far.
///
/// Lives for exactly one term; nothing carries over between candidates.
#[derive(Debug, Default)]
struct RunState {
    /// Index into the query of the character the next term character must match.
    compare_index: usize,
    run_score: u32,
    run_deviation: u32,
    /// Set once the run has accepted a real match; deviations need it.
    active: bool,
    totals: TermScore,
}

impl RunState {
    /// Feed one term character through the automaton.
    fn step(&mut self, c: char, query: &PreparedQuery, mode: SearchMode, policy: &ScoringPolicy) {
        let expected = query.chars[self.compare_index];

        let (points, deviated) = if c == expected {
            (policy.case_exact_score, false)
        } else if mode.folds_case() && eq_ignore_case(c, expected) {
            (policy.case_folded_score, false)
        } else if mode.tolerates_deviation()
            && self.active
            && self.run_deviation < policy.deviation_tolerance
        {
            (0, true)
        } else {
            self.reset_run();
            return;
        };

        self.run_score = self.run_score.saturating_add(points);
        if deviated {
            self.run_deviation += 1;
        }
        self.active = true;
        self.compare_index += 1;

        if self.compare_index == query.len() {
            self.totals.score = self.totals.score.saturating_add(self.run_score);
            self.totals.deviation = self.totals.deviation.saturating_add(self.run_deviation);
            self.totals.runs = self.totals.runs.saturating_add(1);
            self.reset_run();
        }
    }

    fn reset_run(&mut self) {
        self.compare_index = 0;
        self.run_score = 0;
        self.run_deviation = 0;
        self.active = false;
    }

    /// Drop any incomplete run and return the banked totals.
    fn finish(self) -> TermScore {
        self.totals
    }
}

/// Compare two characters ignoring case.
///
/// ASCII pairs use `eq_ignore_ascii_case`; anything else compares the full
/// Unicode lowercase mappings, so e.g. `'Σ'` matches `'σ'`.
pub fn eq_ignore_case(a: char, b: char) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(&b);
    }
    a.to_lowercase().eq(b.to_lowercase())
}

/// Score `term` against an already prepared query.
///
/// This is the inner loop of [`search`](crate::search); it allocates nothing.
///
/// # Examples
///
/// ```
/// use termrank::ranking::{PreparedQuery, score_term_prepared};
/// use termrank::{ScoringPolicy, SearchMode};
///
/// let pq = PreparedQuery::new("cat").unwrap();
/// let policy = ScoringPolicy::default();
/// let s = score_term_prepared("cxt", &pq, SearchMode::Fuzzy, &policy);
/// assert_eq!((s.score, s.deviation, s.runs), (4, 1, 1));
/// ```
pub fn score_term_prepared(
    term: &str,
    query: &PreparedQuery,
    mode: SearchMode,
    policy: &ScoringPolicy,
) -> TermScore {
    let mut state = RunState::default();

    match query.first_ascii {
        // ASCII fast path: while no run is active, only an occurrence of the
        // first query character can change state, so jump straight to it.
        Some(first) if term.is_ascii() => {
            let bytes = term.as_bytes();
            let mut pos = 0;
            while pos < bytes.len() {
                if !state.active {
                    match query.next_run_start(&bytes[pos..], first, mode) {
                        Some(offset) => pos += offset,
                        None => break,
                    }
                }
                state.step(char::from(bytes[pos]), query, mode, policy);
                pos += 1;
            }
        }
        _ => {
            for c in term.chars() {
                state.step(c, query, mode, policy);
            }
        }
    }

    state.finish()
}

/// Score `term` against `query` with the default [`ScoringPolicy`].
///
/// Thin wrapper that prepares the query for a one-off call.
///
/// # Errors
///
/// [`Error::EmptyQuery`] if `query` is empty.
///
/// # Examples
///
/// ```
/// use termrank::{SearchMode, score_term};
///
/// assert_eq!(score_term("cat", "cat", SearchMode::StrictCaseSensitive).unwrap().score, 6);
/// assert_eq!(score_term("Cat", "cat", SearchMode::StrictCaseSensitive).unwrap().score, 0);
/// assert_eq!(score_term("Cat", "cat", SearchMode::StrictCaseInsensitive).unwrap().score, 5);
/// ```
pub fn score_term(term: &str, query: &str, mode: SearchMode) -> Result<TermScore> {
    let pq = PreparedQuery::new(query)?;
    Ok(score_term_prepared(
        term,
        &pq,
        mode,
        &ScoringPolicy::default(),
    ))
}
