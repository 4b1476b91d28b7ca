//! Integration tests for per-term scoring.
//!
//! Exercises only the public API: [`score_term`], [`TermScore`],
//! [`SearchMode`] and the scoring constants.

use termrank::ranking::{PreparedQuery, score_term_prepared};
use termrank::{
    CASE_EXACT_SCORE, CASE_FOLDED_SCORE, DEVIATION_TOLERANCE, Error, ScoringPolicy, SearchMode,
    TermScore, score_term,
};

fn score(term: &str, query: &str, mode: SearchMode) -> (u32, u32) {
    let s = score_term(term, query, mode).unwrap();
    (s.score, s.deviation)
}

/// Exact, case-correct match scores two points per character in every mode.
#[test]
fn exact_match_scores_six() {
    for mode in SearchMode::ALL {
        assert_eq!(score("cat", "cat", mode), (6, 0), "mode {mode}");
    }
}

/// A wrong-case first character never starts a run when case matters.
#[test]
fn case_sensitive_rejects_wrong_case() {
    assert_eq!(score("Cat", "cat", SearchMode::StrictCaseSensitive), (0, 0));
}

/// Wrong-case characters score one point when case is ignored.
#[test]
fn case_insensitive_scores_wrong_case_lower() {
    assert_eq!(score("Cat", "cat", SearchMode::StrictCaseInsensitive), (5, 0));
    assert_eq!(score("Cat", "cat", SearchMode::Fuzzy), (5, 0));
}

/// A single interior deviation is absorbed only in fuzzy mode.
#[test]
fn fuzzy_tolerates_interior_noise() {
    assert_eq!(score("cxt", "cat", SearchMode::Fuzzy), (4, 1));
    assert_eq!(score("cxt", "cat", SearchMode::StrictCaseInsensitive), (0, 0));
    assert_eq!(score("cxt", "cat", SearchMode::StrictCaseSensitive), (0, 0));
}

/// Each full occurrence of the query is a separate run and the scores add up.
#[test]
fn repeated_occurrences_sum() {
    for mode in SearchMode::ALL {
        let s = score_term("aa", "a", mode).unwrap();
        assert_eq!(
            s,
            TermScore {
                score: 4,
                deviation: 0,
                runs: 2
            }
        );
    }
}

/// Large insertions exceed the per-run budget.
#[test]
fn fuzzy_rejects_large_insertions() {
    assert_eq!(score("cxxxt", "cart", SearchMode::Fuzzy), (0, 0));
    // Two deviations is the limit.
    assert_eq!(score("cxxt", "cart", SearchMode::Fuzzy), (4, 2));
}

/// The tolerance resets for every run rather than applying per candidate.
#[test]
fn tolerance_is_per_run() {
    let s = score_term("cxt-cyt-czt", "cat", SearchMode::Fuzzy).unwrap();
    assert_eq!(s.runs, 3);
    assert_eq!(s.deviation, 3);
    assert_eq!(s.score, 12);
}

#[test]
fn empty_query_is_an_error() {
    for mode in SearchMode::ALL {
        assert_eq!(score_term("cat", "", mode), Err(Error::EmptyQuery));
    }
}

#[test]
fn empty_term_scores_zero() {
    assert_eq!(score("", "a", SearchMode::Fuzzy), (0, 0));
}

#[test]
fn constants_have_documented_values() {
    assert_eq!(CASE_EXACT_SCORE, 2);
    assert_eq!(CASE_FOLDED_SCORE, 1);
    assert_eq!(DEVIATION_TOLERANCE, 2);
}

/// A prepared query can be reused across terms and modes.
#[test]
fn prepared_query_reuse() {
    let pq = PreparedQuery::new("ab").unwrap();
    let policy = ScoringPolicy::default();
    let terms = ["ab", "AB", "axb", "ba"];
    let fuzzy: Vec<u32> = terms
        .iter()
        .map(|t| score_term_prepared(t, &pq, SearchMode::Fuzzy, &policy).score)
        .collect();
    // "axb": 'a' matches, 'x' deviates and completes the two-char run; the
    // trailing 'b' cannot start a new one.
    assert_eq!(fuzzy, [4, 2, 2, 0]);

    let strict: Vec<u32> = terms
        .iter()
        .map(|t| score_term_prepared(t, &pq, SearchMode::StrictCaseSensitive, &policy).score)
        .collect();
    assert_eq!(strict, [4, 0, 0, 0]);
}

/// Scores from a tuned policy follow the configured point values.
#[test]
fn tuned_policy() {
    let pq = PreparedQuery::new("go").unwrap();
    let policy = ScoringPolicy {
        case_exact_score: 5,
        case_folded_score: 5,
        deviation_tolerance: 1,
    };
    let s = score_term_prepared("Go go", &pq, SearchMode::StrictCaseInsensitive, &policy);
    assert_eq!(s.score, 20);
    assert_eq!(s.runs, 2);
}
