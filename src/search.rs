//! The search pipeline: validate, score every candidate, sort.

use tracing::{debug, trace};

use crate::candidate::{AsCandidate, MatchResult};
use crate::error::Result;
use crate::options::{SearchMode, SearchOptions};
use crate::ranking::{PreparedQuery, score_term_prepared};
use crate::sort::sort_results;

/// Score every candidate against `query` and return them best-first.
///
/// Uses the default [`ScoringPolicy`](crate::ScoringPolicy) and keeps input
/// order among equal scores. Pass [`SearchMode::default()`] when the caller
/// has no mode preference.
///
/// # Errors
///
/// [`Error::EmptyQuery`](crate::Error::EmptyQuery) if `query` is empty.
///
/// # Examples
///
/// ```
/// use termrank::{SearchMode, search};
///
/// let items = [("1", "Cat"), ("2", "dog"), ("3", "cat")];
/// let results = search(&items, "cat", SearchMode::default()).unwrap();
///
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].id, "3"); // 6 points
/// assert_eq!(results[1].id, "1"); // 5 points
/// assert_eq!(results[2].score, 0); // kept, not dropped
/// ```
pub fn search<C: AsCandidate>(
    candidates: &[C],
    query: &str,
    mode: SearchMode,
) -> Result<Vec<MatchResult>> {
    search_with_options(candidates, query, &SearchOptions::new(mode))
}

/// Like [`search`], with full control over scoring and tie-breaking.
///
/// Exactly one result is produced per candidate. Inputs are validated before
/// any scoring; on error nothing is returned.
///
/// # Errors
///
/// - [`Error::EmptyQuery`](crate::Error::EmptyQuery) if `query` is empty.
/// - [`Error::InvalidPolicy`](crate::Error::InvalidPolicy) if the policy
///   fails [`ScoringPolicy::validate`](crate::ScoringPolicy::validate).
pub fn search_with_options<C: AsCandidate>(
    candidates: &[C],
    query: &str,
    options: &SearchOptions,
) -> Result<Vec<MatchResult>> {
    options.policy.validate()?;
    let pq = PreparedQuery::new(query)?;

    debug!(
        candidates = candidates.len(),
        query_len = pq.len(),
        mode = %options.mode,
        "scoring candidates"
    );

    let mut results: Vec<MatchResult> = candidates
        .iter()
        .map(|candidate| {
            let term = candidate.candidate_term();
            let scored = score_term_prepared(term, &pq, options.mode, &options.policy);
            trace!(
                id = candidate.candidate_id(),
                score = scored.score,
                deviation = scored.deviation,
                runs = scored.runs,
                "scored candidate"
            );
            MatchResult {
                id: candidate.candidate_id().to_owned(),
                term: term.to_owned(),
                score: scored.score,
                deviation: scored.deviation,
            }
        })
        .collect();

    sort_results(&mut results, options.tie_break);

    debug!(
        results = results.len(),
        matched = results.iter().filter(|r| r.is_match()).count(),
        best = results.first().map_or(0, |r| r.score),
        "search complete"
    );

    Ok(results)
}
