//! Ordering of scored results.
//!
//! Results are always ordered by score, highest first. Equal scores are
//! resolved by the configured [`TieBreak`].

use std::cmp::Ordering;

use crate::candidate::MatchResult;
use crate::options::TieBreak;

/// Comparator placing higher scores first.
///
/// Only `score` is inspected; deviation, id and position are ignored. Use
/// [`compare_results`] when equal scores need a secondary key.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use termrank::{MatchResult, sort::by_score_desc};
///
/// let hi = MatchResult { id: "a".into(), term: "cat".into(), score: 6, deviation: 0 };
/// let lo = MatchResult { id: "b".into(), term: "cut".into(), score: 4, deviation: 1 };
/// assert_eq!(by_score_desc(&hi, &lo), Ordering::Less);
/// ```
pub fn by_score_desc(a: &MatchResult, b: &MatchResult) -> Ordering {
    b.score.cmp(&a.score)
}

/// Comparator for score descending, then the tie-break's secondary key.
///
/// [`TieBreak::InputOrder`] and [`TieBreak::Unspecified`] have no secondary
/// key here; input order is preserved by the stable sort in
/// [`sort_results`], not by the comparator.
pub fn compare_results(a: &MatchResult, b: &MatchResult, tie_break: TieBreak) -> Ordering {
    let primary = by_score_desc(a, b);
    match tie_break {
        TieBreak::Id => primary.then_with(|| a.id.cmp(&b.id)),
        TieBreak::InputOrder | TieBreak::Unspecified => primary,
    }
}

/// Sort `results` in place, best first.
///
/// `results` must be in input order on entry for [`TieBreak::InputOrder`]
/// to hold.
pub fn sort_results(results: &mut [MatchResult], tie_break: TieBreak) {
    match tie_break {
        TieBreak::Unspecified => results.sort_unstable_by(by_score_desc),
        TieBreak::InputOrder | TieBreak::Id => {
            results.sort_by(|a, b| compare_results(a, b, tie_break));
        }
    }
}
