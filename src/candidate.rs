//! Candidate inputs and scored outputs.
//!
//! A candidate is an `(id, term)` pair. [`CandidateItem`] is the owned form,
//! but anything implementing [`AsCandidate`] can be searched directly, so
//! callers holding `(&str, &str)` tuples or their own record types do not
//! need to copy into `CandidateItem` first.

/// A searchable `(id, term)` pair.
///
/// # Examples
///
/// ```
/// use termrank::{AsCandidate, CandidateItem};
///
/// let item = CandidateItem::new("en-gb", "English (UK)");
/// assert_eq!(item.candidate_id(), "en-gb");
/// assert_eq!(item.candidate_term(), "English (UK)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateItem {
    /// Opaque identifier, copied verbatim into the result.
    pub id: String,
    /// Text matched against the query.
    pub term: String,
}

impl CandidateItem {
    /// Build a candidate from anything convertible to `String`.
    pub fn new(id: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            term: term.into(),
        }
    }
}

/// Types that can be scored as a candidate.
///
/// # Built-in Implementations
///
/// - [`CandidateItem`]
/// - `(I, T)` tuples where both halves implement `AsRef<str>`
/// - `&C` for any `C: AsCandidate`
pub trait AsCandidate {
    /// The identifier copied into the [`MatchResult`].
    fn candidate_id(&self) -> &str;

    /// The text the query is matched against.
    fn candidate_term(&self) -> &str;
}

impl AsCandidate for CandidateItem {
    fn candidate_id(&self) -> &str {
        &self.id
    }

    fn candidate_term(&self) -> &str {
        &self.term
    }
}

impl<I: AsRef<str>, T: AsRef<str>> AsCandidate for (I, T) {
    fn candidate_id(&self) -> &str {
        self.0.as_ref()
    }

    fn candidate_term(&self) -> &str {
        self.1.as_ref()
    }
}

impl<C: AsCandidate + ?Sized> AsCandidate for &C {
    fn candidate_id(&self) -> &str {
        (**self).candidate_id()
    }

    fn candidate_term(&self) -> &str {
        (**self).candidate_term()
    }
}

/// One scored candidate.
///
/// Every input candidate produces exactly one `MatchResult`, including
/// candidates that scored zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Copied from the candidate.
    pub id: String,
    /// Copied from the candidate.
    pub term: String,
    /// Sum of the scores of every completed run.
    pub score: u32,
    /// Sum of the deviations of every completed run.
    pub deviation: u32,
}

impl MatchResult {
    /// Whether at least one run scored points.
    ///
    /// A run made only of deviations cannot exist (runs start on a real
    /// match), so under the default policy this is the same as "the query
    /// occurred at least once".
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_and_term<C: AsCandidate>(c: C) -> (String, String) {
        (c.candidate_id().to_owned(), c.candidate_term().to_owned())
    }

    #[test]
    fn candidate_item_accessors() {
        let item = CandidateItem::new("1", "one");
        assert_eq!(id_and_term(&item), ("1".to_owned(), "one".to_owned()));
    }

    #[test]
    fn str_tuple_is_candidate() {
        assert_eq!(
            id_and_term(("a", "alpha")),
            ("a".to_owned(), "alpha".to_owned())
        );
    }

    #[test]
    fn owned_tuple_is_candidate() {
        let pair = (String::from("b"), String::from("beta"));
        assert_eq!(id_and_term(&pair), ("b".to_owned(), "beta".to_owned()));
    }

    #[test]
    fn double_reference_is_candidate() {
        let item = CandidateItem::new("c", "gamma");
        let r = &item;
        assert_eq!(id_and_term(&r), ("c".to_owned(), "gamma".to_owned()));
    }

    #[test]
    fn empty_fields_are_allowed() {
        let item = CandidateItem::new("", "");
        assert_eq!(item.candidate_id(), "");
        assert_eq!(item.candidate_term(), "");
    }

    #[test]
    fn zero_score_is_not_a_match() {
        let result = MatchResult {
            id: "x".to_owned(),
            term: "xyz".to_owned(),
            score: 0,
            deviation: 0,
        };
        assert!(!result.is_match());
        assert!(
            MatchResult {
                score: 1,
                ..result
            }
            .is_match()
        );
    }
}
