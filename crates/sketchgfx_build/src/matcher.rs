//! Token-sort fuzzy matching.
//!
//! Queries and candidates are tokenized (see
//! [`split_tokens`](crate::token::split_tokens)), and each query is
//! resolved to the highest scoring candidate. Scoring is
//! order-insensitive: both token strings are lowercased, sorted
//! token-wise, rejoined and compared by normalized indel similarity.

use thiserror::Error;
use tracing::warn;

use crate::token::split_tokens;

/// Scores below this are accepted but surfaced as low-confidence
/// matches.
pub const CONFIDENCE_THRESHOLD: u8 = 95;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// There is nothing to match against. This is a usage error in
    /// the calling layer, not a runtime fault.
    #[error("cannot fuzzy match against an empty candidate set")]
    EmptyTargets,
}

/// Sorts the whitespace-delimited tokens of a lowercased string and
/// rejoins them.
fn sort_tokens(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut tokens: Vec<&str> =
        lowered.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Length of the longest common subsequence of two char sequences.
fn common_subsequence_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                usize::max(prev[j + 1], curr[j])
            };
        }
        core::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Token-order-insensitive similarity of two strings in `[0, 100]`.
///
/// Both inputs are token-sorted, then compared with the normalized
/// indel similarity `2 * lcs / (len_a + len_b)`, scaled to 100.
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    let a = sort_tokens(a);
    let b = sort_tokens(b);

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let len_sum = a.len() + b.len();
    if len_sum == 0 {
        return 100;
    }

    let lcs = common_subsequence_len(&a, &b);
    let ratio = 2.0 * lcs as f64 / len_sum as f64;

    (ratio * 100.0).round() as u8
}

/// Resolves each query in `values` to the best matching candidate in
/// `targets`, preserving query order.
///
/// Ties break to the earliest candidate in `targets`. A best score
/// below [`CONFIDENCE_THRESHOLD`] still resolves, but is logged as a
/// low-confidence match for diagnostics.
///
/// Fails when `targets` is empty.
pub fn fuzzy_search<'t, T, V>(
    targets: &'t [T],
    values: &[V],
) -> Result<Vec<&'t str>, MatchError>
where
    T: AsRef<str>,
    V: AsRef<str>,
{
    if targets.is_empty() {
        return Err(MatchError::EmptyTargets);
    }

    let parsed_targets: Vec<(&str, String)> = targets
        .iter()
        .map(|target| {
            (target.as_ref(), split_tokens(target.as_ref()))
        })
        .collect();

    let mut matches = Vec::with_capacity(values.len());
    for value in values {
        let value = value.as_ref();
        let parsed_value = split_tokens(value);

        // The candidate set is non-empty, so a best match always
        // exists; ties keep the earliest candidate.
        let mut best = (parsed_targets[0].0, 0u8);
        for (target, parsed_target) in &parsed_targets {
            let score =
                token_sort_ratio(&parsed_value, parsed_target);
            if score > best.1 {
                best = (*target, score);
            }
        }

        let (target, score) = best;
        if score < CONFIDENCE_THRESHOLD {
            warn!(
                "found {} for input {} (score: {})",
                target, value, score
            );
        }

        matches.push(target);
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: &[&str] =
        &["CoincidentLine", "TangentArc", "EqualRadius"];

    #[test]
    fn abbreviation_resolves_to_full_name() {
        let matches =
            fuzzy_search(TARGETS, &["coinLi"]).unwrap();
        assert_eq!(matches, ["CoincidentLine"]);
    }

    #[test]
    fn every_target_matches_itself_perfectly() {
        for target in TARGETS {
            assert_eq!(token_sort_ratio(
                &split_tokens(target),
                &split_tokens(target),
            ), 100);
        }
    }

    #[test]
    fn degenerate_casings_score_lower() {
        let target = split_tokens("CoincidentLine");

        let well_formed =
            token_sort_ratio(&split_tokens("coinLi"), &target);
        let no_boundaries =
            token_sort_ratio(&split_tokens("coinli"), &target);
        let all_caps =
            token_sort_ratio(&split_tokens("COINLI"), &target);

        assert!(well_formed > no_boundaries);
        assert!(well_formed > all_caps);
    }

    #[test]
    fn scoring_is_order_insensitive() {
        assert_eq!(
            token_sort_ratio("Line Coincident", "Coincident Line"),
            100
        );
    }

    #[test]
    fn matching_is_idempotent() {
        let queries = ["coinLi", "tanAr", "eqRa"];

        let first = fuzzy_search(TARGETS, &queries).unwrap();
        let second = fuzzy_search(TARGETS, &queries).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn every_query_resolves_to_a_member_of_targets() {
        // Arbitrary junk still resolves to something from the set.
        let queries = ["xyz", "q", "lineline", "999"];

        let matches = fuzzy_search(TARGETS, &queries).unwrap();
        assert_eq!(matches.len(), queries.len());
        for matched in matches {
            assert!(TARGETS.contains(&matched));
        }
    }

    #[test]
    fn duplicate_queries_resolve_identically() {
        let matches =
            fuzzy_search(TARGETS, &["tanAr", "tanAr"]).unwrap();
        assert_eq!(matches, ["TangentArc", "TangentArc"]);
    }

    #[test]
    fn empty_values_produce_empty_matches() {
        let matches =
            fuzzy_search::<_, &str>(TARGETS, &[]).unwrap();
        assert!(matches.is_empty());
    }

    #[test]
    fn empty_targets_are_a_usage_error() {
        let result = fuzzy_search::<&str, _>(&[], &["coinLi"]);
        assert_eq!(result, Err(MatchError::EmptyTargets));
    }

    #[test]
    fn ties_break_to_the_earliest_candidate() {
        // Both candidates tokenize identically, so every query ties.
        let targets = ["AlphaBeta", "BetaAlpha"];

        let matches =
            fuzzy_search(&targets, &["alBe"]).unwrap();
        assert_eq!(matches, ["AlphaBeta"]);
    }
}
