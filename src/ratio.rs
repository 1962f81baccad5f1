//! Similarity scoring and nearest-match selection

use crate::matcher::SequenceMatcher;
use std::hash::Hash;

/// Similarity of two sequences in `[0.0, 1.0]`.
///
/// `1.0` means identical (two empty sequences included), `0.0` means the
/// sequences share no elements. See [`SequenceMatcher::ratio`] for the
/// definition.
pub fn sequence_ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    SequenceMatcher::new(a, b).ratio()
}

/// Similarity of two strings compared character by character.
///
/// Characters are Unicode code points, not bytes, so multi-byte text
/// scores the same as its ASCII transliteration would.
///
/// ```
/// use textdiff::string_ratio;
///
/// assert_eq!(string_ratio("kitten", "kitten"), 1.0);
/// assert_eq!(string_ratio("kitten", "sitting"), 2.0 * 4.0 / 13.0);
/// ```
pub fn string_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    sequence_ratio(&a, &b)
}

/// Find the candidate most similar to `target`.
///
/// Candidates are scanned in order and the first one with a strictly
/// higher ratio wins, so earlier candidates break ties. Returns
/// `("", 0.0)` when `candidates` is empty.
///
/// ```
/// use textdiff::closest_match;
///
/// let (best, ratio) = closest_match("appel", &["apple", "mango", "apply"]);
/// assert_eq!(best, "apple");
/// assert_eq!(ratio, 0.8);
/// ```
pub fn closest_match(target: &str, candidates: &[&str]) -> (String, f64) {
    let mut best = "";
    let mut best_ratio = -1.0;
    for &candidate in candidates {
        let ratio = string_ratio(target, candidate);
        if ratio > best_ratio {
            best_ratio = ratio;
            best = candidate;
        }
    }
    if candidates.is_empty() {
        return (String::new(), 0.0);
    }
    (best.to_owned(), best_ratio)
}

/// Rank candidates by similarity to `target` and keep the best `n`.
///
/// The sort is stable and descending by ratio, so equally similar
/// candidates stay in their original order. Asking for more matches than
/// there are candidates returns them all.
pub fn closest_matches(target: &str, candidates: &[&str], n: usize) -> Vec<String> {
    let mut ranked: Vec<(&str, f64)> = candidates
        .iter()
        .map(|candidate| (*candidate, string_ratio(target, candidate)))
        .collect();
    ranked.sort_by(|x, y| y.1.total_cmp(&x.1));
    ranked.truncate(n);
    ranked
        .into_iter()
        .map(|(candidate, _)| candidate.to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences_score_one() {
        let a = ["foo\n", "bar\n"];
        assert_eq!(sequence_ratio(&a, &a), 1.0);
    }

    #[test]
    fn empty_sequences_score_one() {
        assert_eq!(sequence_ratio::<&str>(&[], &[]), 1.0);
    }

    #[test]
    fn disjoint_sequences_score_zero() {
        assert_eq!(sequence_ratio(&["foo\n"], &["bar\n"]), 0.0);
    }

    #[test]
    fn ratio_is_bounded() {
        let a = ["foo\n", "bar\n", "baz\n"];
        let b = ["foo\n", "quux\n"];
        let r = sequence_ratio(&a, &b);
        assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn string_ratio_counts_code_points() {
        // One code point changed out of five on each side; a bytewise
        // comparison would weigh the two-byte character double.
        assert_eq!(string_ratio("na\u{ef}ve", "na\u{ef}va"), 2.0 * 4.0 / 10.0);
    }

    #[test]
    fn closest_match_empty_candidates() {
        assert_eq!(closest_match("foo", &[]), (String::new(), 0.0));
    }

    #[test]
    fn closest_match_prefers_earlier_on_tie() {
        // "apple" and "apply" both share four characters with the target.
        let (best, _) = closest_match("appel", &["apple", "mango", "apply"]);
        assert_eq!(best, "apple");
        let (best, _) = closest_match("appel", &["apply", "mango", "apple"]);
        assert_eq!(best, "apply");
    }

    #[test]
    fn closest_matches_ranks_and_truncates() {
        let matches = closest_matches("appel", &["apple", "mango", "apply", "apt"], 2);
        assert_eq!(matches, ["apple", "apply"]);
    }

    #[test]
    fn closest_matches_n_larger_than_candidates() {
        let matches = closest_matches("foo", &["foo", "bar"], 10);
        assert_eq!(matches, ["foo", "bar"]);
    }
}
