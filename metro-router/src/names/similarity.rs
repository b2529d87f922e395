//! String similarity scores for station name suggestions.

/// Similarity metric used to rank suggestion candidates.
///
/// All metrics score in `0.0..=1.0`, higher meaning more similar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SimilarityMetric {
    /// Ratcliff/Obershelp "gestalt" ratio: twice the number of matching
    /// characters over the total length of both strings.
    #[default]
    SequenceRatio,

    /// Jaro-Winkler similarity, favouring shared prefixes.
    JaroWinkler,

    /// One minus the Levenshtein distance over the longer length.
    NormalizedLevenshtein,
}

impl SimilarityMetric {
    /// Score two strings with this metric.
    pub fn score(self, a: &str, b: &str) -> f64 {
        match self {
            SimilarityMetric::SequenceRatio => sequence_ratio(a, b),
            SimilarityMetric::JaroWinkler => strsim::jaro_winkler(a, b),
            SimilarityMetric::NormalizedLevenshtein => strsim::normalized_levenshtein(a, b),
        }
    }
}

/// Ratcliff/Obershelp similarity ratio.
///
/// Finds the longest common substring, then recurses on the unmatched
/// pieces to its left and right. Among equally long matches the one
/// starting earliest in `a`, then earliest in `b`, is taken. Two empty
/// strings are identical.
///
/// # Examples
///
/// ```
/// use metro_router::names::sequence_ratio;
///
/// assert_eq!(sequence_ratio("abcd", "bcde"), 0.75);
/// assert_eq!(sequence_ratio("bugis", "bugis"), 1.0);
/// ```
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let (i, j, len) = longest_match(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..i], &b[..j]) + matching_chars(&a[i + len..], &b[j + len..])
}

/// Longest common substring as `(start_in_a, start_in_b, len)`.
fn longest_match(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb { prev[j] + 1 } else { 0 };
            let len = cur[j + 1];
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_and_empty() {
        assert!(close(sequence_ratio("bugis", "bugis"), 1.0));
        assert!(close(sequence_ratio("", ""), 1.0));
        assert!(close(sequence_ratio("bugis", ""), 0.0));
    }

    #[test]
    fn known_ratios() {
        assert!(close(sequence_ratio("abcd", "bcde"), 0.75));
        // "bug" + "i" match: 2 * 4 / 10
        assert!(close(sequence_ratio("bugis", "bugsi"), 0.8));
        assert!(close(sequence_ratio("abc", "xyz"), 0.0));
    }

    #[test]
    fn recursion_matches_both_sides() {
        // "ity hal" plus nothing else on either side
        let score = sequence_ratio("city hall", "ity hal");
        assert!(close(score, 2.0 * 7.0 / 16.0));
    }

    #[test]
    fn earliest_longest_match_wins() {
        assert_eq!(longest_match(&['a', 'b', 'a', 'b'], &['a', 'b']), (0, 0, 2));
        let a: Vec<char> = "xxab".chars().collect();
        let b: Vec<char> = "abab".chars().collect();
        assert_eq!(longest_match(&a, &b), (2, 0, 2));
    }

    #[test]
    fn symmetric_for_simple_inputs() {
        assert!(close(
            sequence_ratio("tanah merah", "tanah mera"),
            sequence_ratio("tanah mera", "tanah merah")
        ));
    }

    #[test]
    fn metric_dispatch() {
        assert!(close(SimilarityMetric::SequenceRatio.score("abcd", "bcde"), 0.75));
        assert!(close(SimilarityMetric::JaroWinkler.score("bugis", "bugis"), 1.0));
        assert!(close(
            SimilarityMetric::NormalizedLevenshtein.score("bugis", "bugix"),
            0.8
        ));
        assert_eq!(SimilarityMetric::default(), SimilarityMetric::SequenceRatio);
    }
}
