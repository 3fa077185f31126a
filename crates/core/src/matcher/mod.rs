//! Spoken-answer checking.
//!
//! Answers are compared after normalization in three tiers, first hit wins:
//! exact match, containment, then normalized Levenshtein similarity against
//! [`ACCEPT_THRESHOLD`].

mod levenshtein;

use serde::{Deserialize, Serialize};

pub use levenshtein::levenshtein;

/// Fuzzy similarity at or above this is accepted.
pub const ACCEPT_THRESHOLD: f32 = 0.8;
/// Score reported when one answer contains the other.
pub const CONTAINMENT_SCORE: f32 = 0.9;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub is_correct: bool,
    pub similarity: f32,
}

impl MatchResult {
    fn accepted(similarity: f32) -> Self {
        Self {
            is_correct: true,
            similarity,
        }
    }
}

/// Outcome of checking ranked recognition alternatives.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RankedMatch {
    /// Rank of the alternative that produced `result` (0 = top).
    pub rank: usize,
    pub transcript: String,
    pub result: MatchResult,
}

/// Drops all whitespace and lowercases; uncased scripts pass through.
pub fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `(L - distance) / L` where `L` is the longer length in chars; two empty
/// strings are identical.
pub fn similarity(a: &str, b: &str) -> f32 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b);
    (longest - distance) as f32 / longest as f32
}

pub fn check_answer(user_answer: &str, correct_answer: &str) -> MatchResult {
    let user = normalize(user_answer);
    let correct = normalize(correct_answer);

    if user == correct {
        return MatchResult::accepted(1.0);
    }

    // an empty string is a substring of everything; it must not pass here
    if !user.is_empty()
        && !correct.is_empty()
        && (user.contains(correct.as_str()) || correct.contains(user.as_str()))
    {
        return MatchResult::accepted(CONTAINMENT_SCORE);
    }

    let similarity = similarity(&user, &correct);
    MatchResult {
        is_correct: similarity >= ACCEPT_THRESHOLD,
        similarity,
    }
}

/// Tries `alternatives` in rank order and returns the first accepted one.
///
/// When none is accepted the top alternative's result is reported. Returns
/// `None` only for an empty list.
pub fn check_alternatives<I, S>(alternatives: I, correct_answer: &str) -> Option<RankedMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut top = None;
    for (rank, alt) in alternatives.into_iter().enumerate() {
        let transcript = alt.as_ref();
        let result = check_answer(transcript, correct_answer);
        let ranked = RankedMatch {
            rank,
            transcript: transcript.to_owned(),
            result,
        };
        if result.is_correct {
            tracing::debug!(rank, transcript, similarity = result.similarity, "answer accepted");
            return Some(ranked);
        }
        if top.is_none() {
            top = Some(ranked);
        }
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_whitespace_and_case() {
        assert_eq!(normalize("  Red \tApple\n"), "redapple");
        assert_eq!(normalize("코 끼 리"), "코끼리");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn identical_answers_score_one() {
        for x in ["apple", "코끼리", "Ice Cream", "a"] {
            let r = check_answer(x, x);
            assert!(r.is_correct);
            assert_eq!(r.similarity, 1.0);
        }
    }

    #[test]
    fn exact_after_normalization() {
        let r = check_answer("아이스 크림", "아이스크림");
        assert_eq!(r, MatchResult { is_correct: true, similarity: 1.0 });
        assert_eq!(check_answer("APPLE", "apple").similarity, 1.0);
    }

    #[test]
    fn containment_beats_fuzzy_scoring() {
        let r = check_answer("red apple", "apple");
        assert_eq!(r, MatchResult { is_correct: true, similarity: CONTAINMENT_SCORE });
        let r = check_answer("토", "토끼");
        assert!(r.is_correct);
        assert_eq!(r.similarity, CONTAINMENT_SCORE);
    }

    #[test]
    fn single_deletion_sits_on_the_threshold() {
        assert_eq!(similarity("apple", "appl"), 0.8);
        assert!(check_answer("apple", "appl").is_correct);

        // one substitution in five chars goes through the fuzzy tier
        let r = check_answer("apxle", "apple");
        assert_eq!(r.similarity, 0.8);
        assert!(r.is_correct);
    }

    #[test]
    fn unrelated_answer_is_rejected() {
        let r = check_answer("xyz", "apple");
        assert!(!r.is_correct);
        assert!(r.similarity < ACCEPT_THRESHOLD);
    }

    #[test]
    fn empty_answer_is_rejected_not_contained() {
        let r = check_answer("", "apple");
        assert!(!r.is_correct);
        assert_eq!(r.similarity, 0.0);
        let r = check_answer("   ", "코끼리");
        assert!(!r.is_correct);
    }

    #[test]
    fn both_empty_is_a_match() {
        assert_eq!(check_answer("", " "), MatchResult { is_correct: true, similarity: 1.0 });
    }

    #[test]
    fn hangul_near_miss() {
        // 고양이 vs 고향이: one syllable off out of three
        let r = check_answer("고향이", "고양이");
        assert!((r.similarity - 2.0 / 3.0).abs() < 1e-6);
        assert!(!r.is_correct);
    }

    #[test]
    fn alternatives_are_tried_in_rank_order() {
        let hit = check_alternatives(["코기리다", "코끼리", "코끼리야"], "코끼리").expect("non-empty");
        assert_eq!(hit.rank, 1);
        assert_eq!(hit.transcript, "코끼리");
        assert_eq!(hit.result.similarity, 1.0);
    }

    #[test]
    fn rejected_alternatives_report_the_top_one() {
        let miss = check_alternatives(vec!["xyz".to_owned(), "qqq".to_owned()], "apple")
            .expect("non-empty");
        assert_eq!(miss.rank, 0);
        assert_eq!(miss.transcript, "xyz");
        assert!(!miss.result.is_correct);
        assert!(check_alternatives(Vec::<&str>::new(), "apple").is_none());
    }
}
