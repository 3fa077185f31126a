/// Classic edit distance over Unicode scalar values; insert, delete and
/// substitute each cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // single rolling row over `b`
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diag
            } else {
                1 + diag.min(above).min(row[j])
            };
            diag = above;
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distances() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("apple", "appl"), 1);
        assert_eq!(levenshtein("apple", "apple"), 0);
    }

    #[test]
    fn counts_hangul_syllables_not_bytes() {
        assert_eq!(levenshtein("코끼리", "코끼"), 1);
        assert_eq!(levenshtein("토끼", "도끼"), 1);
    }

    #[test]
    fn is_symmetric() {
        let words = ["", "a", "apple", "appl", "xyz", "sitting", "kitten", "코끼리", "고양이"];
        for a in words {
            for b in words {
                assert_eq!(levenshtein(a, b), levenshtein(b, a), "{a:?} vs {b:?}");
            }
        }
    }
}
