// Fuzzy text helpers shared by the resolver and the extractors

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Characters OCR scatters around labels and separators on the card
    static ref PUNCTUATION: Regex = Regex::new(r"[`~@#$%^&*()\\}\]|\[{;:?.><!·•]").unwrap();
    static ref NUMERIC_TOKEN: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Levenshtein distance counted in characters, not bytes
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    if s1 == s2 {
        return 0;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Single rolling row of the edit matrix
    let mut row: Vec<usize> = (0..=s2_chars.len()).collect();

    for (i, c1) in s1_chars.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;

        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            let substitution = diagonal + cost;
            diagonal = row[j + 1];
            row[j + 1] = (row[j] + 1).min(row[j + 1] + 1).min(substitution);
        }
    }

    row[s2_chars.len()]
}

/// Index and distance of the token closest to `target`, if any is within `max_distance`.
/// Ties go to the earliest token.
pub fn closest<S: AsRef<str>>(
    tokens: &[S],
    target: &str,
    max_distance: usize,
) -> Option<(usize, usize)> {
    tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| (idx, levenshtein_distance(token.as_ref(), target)))
        .fold(None, |best: Option<(usize, usize)>, (idx, dist)| match best {
            Some((_, best_dist)) if best_dist <= dist => best,
            _ => Some((idx, dist)),
        })
        .filter(|(_, dist)| *dist <= max_distance)
}

/// Removes blacklisted punctuation and surrounding whitespace
pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, "").trim().to_string()
}

/// Generic value cleanup: tokens joined by single spaces, punctuation stripped
pub fn clean_text<S: AsRef<str>>(tokens: &[S]) -> String {
    strip_punctuation(&join_tokens(tokens))
}

pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_numeric_token(token: &str) -> bool {
    NUMERIC_TOKEN.is_match(token)
}
