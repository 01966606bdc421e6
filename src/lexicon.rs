//! Conventional spellings for common names.
//!
//! Pronunciation heuristics lose to convention for a handful of very
//! common names: nobody writes "Mhmd". The table maps raw phonetic
//! renderings (and common Latin variants) to their canonical display
//! spellings. Matching is exact on the whole token or a fixed
//! multi-token phrase, case-insensitive, never substring; it runs after
//! the contextual rules so assimilation and doubling are not undone by
//! a literal-string correction.

use phf::phf_map;
use std::borrow::Cow;

static CANONICAL: phf::Map<&'static str, &'static str> = phf_map! {
    "mhmd" => "Muhammad",
    "mmhmd" => "Muhammad",
    "mhmmd" => "Muhammad",
    "muhammad" => "Muhammad",
    "mohamed" => "Muhammad",
    "mohammed" => "Muhammad",
    "ahmd" => "Ahmad",
    "ahmad" => "Ahmad",
    "ahmed" => "Ahmad",
    "ywsf" => "Yusuf",
    "yusuf" => "Yusuf",
    "yousef" => "Yusuf",
    "aly" => "Ali",
    "ali" => "Ali",
    "fatma" => "Fatima",
    "fatima" => "Fatima",
    "abdallh" => "Abdullah",
    "abd allh" => "Abdullah",
    "abd al-lh" => "Abdullah",
    "abdullah" => "Abdullah",
    "ar-rhmn" => "al-Rahman",
    "al-rhmn" => "al-Rahman",
    "abd ar-rhmn" => "Abd al-Rahman",
    "abd al-rhmn" => "Abd al-Rahman",
    "al-krym" => "al-Karim",
    "abd al-krym" => "Abd al-Karim",
    // Filiation particle stays lowercase by convention
    "bn" => "bin",
    "abn" => "bin",
    "ibn" => "bin",
    "bin" => "bin",
};

/// Canonical spelling for a whole token, if the table knows one.
pub fn correct(token: &str) -> Option<&'static str> {
    CANONICAL.get(token.to_lowercase().as_str()).copied()
}

/// Correct a capitalized phonetic phrase: try the whole phrase first,
/// then each token. Unmatched tokens pass through unchanged.
pub fn correct_phrase(text: &str) -> String {
    if let Some(canonical) = correct(text) {
        return canonical.to_string();
    }

    text.split(' ')
        .map(|token| match correct(token) {
            Some(canonical) => Cow::Borrowed(canonical),
            None => Cow::Borrowed(token),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrects_known_tokens() {
        assert_eq!(correct("mhmd"), Some("Muhammad"));
        assert_eq!(correct("ahmd"), Some("Ahmad"));
        assert_eq!(correct("bn"), Some("bin"));
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(correct("Mhmd"), Some("Muhammad"));
        assert_eq!(correct("MHMD"), Some("Muhammad"));
    }

    #[test]
    fn whole_token_only() {
        // Substring matches never fire
        assert_eq!(correct("mhmdy"), None);
        assert_eq!(correct_phrase("Mhmdy"), "Mhmdy");
    }

    #[test]
    fn phrase_beats_tokens() {
        assert_eq!(correct_phrase("Abd Ar-rhmn"), "Abd al-Rahman");
        assert_eq!(correct_phrase("Abd Allh"), "Abdullah");
    }

    #[test]
    fn token_fallback_inside_phrase() {
        assert_eq!(correct_phrase("Bn Mhmd"), "bin Muhammad");
        assert_eq!(correct_phrase("Karim Mhmd"), "Karim Muhammad");
    }
}
