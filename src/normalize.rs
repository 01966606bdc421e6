//! Normalization of Arabic orthographic variants.
//!
//! Folds the letter variants that spell the same name differently
//! (hamza-carrying alefs, alef maksura, hamza seats) down to canonical
//! forms, strips the short-vowel diacritic block, and collapses
//! whitespace. Taa-marbuta is deliberately *not* folded here; it is
//! rendered by the grapheme map and guarded by the final-vowel rule in
//! `context`, so folding it during normalization would apply the vowel
//! twice.

use unicode_normalization::UnicodeNormalization;

pub(crate) const ALEF: char = '\u{0627}'; // ا
pub(crate) const LAM: char = '\u{0644}'; // ل
pub(crate) const SHADDA: char = '\u{0651}'; // gemination mark
pub(crate) const TAA_MARBUTA: char = '\u{0629}'; // ة

const TATWEEL: char = '\u{0640}';
const SUPERSCRIPT_ALEF: char = '\u{0670}';

/// Fold a single character to its canonical form, or drop it entirely
/// (diacritics, tatweel).
pub(crate) fn fold(c: char) -> Option<char> {
    match c {
        // Short vowels, tanwin, shadda, sukun
        '\u{064B}'..='\u{0652}' | SUPERSCRIPT_ALEF | TATWEEL => None,
        // Alef with hamza above/below, madda, wasla
        '\u{0623}' | '\u{0625}' | '\u{0622}' | '\u{0671}' => Some(ALEF),
        // Alef maksura to yaa
        '\u{0649}' => Some('\u{064A}'),
        // Hamza on waw / hamza on yaa to the base letter
        '\u{0624}' => Some('\u{0648}'),
        '\u{0626}' => Some('\u{064A}'),
        _ => Some(c),
    }
}

/// Fold variants, strip diacritics, and collapse whitespace.
///
/// Pure and total: non-Arabic input passes through, empty input yields
/// an empty string. Runs NFC first so a decomposed hamza-above-alef
/// folds the same way as the precomposed letter.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.nfc().filter_map(fold) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_alef_variants() {
        assert_eq!(normalize("أحمد"), "احمد");
        assert_eq!(normalize("إبراهيم"), "ابراهيم");
        assert_eq!(normalize("آمنة"), "امنة");
    }

    #[test]
    fn strips_diacritics() {
        // Fatha, damma, shadda all removed
        assert_eq!(normalize("مُحَمَّد"), "محمد");
    }

    #[test]
    fn folds_hamza_seats() {
        assert_eq!(normalize("مؤمن"), "مومن");
        assert_eq!(normalize("رئيس"), "رييس");
        assert_eq!(normalize("مصطفى"), "مصطفي");
    }

    #[test]
    fn preserves_taa_marbuta() {
        assert_eq!(normalize("فاطمة"), "فاطمة");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("  عبد   الله \t"), "عبد الله");
    }

    #[test]
    fn idempotent() {
        for input in ["أحمد بن محمّد", "  فاطمة ", "عبد الرحمن"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn non_arabic_passes_through() {
        assert_eq!(normalize("John Smith"), "John Smith");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn decomposed_hamza_folds_like_precomposed() {
        // Alef + combining hamza above composes to U+0623 under NFC
        assert_eq!(normalize("\u{0627}\u{0654}حمد"), "احمد");
    }
}
