//! The baseline letter-by-letter phonetic map.
//!
//! Produces a lowercase ASCII rendering aimed at non-specialist readers,
//! deliberately lossy (ص and س both give "s"). Digraphs are matched
//! before single letters so a digraph is never split into two
//! single-letter substitutions; the only digraph in the table is the
//! word-initial definite article, which renders with its own trailing
//! hyphen so the contextual rules can find it.

use crate::normalize::{ALEF, LAM};
use phf::phf_map;

static LETTERS: phf::Map<char, &'static str> = phf_map! {
    'ا' => "a",
    'ب' => "b",
    'ت' => "t",
    'ث' => "th",
    'ج' => "j",
    'ح' => "h",
    'خ' => "kh",
    'د' => "d",
    'ذ' => "dh",
    'ر' => "r",
    'ز' => "z",
    'س' => "s",
    'ش' => "sh",
    'ص' => "s",
    'ض' => "d",
    'ط' => "t",
    'ظ' => "z",
    'ع' => "a",
    'غ' => "gh",
    'ف' => "f",
    'ق' => "q",
    'ك' => "k",
    'ل' => "l",
    'م' => "m",
    'ن' => "n",
    'ه' => "h",
    'و' => "w",
    'ي' => "y",
    'ء' => "",
    'ة' => "a",
};

/// Phonetic token for a single (already folded) letter.
pub(crate) fn letter_token(c: char) -> Option<&'static str> {
    LETTERS.get(&c).copied()
}

pub(crate) fn is_arabic_script(c: char) -> bool {
    matches!(c as u32,
        0x0600..=0x06FF | 0x0750..=0x077F | 0x08A0..=0x08FF | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF)
}

/// Convert normalized Arabic text to a baseline phonetic string.
///
/// Unmapped characters are dropped; whitespace survives as the token
/// separator. Total: never panics, and the output never contains
/// Arabic-script code points.
pub fn map_to_phonetic(normalized: &str) -> String {
    let mut out = String::with_capacity(normalized.len());

    for word in normalized.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        map_word(word, &mut out);
    }

    out
}

fn map_word(word: &str, out: &mut String) {
    // Digraph check comes first: a word-initial alef-lam is the definite
    // article, rendered "al-" as one unit (never "a" + "l"). A bare
    // alef-lam with nothing after it is not an article.
    let rest = match word.strip_prefix(ALEF).and_then(|w| w.strip_prefix(LAM)) {
        Some(after) if !after.is_empty() => {
            out.push_str("al-");
            after
        }
        _ => word,
    };

    for c in rest.chars() {
        if let Some(token) = LETTERS.get(&c) {
            out.push_str(token);
        }
        // Anything unmapped (punctuation, Latin, digits) is dropped
    }
}
