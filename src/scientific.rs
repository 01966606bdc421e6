//! Reduction of scholarly romanization to the phonetic alphabet.
//!
//! A scientific engine renders with macrons, underdots, and the
//! ʿayn/hamza half-rings. This pass flattens that down to the same
//! lowercase alphabet the native letter map emits, so both mapping
//! paths converge before the contextual rules run.

/// Reduce a scientific transliteration to a plain phonetic string.
///
/// Long-vowel macrons double the vowel, emphatic underdots collapse to
/// the plain letter, ʿayn becomes "a" and hamza disappears (matching
/// the native map's ع/ء policy), hyphens become spaces, and the result
/// is lowercased with whitespace collapsed.
pub fn reduce(scientific: &str) -> String {
    fn push(out: &mut String, pending: &mut bool, s: &str) {
        if *pending {
            out.push(' ');
            *pending = false;
        }
        out.push_str(s);
    }

    let mut out = String::with_capacity(scientific.len());
    let mut pending_space = false;

    for c in scientific.chars().flat_map(char::to_lowercase) {
        match c {
            'ā' => push(&mut out, &mut pending_space, "aa"),
            'ī' => push(&mut out, &mut pending_space, "ii"),
            'ū' => push(&mut out, &mut pending_space, "uu"),
            'ḥ' => push(&mut out, &mut pending_space, "h"),
            'ḍ' => push(&mut out, &mut pending_space, "d"),
            'ṣ' => push(&mut out, &mut pending_space, "s"),
            'ṭ' => push(&mut out, &mut pending_space, "t"),
            'ẓ' => push(&mut out, &mut pending_space, "z"),
            'ʿ' => push(&mut out, &mut pending_space, "a"),
            'ʾ' => {}
            '-' => pending_space = !out.is_empty(),
            c if c.is_whitespace() => pending_space = !out.is_empty(),
            c => {
                let mut buf = [0u8; 4];
                push(&mut out, &mut pending_space, c.encode_utf8(&mut buf));
            }
        }
    }

    out
}
