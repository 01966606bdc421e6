//! Heuristic segmentation of a multi-word name.
//!
//! A single left-to-right pass over the tokens of a normalized name
//! splits it into first-name / filiation-chain / family-name groups. A
//! filiation marker (بن / ابن) consumes itself plus the following token
//! as a pair; a token carrying the definite article is a family-name
//! token; everything else fills the first name (up to two tokens) and
//! then spills into the family name.

use compact_str::CompactString;
use smallvec::SmallVec;

const FILIATION_MARKERS: [&str; 2] = ["بن", "ابن"];
const ARTICLE_PREFIX: &str = "ال";

const FIRST_NAME_TOKENS: usize = 2;

/// Ordered token groups of a segmented name. Tokens are stored in the
/// script they arrived in; rendering them is the pipeline's job.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub first_name: SmallVec<[CompactString; 2]>,
    pub filiation_chain: SmallVec<[(CompactString, CompactString); 2]>,
    pub family_name: SmallVec<[CompactString; 2]>,
}

impl NameParts {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty() && self.filiation_chain.is_empty() && self.family_name.is_empty()
    }

    pub fn first_name_text(&self) -> Option<String> {
        join(&self.first_name)
    }

    pub fn filiation_text(&self) -> Option<String> {
        if self.filiation_chain.is_empty() {
            return None;
        }
        let words: Vec<&str> = self
            .filiation_chain
            .iter()
            .flat_map(|(marker, name)| [marker.as_str(), name.as_str()])
            .collect();
        Some(words.join(" "))
    }

    pub fn family_name_text(&self) -> Option<String> {
        join(&self.family_name)
    }
}

fn join(tokens: &[CompactString]) -> Option<String> {
    if tokens.is_empty() {
        None
    } else {
        Some(
            tokens
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

/// Segment a normalized name into its three groups.
pub fn segment(normalized: &str) -> NameParts {
    partition(normalized.split_whitespace().map(|t| (t, t)))
}

/// Core of the segmenter. Classification looks at the first element of
/// each pair (the normalized token); the second element (which may be
/// the raw, diacritic-carrying token) is what gets stored, so the
/// contextual rules downstream keep their side channel.
pub(crate) fn partition<'a>(mut tokens: impl Iterator<Item = (&'a str, &'a str)>) -> NameParts {
    let mut parts = NameParts::default();

    while let Some((key, stored)) = tokens.next() {
        if FILIATION_MARKERS.contains(&key) {
            // The marker consumes the following token as its pair. A
            // trailing marker with nothing after it is classified like
            // any other token below.
            if let Some((_, name)) = tokens.next() {
                parts
                    .filiation_chain
                    .push((CompactString::from(stored), CompactString::from(name)));
                continue;
            }
        }

        if key.starts_with(ARTICLE_PREFIX) && key.chars().count() > 2 {
            parts.family_name.push(CompactString::from(stored));
        } else if parts.first_name.len() < FIRST_NAME_TOKENS {
            parts.first_name.push(CompactString::from(stored));
        } else {
            parts.family_name.push(CompactString::from(stored));
        }
    }

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(parts: &NameParts) -> (Option<String>, Option<String>, Option<String>) {
        (
            parts.first_name_text(),
            parts.filiation_text(),
            parts.family_name_text(),
        )
    }

    #[test]
    fn single_token_is_first_name() {
        let (first, filiation, family) = texts(&segment("محمد"));
        assert_eq!(first.as_deref(), Some("محمد"));
        assert_eq!(filiation, None);
        assert_eq!(family, None);
    }

    #[test]
    fn filiation_marker_consumes_next_token() {
        let (first, filiation, family) = texts(&segment("احمد بن محمد"));
        assert_eq!(first.as_deref(), Some("احمد"));
        assert_eq!(filiation.as_deref(), Some("بن محمد"));
        assert_eq!(family, None);
    }

    #[test]
    fn chained_filiation() {
        let parts = segment("احمد بن محمد بن علي");
        assert_eq!(parts.filiation_chain.len(), 2);
        assert_eq!(parts.filiation_text().as_deref(), Some("بن محمد بن علي"));
    }

    #[test]
    fn article_token_is_family_name() {
        let (first, _, family) = texts(&segment("كريم العلي"));
        assert_eq!(first.as_deref(), Some("كريم"));
        assert_eq!(family.as_deref(), Some("العلي"));
    }

    #[test]
    fn overflow_goes_to_family_name() {
        let (first, _, family) = texts(&segment("محمد امين طارق حسن"));
        assert_eq!(first.as_deref(), Some("محمد امين"));
        assert_eq!(family.as_deref(), Some("طارق حسن"));
    }

    #[test]
    fn trailing_marker_is_ordinary_token() {
        // A marker with nothing after it can't form a pair
        let (first, filiation, _) = texts(&segment("احمد بن"));
        assert_eq!(first.as_deref(), Some("احمد بن"));
        assert_eq!(filiation, None);
    }

    #[test]
    fn ibn_variant_recognized() {
        let parts = segment("عمر ابن الخطاب");
        assert_eq!(parts.filiation_text().as_deref(), Some("ابن الخطاب"));
    }

    #[test]
    fn empty_input() {
        assert!(segment("").is_empty());
    }
}
