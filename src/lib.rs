//! Deterministic phonetic transliteration of Arabic personal names.
//!
//! The pipeline runs a raw name through normalization, a letter-by-letter
//! phonetic map (or a pluggable scientific engine reduced to the same
//! alphabet), contextual pronunciation rules that consult the original
//! diacritics, and a table of conventional spellings:
//!
//! ```
//! use arabic_name::Transliterator;
//!
//! let t = Transliterator::new();
//! assert_eq!(t.transliterate("محمد"), "Muhammad");
//!
//! let rendering = t.render("أحمد بن محمد").unwrap();
//! assert_eq!(rendering.first_name.as_deref(), Some("Ahmad"));
//! assert_eq!(rendering.filiation.as_deref(), Some("bin Muhammad"));
//! ```
//!
//! Multi-word names are first segmented into first-name / filiation /
//! family-name groups; each group goes through the same pipeline
//! independently.

pub mod config;
mod context;
mod engine;
mod grapheme;
mod lexicon;
pub mod normalize;
pub mod reply;
mod scientific;
pub mod segment;
pub mod signature;

pub use engine::{EngineError, ScientificEngine};
pub use normalize::normalize;
pub use segment::NameParts;

use log::warn;

/// The pipeline owner. Stateless and cheap to construct; holds only the
/// optional scientific-engine collaborator.
#[derive(Default)]
pub struct Transliterator {
    engine: Option<Box<dyn ScientificEngine>>,
}

/// Per-group phonetic renderings of a segmented name. Empty groups are
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRendering {
    pub first_name: Option<String>,
    pub filiation: Option<String>,
    pub family_name: Option<String>,
}

impl NameRendering {
    /// Populated groups in display order, with their labels.
    pub fn labeled_lines(&self) -> Vec<(&'static str, &str)> {
        [
            ("First name", &self.first_name),
            ("Filiation", &self.filiation),
            ("Family name", &self.family_name),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
        .collect()
    }
}

impl Transliterator {
    pub fn new() -> Transliterator {
        Transliterator { engine: None }
    }

    /// Use a scientific-transliteration engine for the mapping stage.
    /// The engine is advisory: on any failure the native letter map
    /// takes over and the caller never notices.
    pub fn with_engine(engine: Box<dyn ScientificEngine>) -> Transliterator {
        Transliterator {
            engine: Some(engine),
        }
    }

    /// Run the full pipeline over one name group. Empty or
    /// whitespace-only input yields an empty string.
    pub fn transliterate(&self, text: &str) -> String {
        let normalized = normalize::normalize(text);
        if normalized.is_empty() {
            return String::new();
        }

        let phonetic = self.phonetic(&normalized);
        let contextual = context::apply_context(text, &phonetic);
        lexicon::correct_phrase(&contextual)
    }

    /// Segment a multi-word name and transliterate each group.
    /// `None` when the input contains nothing renderable.
    pub fn render(&self, text: &str) -> Option<NameRendering> {
        // Segmentation classifies on normalized tokens, but the stored
        // tokens are the raw ones, so the contextual rules keep access
        // to the diacritics normalization strips.
        let raw_tokens: Vec<&str> = text.split_whitespace().collect();
        let normalized_tokens: Vec<String> =
            raw_tokens.iter().map(|t| normalize::normalize(t)).collect();

        let pairs = normalized_tokens
            .iter()
            .zip(&raw_tokens)
            .filter(|(normalized, _)| !normalized.is_empty())
            .map(|(normalized, raw)| (normalized.as_str(), *raw));
        let parts = segment::partition(pairs);

        if parts.is_empty() {
            return None;
        }

        let rendering = NameRendering {
            first_name: self.render_group(parts.first_name_text()),
            filiation: self.render_group(parts.filiation_text()),
            family_name: self.render_group(parts.family_name_text()),
        };

        if rendering.labeled_lines().is_empty() {
            None
        } else {
            Some(rendering)
        }
    }

    fn render_group(&self, group: Option<String>) -> Option<String> {
        group
            .map(|text| self.transliterate(&text))
            .filter(|rendered| !rendered.is_empty())
    }

    fn phonetic(&self, normalized: &str) -> String {
        if let Some(engine) = &self.engine {
            match engine.transliterate(normalized) {
                Ok(scientific) if !scientific.trim().is_empty() => {
                    let reduced = scientific::reduce(&scientific);
                    if !reduced.is_empty() && !reduced.chars().any(grapheme::is_arabic_script) {
                        return reduced;
                    }
                    warn!("scientific engine output unusable, using native map");
                }
                Ok(_) => warn!("scientific engine returned empty output, using native map"),
                Err(err) => warn!("scientific engine failed ({}), using native map", err),
            }
        }

        grapheme::map_to_phonetic(normalized)
    }
}
