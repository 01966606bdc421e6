//! Pluggable scientific-transliteration engines.
//!
//! An engine renders Arabic text in a scholarly romanization (macrons,
//! underdots, ʿayn/hamza markers). The mapper reduces that output to the
//! same phonetic alphabet the native letter map produces, so the rest of
//! the pipeline never knows which path ran. An engine is allowed to fail;
//! the caller falls back to the native map and the failure is never
//! observable as anything but a log line.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine call failed: {0}")]
    Failed(String),
    #[error("engine produced unusable output")]
    Unusable,
}

pub trait ScientificEngine: Send + Sync {
    fn transliterate(&self, text: &str) -> Result<String, EngineError>;
}

/// Any string-to-result function works as an engine.
impl<F> ScientificEngine for F
where
    F: Fn(&str) -> Result<String, EngineError> + Send + Sync,
{
    fn transliterate(&self, text: &str) -> Result<String, EngineError> {
        self(text)
    }
}
