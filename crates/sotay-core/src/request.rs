use serde::Deserialize;
use sotay_types::{Extraction, ExtractionMode};

use crate::error::ExtractError;
use crate::extract::extract;

/// Inbound extraction request, as posted by a caller
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mode: ExtractionMode,
}

impl ExtractRequest {
    pub fn new(text: impl Into<String>, mode: ExtractionMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    /// Reject empty or whitespace-only text before it reaches the engine
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.text.trim().is_empty() {
            return Err(ExtractError::EmptyInput);
        }
        Ok(())
    }

    pub fn run(&self) -> Result<Extraction, ExtractError> {
        self.validate()?;
        Ok(extract(&self.text, self.mode))
    }
}
