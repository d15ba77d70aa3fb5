//! Vocabulary extraction from loosely structured study notes.
//!
//! Two strategies share the same recognizers:
//! - [`sequential::scan_lines`] keeps one open entry and walks line by line.
//! - [`global::scan_text`] + [`associate::associate`] scan the whole text and
//!   pair examples with definitions by word.
//!
//! Extraction never fails; unrecognized text just produces fewer entries.

pub mod associate;
pub mod gloss;
pub mod global;
pub mod patterns;
pub mod sequential;

use sotay_types::{Extraction, ExtractionMode, VocabularyCandidate};

use self::global::GlobalScan;
use self::gloss::split_gloss;
use self::patterns::DefinitionMatch;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};

impl From<DefinitionMatch<'_>> for VocabularyCandidate {
    fn from(definition: DefinitionMatch<'_>) -> Self {
        let gloss = split_gloss(definition.gloss);
        VocabularyCandidate::definition(
            definition.word.to_string(),
            definition.phonetic.to_string(),
            gloss.translation,
            gloss.context,
        )
    }
}

/// Run the selected strategy over `text`
pub fn extract(text: &str, mode: ExtractionMode) -> Extraction {
    let text = DefaultPreprocessor.process(text);
    if text.is_empty() {
        return Extraction::default();
    }

    let extraction = match mode {
        ExtractionMode::Sequential => Extraction::from(sequential::scan_lines(&text)),
        ExtractionMode::Associative => {
            let GlobalScan {
                mut definitions,
                examples,
            } = global::scan_text(&text);
            let phrases = associate::associate(&mut definitions, &examples);
            build_output(definitions, phrases)
        }
    };

    tracing::debug!("Extracted {} entries ({})", extraction.count, mode);
    extraction
}

/// Definitions first, then phrase entries, each in the order found
pub fn build_output(
    mut definitions: Vec<VocabularyCandidate>,
    phrases: Vec<VocabularyCandidate>,
) -> Extraction {
    definitions.extend(phrases);
    definitions.retain(|c| !c.word.is_empty());
    Extraction::from(definitions)
}
