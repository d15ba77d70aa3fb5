use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context marker given to entries synthesized from unmatched examples
pub const EXAMPLE_SENTENCE_CONTEXT: &str = "Example sentence";

/// A vocabulary entry pulled out of pasted study notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyCandidate {
    pub word: String,
    pub phonetic: Option<String>,
    pub translation: String,
    pub context: Option<String>,
    #[serde(rename = "example_en")]
    pub example_source: Option<String>,
    #[serde(rename = "example_vi")]
    pub example_target: Option<String>,
}

impl VocabularyCandidate {
    /// Candidate built from a definition line, without an example yet
    pub fn definition(
        word: String,
        phonetic: String,
        translation: String,
        context: Option<String>,
    ) -> Self {
        Self {
            word,
            phonetic: Some(phonetic),
            translation,
            context,
            example_source: None,
            example_target: None,
        }
    }

    /// Phrase entry for an example sentence that matched no definition
    pub fn phrase(example: &ExamplePair) -> Self {
        Self {
            word: example.source.clone(),
            phonetic: None,
            translation: example.target.clone(),
            context: Some(EXAMPLE_SENTENCE_CONTEXT.to_string()),
            example_source: Some(example.source.clone()),
            example_target: Some(example.target.clone()),
        }
    }

    pub fn has_example(&self) -> bool {
        self.example_source.is_some()
    }

    /// Sets both example fields at once
    pub fn attach_example(&mut self, example: &ExamplePair) {
        self.example_source = Some(example.source.clone());
        self.example_target = Some(example.target.clone());
    }
}

/// Example sentence with its translation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExamplePair {
    pub source: String,
    pub target: String,
}

/// Result of one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    #[serde(rename = "vocabulary")]
    pub candidates: Vec<VocabularyCandidate>,
    pub count: usize,
}

impl From<Vec<VocabularyCandidate>> for Extraction {
    fn from(candidates: Vec<VocabularyCandidate>) -> Self {
        let count = candidates.len();
        Self { candidates, count }
    }
}

/// Which scanning strategy to run over the text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Line by line, examples attach to the definition above them
    Sequential,
    /// Whole-text scan, examples paired with definitions by word
    #[default]
    Associative,
}

impl ExtractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::Sequential => "sequential",
            ExtractionMode::Associative => "associative",
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" | "line" => Ok(ExtractionMode::Sequential),
            "associative" | "global" => Ok(ExtractionMode::Associative),
            other => Err(format!("unknown extraction mode: {other}")),
        }
    }
}

/// Stored vocabulary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    pub id: u64,
    pub word: String,
    pub translation: String,
    pub phonetic: Option<String>,
    pub context: Option<String>,
    pub example_en: Option<String>,
    pub example_vi: Option<String>,
    pub level: Option<String>,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub typing_correct: u32,
    #[serde(default)]
    pub speech_correct: u32,
    pub created_at: DateTime<Utc>,
    pub last_reviewed: Option<DateTime<Utc>>,
}

/// Practice drill a correct answer is counted against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeKind {
    Typing,
    Speech,
}

impl FromStr for PracticeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "typing" => Ok(PracticeKind::Typing),
            "speech" | "speaking" => Ok(PracticeKind::Speech),
            other => Err(format!("unknown practice kind: {other}")),
        }
    }
}

/// Fields for a record that has not been stored yet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewVocabulary {
    pub word: String,
    pub translation: String,
    pub phonetic: Option<String>,
    pub context: Option<String>,
    pub example_en: Option<String>,
    pub example_vi: Option<String>,
    pub level: Option<String>,
}

impl From<VocabularyCandidate> for NewVocabulary {
    fn from(candidate: VocabularyCandidate) -> Self {
        Self {
            word: candidate.word,
            translation: candidate.translation,
            phonetic: candidate.phonetic,
            context: candidate.context,
            example_en: candidate.example_source,
            example_vi: candidate.example_target,
            level: None,
        }
    }
}

/// Reading lesson grouped by CEFR level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// `A1`, `A2`, `B1`, ...
    pub level: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Lesson fields before an id and timestamp are assigned
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewLesson {
    pub title: String,
    pub content: String,
    pub level: String,
    #[serde(default)]
    pub category: Option<String>,
}
