use chrono::Utc;
use serde::{Deserialize, Serialize};
use sotay_types::{NewVocabulary, PracticeKind, VocabularyCandidate, VocabularyRecord};

use crate::error::StoreError;

/// Persistence for saved vocabulary
pub trait VocabularyStore {
    /// All records, in insertion order
    fn all(&self) -> Vec<VocabularyRecord>;

    fn get(&self, id: u64) -> Option<VocabularyRecord>;

    /// Case-insensitive lookup by word
    fn find_by_word(&self, word: &str) -> Option<VocabularyRecord>;

    fn insert(&mut self, entry: NewVocabulary) -> Result<VocabularyRecord, StoreError>;

    /// Bump the review counter and stamp the review time
    fn mark_reviewed(&mut self, id: u64) -> Result<VocabularyRecord, StoreError>;

    /// Count one correct answer in a typing or speech drill
    fn record_practice(
        &mut self,
        id: u64,
        kind: PracticeKind,
    ) -> Result<VocabularyRecord, StoreError>;

    fn delete(&mut self, id: u64) -> Result<(), StoreError>;

    /// Write pending changes to the backing medium
    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Outcome of importing an extraction batch
#[derive(Debug, Default, Serialize)]
pub struct ImportSummary {
    pub saved: Vec<VocabularyRecord>,
    /// Words skipped because they were already stored
    pub skipped: Vec<String>,
}

/// Store extracted candidates, skipping words that are already saved
pub fn import_candidates<I>(
    store: &mut dyn VocabularyStore,
    candidates: I,
) -> Result<ImportSummary, StoreError>
where
    I: IntoIterator<Item = VocabularyCandidate>,
{
    let mut summary = ImportSummary::default();

    for candidate in candidates {
        let word = candidate.word.to_lowercase();
        if store.find_by_word(&word).is_some() {
            tracing::warn!("Skipping duplicate word: '{}'", word);
            summary.skipped.push(word);
            continue;
        }

        let mut entry = NewVocabulary::from(candidate);
        entry.word = word;
        summary.saved.push(store.insert(entry)?);
    }

    store.flush()?;
    tracing::info!(
        "Imported {} entries, skipped {}",
        summary.saved.len(),
        summary.skipped.len()
    );

    Ok(summary)
}

/// Save a single word by hand
pub fn add_word(
    store: &mut dyn VocabularyStore,
    mut entry: NewVocabulary,
) -> Result<VocabularyRecord, StoreError> {
    entry.word = entry.word.trim().to_lowercase();
    entry.translation = entry.translation.trim().to_string();

    if entry.word.is_empty() {
        return Err(StoreError::MissingField("word"));
    }
    if entry.translation.is_empty() {
        return Err(StoreError::MissingField("translation"));
    }
    if store.find_by_word(&entry.word).is_some() {
        return Err(StoreError::Duplicate(entry.word));
    }

    let record = store.insert(entry)?;
    store.flush()?;
    Ok(record)
}

/// In-memory record table, also the on-disk layout of file-backed stores
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    next_id: u64,
    records: Vec<VocabularyRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: u64) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl VocabularyStore for MemoryStore {
    fn all(&self) -> Vec<VocabularyRecord> {
        self.records.clone()
    }

    fn get(&self, id: u64) -> Option<VocabularyRecord> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    fn find_by_word(&self, word: &str) -> Option<VocabularyRecord> {
        let word = word.to_lowercase();
        self.records
            .iter()
            .find(|r| r.word.to_lowercase() == word)
            .cloned()
    }

    fn insert(&mut self, entry: NewVocabulary) -> Result<VocabularyRecord, StoreError> {
        self.next_id += 1;
        let record = VocabularyRecord {
            id: self.next_id,
            word: entry.word,
            translation: entry.translation,
            phonetic: entry.phonetic,
            context: entry.context,
            example_en: entry.example_en,
            example_vi: entry.example_vi,
            level: entry.level,
            review_count: 0,
            typing_correct: 0,
            speech_correct: 0,
            created_at: Utc::now(),
            last_reviewed: None,
        };
        self.records.push(record.clone());
        Ok(record)
    }

    fn mark_reviewed(&mut self, id: u64) -> Result<VocabularyRecord, StoreError> {
        let index = self.position(id)?;
        let record = &mut self.records[index];
        record.review_count += 1;
        record.last_reviewed = Some(Utc::now());
        Ok(record.clone())
    }

    fn record_practice(
        &mut self,
        id: u64,
        kind: PracticeKind,
    ) -> Result<VocabularyRecord, StoreError> {
        let index = self.position(id)?;
        let record = &mut self.records[index];
        match kind {
            PracticeKind::Typing => record.typing_correct += 1,
            PracticeKind::Speech => record.speech_correct += 1,
        }
        Ok(record.clone())
    }

    fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let index = self.position(id)?;
        self.records.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract;
    use sotay_types::ExtractionMode;

    fn entry(word: &str, translation: &str) -> NewVocabulary {
        NewVocabulary {
            word: word.to_string(),
            translation: translation.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_import_lowercases_and_skips_existing() {
        let mut store = MemoryStore::new();
        add_word(&mut store, entry("cache", "bộ nhớ đệm")).unwrap();

        let out = extract(
            "Cache /kæʃ/: Bộ nhớ đệm\nProxy /ˈprɒksi/: Máy chủ trung gian",
            ExtractionMode::Associative,
        );
        let summary = import_candidates(&mut store, out.candidates).unwrap();

        assert_eq!(summary.skipped, vec!["cache".to_string()]);
        assert_eq!(summary.saved.len(), 1);
        assert_eq!(summary.saved[0].word, "proxy");
        assert_eq!(summary.saved[0].phonetic.as_deref(), Some("ˈprɒksi"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_import_skips_duplicates_within_batch() {
        let mut store = MemoryStore::new();
        let out = extract(
            "Cache /kæʃ/: Bộ nhớ đệm\nCACHE /kæʃ/: Vùng đệm",
            ExtractionMode::Sequential,
        );
        let summary = import_candidates(&mut store, out.candidates).unwrap();
        assert_eq!(summary.saved.len(), 1);
        assert_eq!(summary.skipped.len(), 1);
    }

    #[test]
    fn test_import_keeps_examples() {
        let mut store = MemoryStore::new();
        let out = extract(
            "Cache /kæʃ/: Bộ nhớ đệm\n\"Clear the cache.\" (Xoá bộ nhớ đệm.)",
            ExtractionMode::Associative,
        );
        let summary = import_candidates(&mut store, out.candidates).unwrap();
        assert_eq!(summary.saved[0].example_en.as_deref(), Some("Clear the cache."));
        assert_eq!(summary.saved[0].example_vi.as_deref(), Some("Xoá bộ nhớ đệm."));
    }

    #[test]
    fn test_add_word_validation() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            add_word(&mut store, entry("  ", "x")),
            Err(StoreError::MissingField("word"))
        ));
        assert!(matches!(
            add_word(&mut store, entry("proxy", "")),
            Err(StoreError::MissingField("translation"))
        ));
        add_word(&mut store, entry("Proxy", "máy chủ")).unwrap();
        assert!(matches!(
            add_word(&mut store, entry("PROXY", "máy chủ")),
            Err(StoreError::Duplicate(_))
        ));
    }

    #[test]
    fn test_review_and_delete() {
        let mut store = MemoryStore::new();
        let record = add_word(&mut store, entry("proxy", "máy chủ")).unwrap();

        let reviewed = store.mark_reviewed(record.id).unwrap();
        assert_eq!(reviewed.review_count, 1);
        let stamped = reviewed.last_reviewed.expect("review time set");
        assert!(stamped >= record.created_at);

        store.delete(record.id).unwrap();
        assert!(store.get(record.id).is_none());
        assert!(matches!(store.delete(record.id), Err(StoreError::NotFound(_))));
        assert!(matches!(store.mark_reviewed(99), Err(StoreError::NotFound(99))));
    }

    #[test]
    fn test_practice_counters() {
        let mut store = MemoryStore::new();
        let record = add_word(&mut store, entry("cache", "bộ nhớ đệm")).unwrap();
        assert_eq!((record.typing_correct, record.speech_correct), (0, 0));

        store.record_practice(record.id, PracticeKind::Typing).unwrap();
        store.record_practice(record.id, PracticeKind::Typing).unwrap();
        let updated = store.record_practice(record.id, PracticeKind::Speech).unwrap();
        assert_eq!(updated.typing_correct, 2);
        assert_eq!(updated.speech_correct, 1);
        assert_eq!(updated.review_count, 0);
        assert!(matches!(
            store.record_practice(42, PracticeKind::Speech),
            Err(StoreError::NotFound(42))
        ));
    }
}
