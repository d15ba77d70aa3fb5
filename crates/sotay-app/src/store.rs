use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use sotay_core::StoreError;
use sotay_core::lessons::{LessonStore, MemoryLessons};
use sotay_core::vocabulary::{MemoryStore, VocabularyStore};
use sotay_types::{Lesson, NewLesson, NewVocabulary, PracticeKind, VocabularyRecord};

/// Saved vocabulary backed by a JSON file
pub type VocabularyFile = JsonFileStore<MemoryStore>;

/// Reading lessons backed by a JSON file
pub type LessonFile = JsonFileStore<MemoryLessons>;

/// In-memory table kept in a single JSON file
pub struct JsonFileStore<T> {
    path: PathBuf,
    table: T,
    dirty: bool,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Open the store, starting empty when the file does not exist yet
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let table = if path.exists() {
            let data = fs::read_to_string(&path)?;
            tracing::debug!("Loading {}", path.display());
            serde_json::from_str(&data)?
        } else {
            tracing::info!("No data at {}, starting empty", path.display());
            T::default()
        };

        Ok(Self {
            path,
            table,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn touch<R>(&mut self, result: Result<R, StoreError>) -> Result<R, StoreError> {
        let value = result?;
        self.dirty = true;
        Ok(value)
    }

    fn save(&mut self) -> Result<(), StoreError> {
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write beside the target, then swap in
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.table)?)?;
        fs::rename(&tmp, &self.path)?;

        self.dirty = false;
        tracing::debug!("Saved {}", self.path.display());
        Ok(())
    }
}

impl VocabularyStore for VocabularyFile {
    fn all(&self) -> Vec<VocabularyRecord> {
        self.table.all()
    }

    fn get(&self, id: u64) -> Option<VocabularyRecord> {
        self.table.get(id)
    }

    fn find_by_word(&self, word: &str) -> Option<VocabularyRecord> {
        self.table.find_by_word(word)
    }

    fn insert(&mut self, entry: NewVocabulary) -> Result<VocabularyRecord, StoreError> {
        let result = self.table.insert(entry);
        self.touch(result)
    }

    fn mark_reviewed(&mut self, id: u64) -> Result<VocabularyRecord, StoreError> {
        let result = self.table.mark_reviewed(id);
        self.touch(result)
    }

    fn record_practice(
        &mut self,
        id: u64,
        kind: PracticeKind,
    ) -> Result<VocabularyRecord, StoreError> {
        let result = self.table.record_practice(id, kind);
        self.touch(result)
    }

    fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let result = self.table.delete(id);
        self.touch(result)
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        self.save()
    }
}

impl LessonStore for LessonFile {
    fn all(&self) -> Vec<Lesson> {
        self.table.all()
    }

    fn get(&self, id: u64) -> Option<Lesson> {
        self.table.get(id)
    }

    fn insert(&mut self, lesson: NewLesson) -> Result<Lesson, StoreError> {
        let result = self.table.insert(lesson);
        self.touch(result)
    }

    fn flush(&mut self) -> Result<(), StoreError> {
        self.save()
    }
}
