use sotay_core::StoreError;
use sotay_core::lessons::{LessonStore, lessons_by_level, seed_if_empty};
use sotay_core::vocabulary::{VocabularyStore, add_word};
use sotay_types::{NewVocabulary, PracticeKind};

use crate::store::{LessonFile, VocabularyFile};

fn entry(word: &str, translation: &str) -> NewVocabulary {
    NewVocabulary {
        word: word.to_string(),
        translation: translation.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_missing_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = VocabularyFile::open(dir.path().join("vocab.json")).unwrap();
    assert!(store.all().is_empty());
}

#[test]
fn test_records_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("vocab.json");

    {
        let mut store = VocabularyFile::open(&path).unwrap();
        add_word(&mut store, entry("Proxy", "máy chủ trung gian")).unwrap();
        add_word(&mut store, entry("cache", "bộ nhớ đệm")).unwrap();
    }

    let store = VocabularyFile::open(&path).unwrap();
    let records = store.all();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].word, "proxy");
    assert!(store.find_by_word("CACHE").is_some());
}

#[test]
fn test_ids_continue_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.json");

    let first = {
        let mut store = VocabularyFile::open(&path).unwrap();
        add_word(&mut store, entry("proxy", "máy chủ")).unwrap()
    };

    let mut store = VocabularyFile::open(&path).unwrap();
    let second = add_word(&mut store, entry("cache", "bộ đệm")).unwrap();
    assert!(second.id > first.id);
}

#[test]
fn test_unflushed_changes_are_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.json");

    let mut store = VocabularyFile::open(&path).unwrap();
    store.insert(entry("proxy", "máy chủ")).unwrap();
    assert!(!path.exists());

    store.flush().unwrap();
    assert!(path.exists());
}

#[test]
fn test_review_and_delete_persist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.json");

    let mut store = VocabularyFile::open(&path).unwrap();
    let proxy = add_word(&mut store, entry("proxy", "máy chủ")).unwrap();
    let cache = add_word(&mut store, entry("cache", "bộ đệm")).unwrap();
    store.mark_reviewed(proxy.id).unwrap();
    store.delete(cache.id).unwrap();
    store.flush().unwrap();

    let store = VocabularyFile::open(&path).unwrap();
    assert_eq!(store.get(proxy.id).unwrap().review_count, 1);
    assert!(store.get(cache.id).is_none());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(matches!(
        VocabularyFile::open(&path),
        Err(StoreError::SerdeError(_))
    ));
}

#[test]
fn test_practice_counters_persist() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vocab.json");

    let id = {
        let mut store = VocabularyFile::open(&path).unwrap();
        let record = add_word(&mut store, entry("proxy", "máy chủ")).unwrap();
        store.record_practice(record.id, PracticeKind::Typing).unwrap();
        store.flush().unwrap();
        record.id
    };

    let store = VocabularyFile::open(&path).unwrap();
    let record = store.get(id).unwrap();
    assert_eq!(record.typing_correct, 1);
    assert_eq!(record.speech_correct, 0);
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"created_at\": \""));
}

#[test]
fn test_seeded_lessons_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lessons.json");

    {
        let mut lessons = LessonFile::open(&path).unwrap();
        assert_eq!(seed_if_empty(&mut lessons).unwrap(), 12);
    }

    let mut lessons = LessonFile::open(&path).unwrap();
    assert_eq!(seed_if_empty(&mut lessons).unwrap(), 0);
    assert_eq!(lessons.all().len(), 12);
    assert_eq!(lessons_by_level(&lessons, Some("A1")).len(), 4);
    assert_eq!(lessons.get(12).unwrap().category.as_deref(), Some("Career"));
}
