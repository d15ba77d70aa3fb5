use chrono::Utc;
use serde::{Deserialize, Serialize};
use sotay_types::{Lesson, NewLesson};

use crate::error::StoreError;

/// Persistence for reading lessons
pub trait LessonStore {
    /// All lessons, in insertion order
    fn all(&self) -> Vec<Lesson>;

    fn get(&self, id: u64) -> Option<Lesson>;

    fn insert(&mut self, lesson: NewLesson) -> Result<Lesson, StoreError>;

    /// Write pending changes to the backing medium
    fn flush(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Starter lessons shipped with the binary, A1 through B1
pub fn starter_lessons() -> Result<Vec<NewLesson>, StoreError> {
    let json = include_str!("../data/lessons.json");
    Ok(serde_json::from_str(json)?)
}

/// Fill an empty store with the starter lessons.
///
/// Returns how many lessons were added; a store that already holds lessons
/// is left untouched.
pub fn seed_if_empty(store: &mut dyn LessonStore) -> Result<usize, StoreError> {
    if !store.all().is_empty() {
        return Ok(0);
    }

    let lessons = starter_lessons()?;
    let count = lessons.len();
    for lesson in lessons {
        store.insert(lesson)?;
    }
    store.flush()?;

    tracing::info!("Seeded {} starter lessons", count);
    Ok(count)
}

/// Lessons at `level` (case-insensitive), or every lesson when no level is given
pub fn lessons_by_level(store: &dyn LessonStore, level: Option<&str>) -> Vec<Lesson> {
    let level = level
        .map(|l| l.trim().to_uppercase())
        .filter(|l| !l.is_empty());

    store
        .all()
        .into_iter()
        .filter(|lesson| level.as_ref().is_none_or(|l| lesson.level == *l))
        .collect()
}

/// Look a lesson up by id
pub fn lesson(store: &dyn LessonStore, id: u64) -> Result<Lesson, StoreError> {
    store.get(id).ok_or(StoreError::LessonNotFound(id))
}

/// In-memory lesson table, also the on-disk layout of file-backed stores
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MemoryLessons {
    next_id: u64,
    lessons: Vec<Lesson>,
}

impl MemoryLessons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl LessonStore for MemoryLessons {
    fn all(&self) -> Vec<Lesson> {
        self.lessons.clone()
    }

    fn get(&self, id: u64) -> Option<Lesson> {
        self.lessons.iter().find(|l| l.id == id).cloned()
    }

    fn insert(&mut self, lesson: NewLesson) -> Result<Lesson, StoreError> {
        self.next_id += 1;
        let lesson = Lesson {
            id: self.next_id,
            title: lesson.title,
            content: lesson.content,
            level: lesson.level.trim().to_uppercase(),
            category: lesson.category,
            created_at: Utc::now(),
        };
        self.lessons.push(lesson.clone());
        Ok(lesson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_set_covers_three_levels() {
        let lessons = starter_lessons().unwrap();
        assert_eq!(lessons.len(), 12);
        for level in ["A1", "A2", "B1"] {
            assert_eq!(lessons.iter().filter(|l| l.level == level).count(), 4);
        }
        assert_eq!(lessons[0].title, "Greetings - Chào hỏi");
        assert_eq!(lessons[0].category.as_deref(), Some("Daily Communication"));
        assert!(lessons.iter().all(|l| !l.content.trim().is_empty()));
    }

    #[test]
    fn test_seed_only_when_empty() {
        let mut store = MemoryLessons::new();
        assert_eq!(seed_if_empty(&mut store).unwrap(), 12);
        assert_eq!(seed_if_empty(&mut store).unwrap(), 0);
        assert_eq!(store.len(), 12);
    }

    #[test]
    fn test_existing_lessons_block_seeding() {
        let mut store = MemoryLessons::new();
        store
            .insert(NewLesson {
                title: "Weather".to_string(),
                content: "It is sunny today.".to_string(),
                level: "a1".to_string(),
                category: None,
            })
            .unwrap();

        assert_eq!(seed_if_empty(&mut store).unwrap(), 0);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].level, "A1");
    }

    #[test]
    fn test_level_filter_is_case_insensitive() {
        let mut store = MemoryLessons::new();
        seed_if_empty(&mut store).unwrap();

        let b1 = lessons_by_level(&store, Some("b1"));
        assert_eq!(b1.len(), 4);
        assert!(b1.iter().all(|l| l.level == "B1"));
        assert_eq!(b1[0].title, "Environmental Issues - Vấn đề môi trường");

        assert_eq!(lessons_by_level(&store, None).len(), 12);
        assert_eq!(lessons_by_level(&store, Some("  ")).len(), 12);
        assert!(lessons_by_level(&store, Some("C2")).is_empty());
    }

    #[test]
    fn test_lesson_lookup() {
        let mut store = MemoryLessons::new();
        seed_if_empty(&mut store).unwrap();

        let first = lesson(&store, 1).unwrap();
        assert_eq!(first.title, "Greetings - Chào hỏi");
        assert!(matches!(lesson(&store, 99), Err(StoreError::LessonNotFound(99))));
    }
}
