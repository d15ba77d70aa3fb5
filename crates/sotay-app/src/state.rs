use std::time::Duration;

use sotay_config::Config;
use sotay_speech::GoogleSpeech;
use sotay_translator::GoogleTranslator;

use sotay_core::lessons::seed_if_empty;

use crate::store::{LessonFile, VocabularyFile};

pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }

    pub fn open_store(&self) -> anyhow::Result<VocabularyFile> {
        Ok(VocabularyFile::open(&self.config.storage.path)?)
    }

    /// Lesson store, seeded with the starter set on first use
    pub fn open_lessons(&self) -> anyhow::Result<LessonFile> {
        let mut lessons = LessonFile::open(&self.config.storage.lessons_path)?;
        seed_if_empty(&mut lessons)?;
        Ok(lessons)
    }

    pub fn translator(&self) -> anyhow::Result<Option<GoogleTranslator>> {
        if !self.config.translator.enabled {
            return Ok(None);
        }
        Ok(Some(GoogleTranslator::new(
            self.config.translator.api_url.clone(),
            self.timeout(),
        )?))
    }

    pub fn speech(&self) -> anyhow::Result<Option<GoogleSpeech>> {
        if !self.config.speech.enabled {
            return Ok(None);
        }
        Ok(Some(GoogleSpeech::new(
            self.config.speech.api_url.clone(),
            self.timeout(),
        )?))
    }
}
