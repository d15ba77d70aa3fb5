use std::env;

use serde::{Deserialize, Serialize};
use sotay_types::ExtractionMode;

use self::extractor::ExtractorConfig;
use self::speech::SpeechConfig;
use self::storage::StorageConfig;
use self::translator::TranslatorConfig;

pub mod extractor;
pub mod speech;
pub mod storage;
pub mod translator;

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extractor: ExtractorConfig,
    pub translator: TranslatorConfig,
    pub speech: SpeechConfig,
    pub storage: StorageConfig,

    /// Per-request timeout for outbound service calls
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extractor: ExtractorConfig::default(),
            translator: TranslatorConfig::default(),
            speech: SpeechConfig::default(),
            storage: StorageConfig::default(),
            timeout_seconds: default_timeout_seconds(),
            log_json: false,
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    pub fn with_env_overrides(mut self) -> Self {
        if let Some(mode) = env::var("SOTAY_EXTRACT_MODE")
            .ok()
            .and_then(|v| v.parse::<ExtractionMode>().ok())
        {
            self.extractor.mode = mode;
        }

        if let Ok(path) = env::var("SOTAY_STORE_PATH") {
            self.storage.path = path;
        }

        if let Ok(path) = env::var("SOTAY_LESSONS_PATH") {
            self.storage.lessons_path = path;
        }

        if let Some(timeout) = env::var("TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            self.timeout_seconds = timeout;
        }

        if let Ok(url) = env::var("TRANSLATE_API_URL") {
            self.translator.api_url = url;
        }

        if let Ok(url) = env::var("TTS_API_URL") {
            self.speech.api_url = url;
        }

        if let Ok(value) = env::var("SOTAY_LOG_JSON") {
            self.log_json = matches!(value.as_str(), "1" | "true" | "yes");
        }

        self
    }
}
