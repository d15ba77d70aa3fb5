use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_api_url() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Voice language
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            lang: default_lang(),
            api_url: default_api_url(),
        }
    }
}
