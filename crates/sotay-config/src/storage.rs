use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "vocabulary.json".to_string()
}

fn default_lessons_path() -> String {
    "lessons.json".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON file holding saved vocabulary
    #[serde(default = "default_path")]
    pub path: String,
    /// JSON file holding reading lessons
    #[serde(default = "default_lessons_path")]
    pub lessons_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            lessons_path: default_lessons_path(),
        }
    }
}
