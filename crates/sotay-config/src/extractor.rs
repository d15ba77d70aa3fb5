use serde::{Deserialize, Serialize};
use sotay_types::ExtractionMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Strategy used when the caller does not pick one
    pub mode: ExtractionMode,
}
