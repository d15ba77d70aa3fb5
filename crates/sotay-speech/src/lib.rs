mod google;

pub use google::{GoogleSpeech, MAX_CHUNK_CHARS, split_chunks};

/// Text-to-speech provider interface
#[async_trait::async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render text as MP3 audio
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, SpeechError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("No text provided")]
    EmptyText,

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}
