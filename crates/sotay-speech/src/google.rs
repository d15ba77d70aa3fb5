use std::time::Duration;

use async_trait::async_trait;

use crate::{SpeechError, SpeechSynthesizer};

/// Longest text the TTS endpoint accepts in one request
pub const MAX_CHUNK_CHARS: usize = 200;

/// Client for Google's public TTS endpoint
#[derive(Clone)]
pub struct GoogleSpeech {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleSpeech {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, SpeechError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }

    async fn fetch_chunk(
        &self,
        chunk: &str,
        lang: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SpeechError> {
        let idx = index.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();
        let params = [
            ("ie", "UTF-8"),
            ("client", "tw-ob"),
            ("tl", lang),
            ("q", chunk),
            ("idx", idx.as_str()),
            ("total", total.as_str()),
            ("textlen", textlen.as_str()),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if !response.status().is_success() {
            return Err(SpeechError::ApiError(format!("HTTP {}", response.status())));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Split text on whitespace into chunks of at most `max_chars` characters.
///
/// A single word longer than the limit is cut at character boundaries.
pub fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            chunks.push(word.into_iter().collect());
            word = rest;
        }

        let separator = usize::from(!current.is_empty());
        if current_len + separator + word.len() > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeech {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, SpeechError> {
        let chunks = split_chunks(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        tracing::debug!("Synthesizing {} chunk(s) in '{}'", chunks.len(), lang);

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            // MP3 frames concatenate cleanly
            audio.extend(self.fetch_chunk(chunk, lang, index, chunks.len()).await?);
        }

        Ok(audio)
    }
}
