use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use sotay_speech::SpeechSynthesizer;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SpeakOutput {
    pub path: PathBuf,
    pub bytes: usize,
    pub lang: String,
}

pub async fn handle_speak(
    state: &AppState,
    text: &str,
    lang: Option<String>,
    out: &Path,
) -> anyhow::Result<SpeakOutput> {
    if text.trim().is_empty() {
        anyhow::bail!("No text provided");
    }

    let Some(speech) = state.speech()? else {
        anyhow::bail!("Speech synthesis is disabled");
    };

    let lang = lang.unwrap_or_else(|| state.config.speech.lang.clone());
    let audio = speech.synthesize(text, &lang).await?;

    tokio::fs::write(out, &audio)
        .await
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!("Wrote {} bytes of audio to {}", audio.len(), out.display());

    Ok(SpeakOutput {
        path: out.to_path_buf(),
        bytes: audio.len(),
        lang,
    })
}
