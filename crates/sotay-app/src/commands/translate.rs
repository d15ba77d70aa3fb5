use serde::Serialize;
use sotay_translator::Translator;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TranslateOutput {
    pub original: String,
    pub translation: String,
    pub from: String,
    pub to: String,
}

pub async fn handle_translate(
    state: &AppState,
    text: &str,
    from: Option<String>,
    to: Option<String>,
) -> anyhow::Result<TranslateOutput> {
    let text = text.trim();
    if text.is_empty() {
        anyhow::bail!("No text provided");
    }

    let Some(translator) = state.translator()? else {
        anyhow::bail!("Translation is disabled");
    };

    let from = from.unwrap_or_else(|| state.config.translator.from_lang.clone());
    let to = to.unwrap_or_else(|| state.config.translator.to_lang.clone());

    let translation = translator.translate(text, from, to).await?;
    tracing::info!(
        "Translated via {} ({} -> {})",
        translation.provider,
        translation.from,
        translation.to
    );

    Ok(TranslateOutput {
        original: translation.original,
        translation: translation.text,
        from: translation.from,
        to: translation.to,
    })
}
