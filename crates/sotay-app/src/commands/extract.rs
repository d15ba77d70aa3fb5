use serde::Serialize;
use sotay_core::ExtractRequest;
use sotay_core::vocabulary::{ImportSummary, import_candidates};
use sotay_types::{Extraction, ExtractionMode};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ExtractOutput {
    #[serde(flatten)]
    pub extraction: Extraction,
    pub mode: ExtractionMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<ImportSummary>,
}

pub fn handle_extract(
    state: &AppState,
    text: String,
    mode: Option<ExtractionMode>,
    save: bool,
) -> anyhow::Result<ExtractOutput> {
    let mode = mode.unwrap_or(state.config.extractor.mode);
    let extraction = ExtractRequest::new(text, mode).run()?;
    tracing::info!("Extracted {} entries using {} mode", extraction.count, mode);

    let import = if save {
        let mut store = state.open_store()?;
        let summary = import_candidates(&mut store, extraction.candidates.clone())?;
        tracing::info!(
            "Saved {} new words to {}",
            summary.saved.len(),
            store.path().display()
        );
        Some(summary)
    } else {
        None
    };

    Ok(ExtractOutput {
        extraction,
        mode,
        import,
    })
}
