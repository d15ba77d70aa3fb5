use serde::Serialize;
use sotay_core::vocabulary::{VocabularyStore, add_word};
use sotay_types::{NewVocabulary, VocabularyRecord};

use crate::cli::VocabCommand;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum VocabOutput {
    List(Vec<VocabularyRecord>),
    Record(VocabularyRecord),
    Message { message: String },
}

pub fn handle_vocab(state: &AppState, command: VocabCommand) -> anyhow::Result<VocabOutput> {
    let mut store = state.open_store()?;

    match command {
        VocabCommand::List => {
            let mut records = store.all();
            records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(VocabOutput::List(records))
        }
        VocabCommand::Add {
            word,
            translation,
            context,
            level,
        } => {
            let record = add_word(
                &mut store,
                NewVocabulary {
                    word,
                    translation,
                    context,
                    level,
                    ..Default::default()
                },
            )?;
            tracing::info!("Saved '{}' as #{}", record.word, record.id);
            Ok(VocabOutput::Record(record))
        }
        VocabCommand::Review { id } => {
            let record = store.mark_reviewed(id)?;
            store.flush()?;
            Ok(VocabOutput::Record(record))
        }
        VocabCommand::Practice { id, kind } => {
            let record = store.record_practice(id, kind)?;
            store.flush()?;
            Ok(VocabOutput::Record(record))
        }
        VocabCommand::Delete { id } => {
            store.delete(id)?;
            store.flush()?;
            tracing::info!("Deleted #{}", id);
            Ok(VocabOutput::Message {
                message: "Vocabulary deleted successfully".to_string(),
            })
        }
    }
}
