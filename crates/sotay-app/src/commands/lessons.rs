use serde::Serialize;
use sotay_core::lessons::{lesson, lessons_by_level};
use sotay_types::Lesson;

use crate::cli::LessonsCommand;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LessonsOutput {
    List(Vec<Lesson>),
    Lesson(Lesson),
}

pub fn handle_lessons(state: &AppState, command: LessonsCommand) -> anyhow::Result<LessonsOutput> {
    let store = state.open_lessons()?;

    match command {
        LessonsCommand::List { level } => {
            let lessons = lessons_by_level(&store, level.as_deref());
            tracing::debug!("{} lessons for level {:?}", lessons.len(), level);
            Ok(LessonsOutput::List(lessons))
        }
        LessonsCommand::Show { id } => Ok(LessonsOutput::Lesson(lesson(&store, id)?)),
    }
}
