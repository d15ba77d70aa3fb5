#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("No text provided")]
    EmptyInput,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Vocabulary not found: {0}")]
    NotFound(u64),

    #[error("Lesson not found: {0}")]
    LessonNotFound(u64),

    #[error("Word already saved: {0}")]
    Duplicate(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
