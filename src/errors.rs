use std::{io, path::PathBuf};

use thiserror::Error;

/// Startup configuration faults. All of these are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BOT_TOKEN is not set")]
    MissingBotToken,
    #[error("failed to create store directory {path}: {source}")]
    CreateStoreDir { path: PathBuf, source: io::Error },
}

/// Question store faults. Fatal during startup (connect/schema/seed);
/// a failed fetch while handling /quiz is reported to the chat instead.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("failed to encode question options: {0}")]
    EncodeOptions(serde_json::Error),
    #[error("question {id} carries malformed options: {source}")]
    MalformedOptions { id: i64, source: serde_json::Error },
    #[error("question {id} has out-of-range correct index {index}")]
    CorrectIndexOutOfRange { id: i64, index: i64 },
}
