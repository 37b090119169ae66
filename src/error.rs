use rustyline::error::ReadlineError;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read dispatcher profile {}: {source}", path.display())]
    ReadProfile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid dispatcher profile {}: {source}", path.display())]
    ParseProfile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("console error: {0}")]
    Readline(#[from] ReadlineError),
}
