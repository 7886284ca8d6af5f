use std::path::PathBuf;

/// Failures that abort rendering of a single request
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error decoding request body: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("No messages found in request")]
    EmptyConversation,
    #[error("File already exists: {}", .0.display())]
    FileExists(PathBuf),
    #[error("Error creating file {}: {source}", .path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error writing transcript: {0}")]
    Write(#[from] std::io::Error),
    #[error("Error encoding messages to JSON: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl Error {
    /// Maps a JSON encoding failure, separating sink I/O failures from encoding ones
    pub fn from_encoding(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Write(err.into())
        } else {
            Error::Serialization(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
