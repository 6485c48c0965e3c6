//! Error types for notescan
//!
//! Tokenizing and resolving never fail; these errors come from reading input
//! and configuration at the edges.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notescan
#[derive(Debug, Error)]
pub enum NotescanError {
    #[error("Invalid event JSON: {0}")]
    InvalidEvent(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NotescanError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotescanError::Config(_)
            | NotescanError::ConfigNotFound(_)
            | NotescanError::TomlDeserialize(_) => 2,
            NotescanError::InvalidEvent(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotescanError::InvalidEvent(msg) => {
                format!(
                    "Invalid event JSON: {}\n\n\
                    Expected a NIP-01 event object, e.g.:\n\
                    {{\"kind\": 1, \"content\": \"#[0] gm\", \"tags\": [[\"p\", \"<hex pubkey>\"]]}}",
                    msg
                )
            }
            NotescanError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path in NOTESCAN_CONFIG\n\
                    • Unset NOTESCAN_CONFIG to use .notescan/config.toml or defaults",
                    path.display()
                )
            }
            NotescanError::Config(msg) => {
                if msg.starts_with("Invalid log level") {
                    format!(
                        "{}\n\n\
                        Valid log levels: trace, debug, info, warn, error",
                        msg
                    )
                } else if msg.starts_with("Invalid format") {
                    format!(
                        "{}\n\n\
                        Valid formats: text, json\n\
                        Example: notescan parse --format json note.txt",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotescanError
pub type Result<T> = std::result::Result<T, NotescanError>;
