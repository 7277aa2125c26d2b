//! Error types and handling for glogger
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for glogger operations
#[derive(Error, Diagnostic, Debug)]
pub enum GlogError {
    // Artifact creation errors
    #[error("Unknown change kind: {kind}")]
    #[diagnostic(
        code(glog::artifact::unknown_kind),
        help("Valid kinds: FUTURE UPDATES, ADDED, CHANGED, DELETED, REMOVED, FIXED, SECURITY")
    )]
    UnknownKind { kind: String },

    #[error("Change message is empty")]
    #[diagnostic(code(glog::artifact::empty_message))]
    EmptyMessage,

    #[error("Change message must be at least {min} characters, got {len}")]
    #[diagnostic(
        code(glog::artifact::message_too_short),
        help("Describe the change in a full sentence")
    )]
    MessageTooShort { min: usize, len: usize },

    #[error("Change message must be a single line")]
    #[diagnostic(
        code(glog::artifact::multiline_message),
        help("Artifact bodies are line-oriented; keep the message on one line")
    )]
    MultilineMessage,

    // Collection errors
    #[error("Malformed artifact {path}: {reason}")]
    #[diagnostic(
        code(glog::collect::malformed_artifact),
        help("An artifact holds exactly four lines: timestamp, kind, message, author")
    )]
    MalformedArtifact { path: String, reason: String },

    // Template errors
    #[error("Unknown template variable '{name}' in {path}")]
    #[diagnostic(
        code(glog::template::unknown_variable),
        help("Remove the placeholder from the template or use one of the documented variables")
    )]
    UnknownTemplateVariable { name: String, path: String },

    // Configuration errors
    #[error("Failed to parse config {path}: {reason}")]
    #[diagnostic(code(glog::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to serialize config: {reason}")]
    #[diagnostic(code(glog::config::serialize_failed))]
    ConfigSerializeFailed { reason: String },

    // File system errors
    #[error("Failed to read file {path}: {reason}")]
    #[diagnostic(code(glog::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file {path}: {reason}")]
    #[diagnostic(code(glog::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(glog::fs::io))]
    IoError { message: String },

    // Prompt errors
    #[error("Prompt cancelled")]
    #[diagnostic(code(glog::prompt::cancelled))]
    PromptCancelled,

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(glog::prompt::failed))]
    PromptFailed { message: String },
}

/// Creates a file read error
pub fn file_read_failed(path: impl std::fmt::Display, reason: impl Into<String>) -> GlogError {
    GlogError::FileReadFailed {
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn file_write_failed(path: impl std::fmt::Display, reason: impl Into<String>) -> GlogError {
    GlogError::FileWriteFailed {
        path: path.to_string(),
        reason: reason.into(),
    }
}

/// Creates a malformed artifact error
pub fn malformed_artifact(path: impl std::fmt::Display, reason: impl Into<String>) -> GlogError {
    GlogError::MalformedArtifact {
        path: path.to_string(),
        reason: reason.into(),
    }
}

impl From<std::io::Error> for GlogError {
    fn from(err: std::io::Error) -> Self {
        GlogError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GlogError {
    fn from(err: toml::de::Error) -> Self {
        GlogError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for GlogError {
    fn from(err: toml::ser::Error) -> Self {
        GlogError::ConfigSerializeFailed {
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for GlogError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => GlogError::PromptCancelled,
            other => GlogError::PromptFailed {
                message: other.to_string(),
            },
        }
    }
}

pub type Result<T> = miette::Result<T, GlogError>;
