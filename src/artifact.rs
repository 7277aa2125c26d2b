//! Change kinds, artifact bodies, and the artifact writer
//!
//! An artifact is one pending change note: a small file whose body holds
//! exactly four lines in fixed order — timestamp, kind keyword, message,
//! author identity. Files are named `<stamp>-<KIND><ext>` so a plain
//! lexicographic sort lists them chronologically.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use chrono::Local;

use crate::config::AppConfig;
use crate::error::{GlogError, Result, file_write_failed, malformed_artifact};
use crate::workspace::Workspace;

/// Minimum accepted message length, in characters
pub const MIN_MESSAGE_LEN: usize = 10;

/// Lines in an artifact body
const BODY_LINES: usize = 4;

/// The fixed set of change kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Future,
    Added,
    Changed,
    Deleted,
    Removed,
    Fixed,
    Security,
}

impl ChangeKind {
    /// All kinds, in menu and render order
    pub const ALL: [ChangeKind; 7] = [
        ChangeKind::Future,
        ChangeKind::Added,
        ChangeKind::Changed,
        ChangeKind::Deleted,
        ChangeKind::Removed,
        ChangeKind::Fixed,
        ChangeKind::Security,
    ];

    /// Keyword written as artifact line 2 and shown as the section heading
    pub fn keyword(self) -> &'static str {
        match self {
            ChangeKind::Future => "FUTURE UPDATES",
            ChangeKind::Added => "ADDED",
            ChangeKind::Changed => "CHANGED",
            ChangeKind::Deleted => "DELETED",
            ChangeKind::Removed => "REMOVED",
            ChangeKind::Fixed => "FIXED",
            ChangeKind::Security => "SECURITY",
        }
    }

    /// Parse a kind keyword, case-insensitively. `FUTURE` is accepted as
    /// shorthand for `FUTURE UPDATES`. Anything else is a hard error; a
    /// misspelled kind must abort the pass, not be silently dropped.
    pub fn from_keyword(raw: &str) -> Result<Self> {
        let keyword = raw.trim().to_uppercase();
        match keyword.as_str() {
            "FUTURE UPDATES" | "FUTURE" => Ok(ChangeKind::Future),
            "ADDED" => Ok(ChangeKind::Added),
            "CHANGED" => Ok(ChangeKind::Changed),
            "DELETED" => Ok(ChangeKind::Deleted),
            "REMOVED" => Ok(ChangeKind::Removed),
            "FIXED" => Ok(ChangeKind::Fixed),
            "SECURITY" => Ok(ChangeKind::Security),
            _ => Err(GlogError::UnknownKind {
                kind: raw.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One parsed change note
#[derive(Debug, Clone)]
pub struct ChangeEntry {
    pub kind: ChangeKind,
    pub message: String,
    pub author: String,
    pub timestamp: String,
    /// Full body, kept for directive detection
    pub raw: String,
}

impl ChangeEntry {
    /// Parse a four-line artifact body. `name` identifies the source file
    /// in errors.
    pub fn parse(name: &str, body: &str) -> Result<Self> {
        let lines: Vec<&str> = body.trim_end().lines().collect();
        if lines.len() != BODY_LINES {
            return Err(malformed_artifact(
                name,
                format!("expected {} lines, found {}", BODY_LINES, lines.len()),
            ));
        }

        let message = lines[2].trim();
        if message.is_empty() {
            return Err(malformed_artifact(name, "empty message line"));
        }

        Ok(Self {
            kind: ChangeKind::from_keyword(lines[1])?,
            message: message.to_string(),
            author: lines[3].trim().to_string(),
            timestamp: lines[0].trim().to_string(),
            raw: body.to_string(),
        })
    }
}

/// Current local time as a filename-safe stamp, seconds precision
pub fn file_stamp() -> String {
    Local::now().format("%Y-%m-%d-%H-%M-%S").to_string()
}

/// Current local date for the changelog header
pub fn date_stamp() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Validate a change message before anything is written.
///
/// Rejects empty, too-short, and multiline messages. Embedded newlines
/// would corrupt the line-oriented body format, so they are refused here
/// rather than escaped.
pub fn validate_message(message: &str) -> Result<()> {
    if message.contains('\n') || message.contains('\r') {
        return Err(GlogError::MultilineMessage);
    }
    let message = message.trim();
    if message.is_empty() {
        return Err(GlogError::EmptyMessage);
    }
    let len = message.chars().count();
    if len < MIN_MESSAGE_LEN {
        return Err(GlogError::MessageTooShort {
            min: MIN_MESSAGE_LEN,
            len,
        });
    }
    Ok(())
}

/// Write one artifact file into the pending directory and return its path.
/// No version state is touched here; bumping happens at collection time.
pub fn write_artifact(
    workspace: &Workspace,
    config: &AppConfig,
    kind: ChangeKind,
    message: &str,
) -> Result<PathBuf> {
    validate_message(message)?;

    let stamp = file_stamp();
    let file_name = format!("{stamp}-{}{}", kind.keyword(), config.app.atf_pattern);
    let path = workspace.artifacts_dir.join(file_name);

    let body = format!(
        "{stamp}\n{}\n{}\n{}\n",
        kind.keyword(),
        message.trim(),
        config.author_line()
    );

    fs::write(&path, body).map_err(|e| file_write_failed(path.display(), e.to_string()))?;
    Ok(path)
}
