//! Transaction support for the collection pass
//!
//! A collection pass mutates two files that must stay in sync: the
//! changelog document and the config holding the version counters. The
//! transaction backs both up before the first write and restores them if
//! the pass fails before `commit()`, including via `Drop` on an early
//! return. Consumed artifacts are only archived after commit.
//!
//! ```ignore
//! let mut transaction = Transaction::new();
//! transaction.backup(&config_path)?;
//! transaction.backup(&changelog_path)?;
//!
//! // write changelog, save config...
//!
//! transaction.commit();
//! // archive artifacts only after this point
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, file_read_failed};

/// Snapshot of one file before the pass mutated it
#[derive(Debug, Clone)]
struct FileBackup {
    path: PathBuf,
    /// `None` when the file did not exist before the pass
    content: Option<Vec<u8>>,
}

/// A transaction over the files one collection pass mutates
#[derive(Debug, Default)]
pub struct Transaction {
    backups: Vec<FileBackup>,
    committed: bool,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a file's current content (or its absence) so it can be
    /// restored on rollback. Call before the first write to that file.
    pub fn backup(&mut self, path: &Path) -> Result<()> {
        let content = if path.exists() {
            Some(
                fs::read(path).map_err(|e| file_read_failed(path.display(), e.to_string()))?,
            )
        } else {
            None
        };
        self.backups.push(FileBackup {
            path: path.to_path_buf(),
            content,
        });
        Ok(())
    }

    /// Commit the transaction, preventing rollback
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Restore every backed-up file to its pre-pass state
    pub fn rollback(&mut self) {
        if self.committed {
            return;
        }
        for backup in &self.backups {
            let restored = match &backup.content {
                Some(content) => fs::write(&backup.path, content),
                None if backup.path.exists() => fs::remove_file(&backup.path),
                None => Ok(()),
            };
            if let Err(e) = restored {
                eprintln!(
                    "Warning: failed to restore {}: {}",
                    backup.path.display(),
                    e
                );
            }
        }
        self.backups.clear();
    }
}

impl Drop for Transaction {
    fn drop(&mut self) {
        if !self.committed {
            self.rollback();
        }
    }
}
