//! Artifact collector: scan, parse, and classify pending change notes
//!
//! Scanning is a flat directory listing filtered by the configured
//! extension, sorted lexicographically — the timestamp-prefixed naming
//! makes that chronological order. Any malformed body or unknown kind
//! aborts the whole pass; skipping an entry would desynchronize the
//! version and build counters from the archived set.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::PathBuf;

use crate::artifact::{ChangeEntry, ChangeKind};
use crate::error::{Result, file_read_failed};
use crate::workspace::Workspace;

/// Everything one collection pass consumes
#[derive(Debug, Default)]
pub struct Collection {
    /// Consumed artifact files, oldest first
    pub files: Vec<PathBuf>,

    /// Parsed entries, same order as `files`
    pub entries: Vec<ChangeEntry>,

    /// Kind → raw messages, collection order within each kind; futures
    /// excluded
    pub changes: HashMap<ChangeKind, Vec<String>>,

    /// FUTURE UPDATES messages, collection order
    pub futures: Vec<String>,

    /// Distinct author identities, deduplicated and sorted
    pub contributors: BTreeSet<String>,
}

impl Collection {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Scan the pending directory and parse every artifact matching
/// `atf_pattern`. An empty result is not an error; the caller reports it
/// and exits cleanly.
pub fn collect(workspace: &Workspace, atf_pattern: &str) -> Result<Collection> {
    let mut files = Vec::new();
    for entry in fs::read_dir(&workspace.artifacts_dir)
        .map_err(|e| file_read_failed(workspace.artifacts_dir.display(), e.to_string()))?
    {
        let entry = entry?;
        let path = entry.path();
        let is_artifact = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(atf_pattern));
        if is_artifact {
            files.push(path);
        }
    }
    files.sort();

    let mut collection = Collection {
        files,
        ..Collection::default()
    };

    for path in &collection.files {
        let body =
            fs::read_to_string(path).map_err(|e| file_read_failed(path.display(), e.to_string()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("artifact")
            .to_string();
        let entry = ChangeEntry::parse(&name, &body)?;

        match entry.kind {
            ChangeKind::Future => collection.futures.push(entry.message.clone()),
            kind => collection
                .changes
                .entry(kind)
                .or_default()
                .push(entry.message.clone()),
        }
        collection.contributors.insert(entry.author.clone());
        collection.entries.push(entry);
    }

    Ok(collection)
}
