//! Workspace layout for glogger
//!
//! Everything lives under one root directory (the current directory by
//! default):
//!
//! ```text
//! <root>/
//! ├── glog.toml              # App identity and version counters
//! └── ch-logs/
//!     ├── <stamp>-<KIND>.txt # Pending artifacts, one per change
//!     ├── template_header.md # Release block header template
//!     ├── template_section.md# Per-kind section template
//!     └── changelog.md       # Rendered changelog document
//! ```

use std::fs;
use std::path::PathBuf;

use crate::error::{Result, file_write_failed};

/// Pending artifacts directory name
pub const ARTIFACTS_DIR: &str = "ch-logs";

/// Config filename
pub const CONFIG_FILE: &str = "glog.toml";

/// Rendered changelog filename
pub const CHANGELOG_FILE: &str = "changelog.md";

/// Header template filename
pub const HEADER_TEMPLATE_FILE: &str = "template_header.md";

/// Section template filename
pub const SECTION_TEMPLATE_FILE: &str = "template_section.md";

/// Represents a glogger workspace
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Root directory of the workspace
    pub root: PathBuf,

    /// Pending artifacts directory (`<root>/ch-logs`)
    pub artifacts_dir: PathBuf,
}

impl Workspace {
    /// Open a workspace rooted at `root` (current directory when `None`),
    /// creating the artifacts directory if it does not exist yet.
    pub fn open(root: Option<PathBuf>) -> Result<Self> {
        let root = match root {
            Some(path) => path,
            None => std::env::current_dir()?,
        };
        let artifacts_dir = root.join(ARTIFACTS_DIR);

        if !artifacts_dir.exists() {
            fs::create_dir_all(&artifacts_dir)
                .map_err(|e| file_write_failed(artifacts_dir.display(), e.to_string()))?;
        }

        Ok(Self {
            root,
            artifacts_dir,
        })
    }

    /// Path to `glog.toml`
    pub fn config_path(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    /// Path to the rendered changelog document
    pub fn changelog_path(&self) -> PathBuf {
        self.artifacts_dir.join(CHANGELOG_FILE)
    }

    /// Path to the release block header template
    pub fn header_template_path(&self) -> PathBuf {
        self.artifacts_dir.join(HEADER_TEMPLATE_FILE)
    }

    /// Path to the per-kind section template
    pub fn section_template_path(&self) -> PathBuf {
        self.artifacts_dir.join(SECTION_TEMPLATE_FILE)
    }
}
