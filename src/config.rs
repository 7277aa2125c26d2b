//! Config store (`glog.toml`) data structures and lifecycle
//!
//! The config is an explicitly passed value with a load/save lifecycle on
//! the command path only; there is no process-wide state. A missing or
//! unparsable file is recovered by regenerating defaults, which discards
//! whatever the old file held, so that path warns the user.

use std::fs;
use std::path::Path;

use console::Style;
use inquire::Text;
use serde::{Deserialize, Serialize};

use crate::error::{Result, file_write_failed};
use crate::version::VersionState;

/// Default artifact file extension
pub const DEFAULT_ATF_PATTERN: &str = ".txt";

/// How a collection pass writes the changelog document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangelogPolicy {
    /// Insert the new release block above prior content, preserving history
    #[default]
    Prepend,
    /// Replace the document with the new release block
    Overwrite,
}

/// Application config (`glog.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSection,
    pub dev: DevSection,
}

/// `[app]` table: application identity and version counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_title: Option<String>,

    /// Stored as `[major, minor, patch]`
    #[serde(default)]
    pub version_number: VersionState,

    #[serde(default)]
    pub build_number: u32,

    /// Artifact file extension matched by the collector
    #[serde(default = "default_atf_pattern")]
    pub atf_pattern: String,

    /// Running counter numbering FUTURE UPDATES entries across passes
    #[serde(default)]
    pub future_count: u32,

    #[serde(default)]
    pub changelog_policy: ChangelogPolicy,
}

/// `[dev]` table: developer identity used for artifact author lines
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_email: Option<String>,
}

fn default_atf_pattern() -> String {
    DEFAULT_ATF_PATTERN.to_string()
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            app_title: None,
            version_number: VersionState::default(),
            build_number: 0,
            atf_pattern: default_atf_pattern(),
            future_count: 0,
            changelog_policy: ChangelogPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load the config, regenerating defaults when the file is missing or
    /// unparsable.
    ///
    /// Recovery is lossy: an unparsable file is replaced wholesale and any
    /// unrecognized keys it held are gone, so that path warns before
    /// rewriting.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => match toml::from_str::<Self>(&text) {
                Ok(config) => Ok(config),
                Err(e) => {
                    eprintln!(
                        "{} could not parse {}: {}",
                        Style::new().yellow().bold().apply_to("Warning:"),
                        path.display(),
                        e.message()
                    );
                    eprintln!(
                        "{} regenerating default config; previous contents are discarded",
                        Style::new().yellow().bold().apply_to("Warning:"),
                    );
                    Self::regenerate(path)
                }
            },
            Err(_) => Self::regenerate(path),
        }
    }

    fn regenerate(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Persist the config to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string(self)?;
        fs::write(path, text).map_err(|e| file_write_failed(path.display(), e.to_string()))
    }

    /// Prompt for any identity field that has never been set, in the
    /// first-run style. Returns `true` when a field was filled in, so the
    /// caller knows to save.
    pub fn ensure_identity(&mut self) -> Result<bool> {
        let mut changed = false;

        if self.app.app_title.is_none() {
            let title = Text::new("What is the name for this application?").prompt()?;
            self.app.app_title = Some(title);
            changed = true;
        }
        if self.dev.developer.is_none() {
            let developer = Text::new("Who is the developer?").prompt()?;
            self.dev.developer = Some(developer);
            changed = true;
        }
        if self.dev.dev_link.is_none() {
            let link = Text::new("What is the developer's link?").prompt()?;
            self.dev.dev_link = Some(link);
            changed = true;
        }
        if self.dev.dev_email.is_none() {
            let email = Text::new("What is the developer's email address?").prompt()?;
            self.dev.dev_email = Some(email);
            changed = true;
        }

        Ok(changed)
    }

    /// Display title for the changelog header
    pub fn title(&self) -> &str {
        self.app.app_title.as_deref().unwrap_or("Application")
    }

    /// `developer <email>` identity written as artifact line 4
    pub fn author_line(&self) -> String {
        format!(
            "{} <{}>",
            self.dev.developer.as_deref().unwrap_or("unknown"),
            self.dev.dev_email.as_deref().unwrap_or("")
        )
    }
}
