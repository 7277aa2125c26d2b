//! Document renderer: expand templates against one pass's collected data
//!
//! The whole release block is assembled in memory first; the changelog
//! file is only touched after every substitution succeeded, so a bad
//! template cannot corrupt an already-written document.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use crate::artifact::ChangeKind;
use crate::config::ChangelogPolicy;
use crate::error::{Result, file_write_failed};
use crate::template::Template;
use crate::version::{FEATURE_TOKEN, RELEASE_TOKEN, VersionState};

/// Inputs for rendering one release block
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub title: &'a str,
    pub version: VersionState,
    pub build_number: u32,
    /// Header date, `YYYY-MM-DD`
    pub date: &'a str,
    pub contributors: &'a BTreeSet<String>,
    /// Kind → raw messages; futures excluded
    pub changes: &'a HashMap<ChangeKind, Vec<String>>,
    /// FUTURE UPDATES messages, collection order
    pub futures: &'a [String],
    /// First number assigned to this pass's future entries
    pub future_start: u32,
}

/// Strip directive tokens, trim, and capitalize a message for display
pub fn display_message(message: &str) -> String {
    let stripped = message
        .replace(RELEASE_TOKEN, "")
        .replace("--R", "")
        .replace(FEATURE_TOKEN, "")
        .replace("--F", "");
    capitalize(stripped.trim())
}

/// Capitalize the first letter, leaving the rest unchanged
fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn bullet_list(messages: &[String]) -> String {
    messages
        .iter()
        .map(|m| format!("   * {}", display_message(m)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render one complete release block: header, numbered FUTURE UPDATES
/// when present, then one section per non-empty kind in fixed order.
pub fn render_release_block(
    header: &Template,
    section: &Template,
    ctx: &RenderContext<'_>,
) -> Result<String> {
    let contributors = ctx
        .contributors
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");

    let mut header_vars: HashMap<&str, String> = HashMap::new();
    header_vars.insert("title", ctx.title.to_string());
    header_vars.insert("version_number", ctx.version.to_string());
    header_vars.insert("date", ctx.date.to_string());
    header_vars.insert("build_number", ctx.build_number.to_string());
    header_vars.insert("contributors", contributors);

    let mut out = header.render(&header_vars)?;

    if !ctx.futures.is_empty() {
        let numbered: Vec<String> = ctx
            .futures
            .iter()
            .enumerate()
            .map(|(i, m)| {
                format!(
                    "   * {} - {}",
                    ctx.future_start + i as u32,
                    display_message(m)
                )
            })
            .collect();

        let mut section_vars: HashMap<&str, String> = HashMap::new();
        section_vars.insert("artifact_type", ChangeKind::Future.keyword().to_string());
        section_vars.insert("artifact_list", numbered.join("\n"));
        out.push_str(&section.render(&section_vars)?);
    }

    for kind in ChangeKind::ALL {
        let Some(messages) = ctx.changes.get(&kind) else {
            continue;
        };
        if messages.is_empty() {
            continue;
        }
        let mut section_vars: HashMap<&str, String> = HashMap::new();
        section_vars.insert("artifact_type", kind.keyword().to_string());
        section_vars.insert("artifact_list", bullet_list(messages));
        out.push_str(&section.render(&section_vars)?);
    }

    Ok(out)
}

/// Write the rendered block to the changelog document under the
/// configured policy. Called only after rendering fully succeeded.
pub fn persist(path: &Path, block: &str, policy: ChangelogPolicy) -> Result<()> {
    let output = match policy {
        ChangelogPolicy::Overwrite => block.to_string(),
        ChangelogPolicy::Prepend => {
            let existing = fs::read_to_string(path).unwrap_or_default();
            format!("{block}{existing}")
        }
    };
    fs::write(path, output).map_err(|e| file_write_failed(path.display(), e.to_string()))
}
