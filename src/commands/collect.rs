//! Collection pass: read pending artifacts, bump the version, render the
//! changelog, persist, archive
//!
//! Order matters here. The release block is rendered fully in memory
//! before anything is written; the changelog and config writes run under
//! a transaction; consumed artifacts are deleted only after commit, so a
//! failed pass never loses a change note.

use std::fs;

use console::Style;

use crate::artifact;
use crate::cli::Cli;
use crate::collector;
use crate::config::AppConfig;
use crate::error::Result;
use crate::renderer::{self, RenderContext};
use crate::template::{DEFAULT_HEADER_TEMPLATE, DEFAULT_SECTION_TEMPLATE, Template};
use crate::transaction::Transaction;
use crate::version;
use crate::workspace::Workspace;

/// Run one collection pass
pub fn run(cli: &Cli) -> Result<()> {
    let workspace = Workspace::open(cli.workspace.clone())?;
    let config_path = workspace.config_path();
    let mut config = AppConfig::load(&config_path)?;

    if config.ensure_identity()? {
        config.save(&config_path)?;
    }

    let collection = collector::collect(&workspace, &config.app.atf_pattern)?;
    if collection.is_empty() {
        println!("No changelog artifacts found. Exiting without changes.");
        return Ok(());
    }
    if cli.verbose {
        println!("Collected {} artifact(s).", collection.files.len());
    }

    // One bump per entry, oldest first
    let mut new_version = config.app.version_number;
    let mut build_number = config.app.build_number;
    for entry in &collection.entries {
        (new_version, build_number) = version::bump(new_version, build_number, &entry.raw);
    }

    let header = Template::load_or_init(&workspace.header_template_path(), DEFAULT_HEADER_TEMPLATE)?;
    let section =
        Template::load_or_init(&workspace.section_template_path(), DEFAULT_SECTION_TEMPLATE)?;

    let date = artifact::date_stamp();
    let block = renderer::render_release_block(
        &header,
        &section,
        &RenderContext {
            title: config.title(),
            version: new_version,
            build_number,
            date: &date,
            contributors: &collection.contributors,
            changes: &collection.changes,
            futures: &collection.futures,
            future_start: config.app.future_count + 1,
        },
    )?;

    // Rendering succeeded; stage the writes so a failure here restores
    // both files and leaves the artifacts unconsumed
    let changelog_path = workspace.changelog_path();
    let mut transaction = Transaction::new();
    transaction.backup(&config_path)?;
    transaction.backup(&changelog_path)?;

    renderer::persist(&changelog_path, &block, config.app.changelog_policy)?;

    config.app.version_number = new_version;
    config.app.build_number = build_number;
    config.app.future_count += collection.futures.len() as u32;
    config.save(&config_path)?;

    transaction.commit();

    // Archive is the last step; a failure past commit is only warned about
    for path in &collection.files {
        match fs::remove_file(path) {
            Ok(()) => {
                if cli.verbose {
                    println!("Archived artifact removed: {}", path.display());
                }
            }
            Err(e) => eprintln!(
                "{} failed to remove {}: {} (it will be collected again)",
                Style::new().yellow().bold().apply_to("Warning:"),
                path.display(),
                e
            ),
        }
    }

    println!(
        "{} {} entries -> version {} (build {})",
        Style::new().green().bold().apply_to("Changelog updated:"),
        collection.entries.len(),
        new_version,
        build_number
    );
    println!("  {}", changelog_path.display());

    Ok(())
}
