//! Record one change note as a pending artifact

use console::Style;
use inquire::{Select, Text};

use crate::artifact::{self, ChangeKind};
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::Result;
use crate::workspace::Workspace;

/// Run the artifact creation flow
pub fn run(cli: &Cli) -> Result<()> {
    let workspace = Workspace::open(cli.workspace.clone())?;
    let config_path = workspace.config_path();
    let mut config = AppConfig::load(&config_path)?;

    if config.ensure_identity()? {
        config.save(&config_path)?;
    }

    let kind = match &cli.kind {
        Some(raw) => ChangeKind::from_keyword(raw)?,
        None => match select_kind()? {
            Some(kind) => kind,
            None => {
                println!("Cancelled, nothing written.");
                return Ok(());
            }
        },
    };

    let message = match &cli.message {
        Some(text) => text.clone(),
        None => match prompt_message(kind)? {
            Some(text) => text,
            None => {
                println!("Cancelled, nothing written.");
                return Ok(());
            }
        },
    };

    let path = artifact::write_artifact(&workspace, &config, kind, &message)?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Changelog artifact created:"),
        path.display()
    );
    if cli.verbose {
        println!("  kind: {kind}");
        println!("  author: {}", config.author_line());
    }

    Ok(())
}

fn select_kind() -> Result<Option<ChangeKind>> {
    let selection = Select::new("Select the change kind", ChangeKind::ALL.to_vec())
        .with_help_message("  ↑↓ navigate  enter confirm  esc cancel")
        .prompt_skippable()?;
    Ok(selection)
}

fn prompt_message(kind: ChangeKind) -> Result<Option<String>> {
    let message = Text::new(&format!("{kind}>"))
        .with_help_message("include --r or --f to initiate semantic versioning")
        .prompt_skippable()?;

    match message {
        Some(text) => {
            artifact::validate_message(&text)?;
            Ok(Some(text))
        }
        None => Ok(None),
    }
}
