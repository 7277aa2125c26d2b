//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// glog - personal changelog logger
///
/// Record one change note per invocation; collect them into a versioned
/// changelog with `-c`.
#[derive(Parser, Debug)]
#[command(
    name = "glog",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Personal changelog logger with semantic version bumping",
    long_about = "glog records individual change notes as small artifact files during \
                  development, then collects them into a single versioned changelog \
                  document. A --r or --f marker inside a message bumps the major or \
                  minor version at collection time; everything else bumps the patch.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  glog\n    \
                  glog --kind ADDED --message \"add login form\"\n    \
                  glog --kind FIXED --message \"fix crash on empty input --f\"\n    \
                  glog --collect\n\n\
                  \x1b[1m\x1b[32mArtifacts:\x1b[0m\n    \
                  One four-line file per change under ch-logs/, consumed by --collect."
)]
pub struct Cli {
    /// Collect pending artifacts into the changelog instead of recording
    /// a new change
    #[arg(long, short = 'c')]
    pub collect: bool,

    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w')]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Change kind, skipping the interactive menu (e.g. ADDED, FIXED,
    /// "FUTURE UPDATES")
    #[arg(long, value_name = "KIND", conflicts_with = "collect")]
    pub kind: Option<String>,

    /// Change message, skipping the interactive prompt (min 10 characters)
    #[arg(long, short = 'm', value_name = "TEXT", conflicts_with = "collect")]
    pub message: Option<String>,
}
