//! glog - personal changelog logger
//!
//! Records individual change notes as small artifact files during
//! development, then collects them into a single versioned changelog
//! document with automatic semantic-version bumping.

use clap::Parser;

mod artifact;
mod cli;
mod collector;
mod commands;
mod config;
mod error;
mod renderer;
mod template;
mod transaction;
mod version;
mod workspace;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = if cli.collect {
        commands::collect::run(&cli)
    } else {
        commands::create::run(&cli)
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
