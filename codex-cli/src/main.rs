//! Command-line interface for codex
//! This binary converts markdown vault notes (creature statblocks and lore) into compendium documents.
//!
//! Usage:
//!   codex `<path>` [--to `<format>`] [--out `<dir>`] [--config `<file>`]   - Convert a note or a vault
//!   codex --list-formats                                                 - List all available formats
//!
//! Documents go to stdout (or `--out`), logs go to stderr. Set `RUST_LOG` to change verbosity.
//! Config keys can also be set as `CODEX_<SECTION>__<KEY>` environment variables.

mod convert;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use codex_babel::FormatRegistry;
use codex_config::{CodexConfig, Loader};
use convert::ConvertOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = Command::new("codex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert markdown vault notes into compendium documents")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("A markdown note or a vault directory")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .help("Output format (default from config: foundry)"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Write one <slug>.json per document into this directory instead of stdout"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("include-unpublished")
                .long("include-unpublished")
                .help("Also convert notes not marked as published")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    match handle_convert_command(&matches) {
        Ok(0) => {}
        Ok(failed) => {
            eprintln!("{} file(s) failed to convert", failed);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns the number of notes that failed to convert.
fn handle_convert_command(matches: &ArgMatches) -> Result<usize> {
    let config = load_config(matches)?;
    let out = matches.get_one::<String>("out").map(PathBuf::from);
    let options = ConvertOptions::from_config(&config, out);

    let path = matches
        .get_one::<String>("path")
        .context("a path is required unless listing formats")?;
    let summary = convert::run(Path::new(path), &options)?;
    Ok(summary.failed)
}

fn load_config(matches: &ArgMatches) -> Result<CodexConfig> {
    let mut loader = Loader::new();
    if let Some(file) = matches.get_one::<String>("config") {
        loader = loader.with_file(file);
    }
    loader = loader.with_env();
    if let Some(format) = matches.get_one::<String>("to") {
        loader = loader.set_override("convert.format", format.as_str())?;
    }
    if matches.get_flag("include-unpublished") {
        loader = loader.set_override("convert.include_unpublished", true)?;
    }
    loader.build().context("Failed to load configuration")
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
