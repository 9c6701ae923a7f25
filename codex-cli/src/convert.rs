//! Vault conversion
//!
//! Walks the input path, loads every markdown note through the standard pipeline and hands
//! the entry to the selected format. A note that fails to load is logged and counted, and the
//! run goes on with the next one.
//!
//! With `--out` every document lands in `<slug>.json`. When two notes share a slug the later
//! one is written to `<slug>-<id>.json` so no document overwrites another.

use anyhow::{bail, Context, Result};
use codex_babel::{BuildContext, FormatError, FormatRegistry, IdGenerator};
use codex_config::CodexConfig;
use codex_parser::codex::loader::DocumentLoader;
use codex_parser::codex::parsing::slugify;
use ignore::WalkBuilder;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Settings for one conversion run, resolved from the layered config and flags.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub format: String,
    pub pretty: bool,
    pub include_unpublished: bool,
    pub out: Option<PathBuf>,
    pub ctx: BuildContext,
}

impl ConvertOptions {
    pub fn from_config(config: &CodexConfig, out: Option<PathBuf>) -> Self {
        ConvertOptions {
            format: config.convert.format.clone(),
            pretty: config.convert.pretty,
            include_unpublished: config.convert.include_unpublished,
            out,
            ctx: BuildContext::new(
                IdGenerator::new(config.ids.namespace.clone(), config.ids.length),
                config.convert.enrich,
            ),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Markdown files under `path`, sorted. A file path is returned as is.
pub fn collect_sources(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("'{}' is neither a file nor a directory", path.display());
    }

    let mut sources = Vec::new();
    for result in WalkBuilder::new(path).build() {
        let entry = result.with_context(|| format!("Failed to walk '{}'", path.display()))?;
        let is_markdown = entry.file_type().is_some_and(|t| t.is_file())
            && entry.path().extension().is_some_and(|ext| ext == "md");
        if is_markdown {
            sources.push(entry.into_path());
        }
    }
    sources.sort();
    Ok(sources)
}

pub fn run(path: &Path, options: &ConvertOptions) -> Result<Summary> {
    let registry = FormatRegistry::with_defaults();
    if !registry.has(&options.format) {
        bail!(
            "Format '{}' not found. Available formats: {}",
            options.format,
            registry.list_formats().join(", ")
        );
    }
    if let Some(out) = &options.out {
        fs::create_dir_all(out)
            .with_context(|| format!("Failed to create output directory '{}'", out.display()))?;
    }

    let sources = collect_sources(path)?;
    tracing::info!(files = sources.len(), format = %options.format, "converting");

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let mut summary = Summary::default();
    let mut targets = HashSet::new();
    for source in &sources {
        let entry = match DocumentLoader::from_path(source).and_then(|loader| loader.entry()) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::error!(file = %source.display(), "{}", e);
                summary.failed += 1;
                continue;
            }
        };
        if !entry.published() && !options.include_unpublished {
            tracing::debug!(file = %source.display(), "skipping unpublished note");
            summary.skipped += 1;
            continue;
        }

        let document = match registry.serialize(&entry, &options.format, &options.ctx) {
            Ok(document) => document,
            Err(FormatError::NotSupported(reason)) => {
                tracing::info!(file = %source.display(), "skipped: {}", reason);
                summary.skipped += 1;
                continue;
            }
            Err(e) => {
                tracing::error!(file = %source.display(), "{}", e);
                summary.failed += 1;
                continue;
            }
        };

        let text = render(&document, options.pretty)?;
        match &options.out {
            Some(out) => {
                let target = output_target(out, entry.name(), &document, &mut targets);
                fs::write(&target, format!("{}\n", text))
                    .with_context(|| format!("Failed to write '{}'", target.display()))?;
                tracing::debug!(file = %target.display(), "wrote document");
            }
            None => {
                if options.pretty && summary.written > 0 {
                    writeln!(stdout)?;
                }
                writeln!(stdout, "{}", text)?;
            }
        }
        summary.written += 1;
    }

    tracing::info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "done"
    );
    Ok(summary)
}

fn render(document: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(document)?
    } else {
        serde_json::to_string(document)?
    };
    Ok(text)
}

/// A path under `out` not yet claimed in this run.
fn output_target(
    out: &Path,
    name: &str,
    document: &Value,
    targets: &mut HashSet<PathBuf>,
) -> PathBuf {
    let stem = output_stem(name);
    let mut target = out.join(format!("{}.json", stem));
    if targets.contains(&target) {
        let id = document["_id"].as_str().unwrap_or_default();
        let mut suffix = if id.is_empty() {
            targets.len().to_string()
        } else {
            id.to_string()
        };
        while targets.contains(&out.join(format!("{}-{}.json", stem, suffix))) {
            suffix = format!("{}-{}", suffix, targets.len());
        }
        target = out.join(format!("{}-{}.json", stem, suffix));
        tracing::warn!(name, file = %target.display(), "output name already taken");
    }
    targets.insert(target.clone());
    target
}

fn output_stem(name: &str) -> String {
    let slug = slugify(name);
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
