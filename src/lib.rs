// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use crate::application::{detect_format, MemoBook, MemoFilter, MemoRepository};
use crate::cli::args::{Args, Command, ContentSource};
use crate::constants::ALL_TAGS;
use crate::infrastructure::{Config, JsonStore, SystemClipboard};
use crate::ports::TextPresenter;
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting frogmemo with arguments");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Detection needs no store
    if let Command::Detect { file } = &args.command {
        return detect(file.as_deref(), &mut out);
    }

    // Initialize infrastructure
    let config = Config::load_or_default(args.config.as_deref())?;
    let store_path = config.store_path(args.store.as_deref())?;
    debug!(path = %store_path.display(), "Using store");
    let store = JsonStore::open(&store_path)?;

    // Initialize application
    let mut book = MemoBook::open(store, config.block_defaults())?;

    execute(&mut book, args.command, &mut out)
}

/// Run one command against an open memo book, writing user-facing output to `out`.
pub fn execute<R: MemoRepository>(
    book: &mut MemoBook<R>,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    let presenter = TextPresenter::new();

    match command {
        Command::List { tag, search, scope, json } => {
            let filter = MemoFilter::new(
                tag.unwrap_or_else(|| ALL_TAGS.to_string()),
                search.unwrap_or_default(),
                scope,
            );
            let blocks = book.filtered(&filter);
            debug!(?filter, count = blocks.len(), "Listing memo blocks");
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&blocks)?)?;
            } else {
                for block in blocks {
                    writeln!(out, "{}", presenter.render_row(block))?;
                }
            }
        }
        Command::View { id, json } => {
            let block = book.block(&id)?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(block)?)?;
            } else {
                writeln!(out, "{}", presenter.render(block))?;
            }
        }
        Command::Add { title, source, tags, format } => {
            let content = read_content(&source)?;
            let id = book.add_block_with(|block| {
                if let Some(title) = title {
                    block.title = title;
                }
                if let Some(content) = content {
                    block.content = content;
                }
                if !tags.is_empty() {
                    block.tags = tags;
                }
                if let Some(format) = format {
                    block.format = format;
                }
            });
            info!(%id, "Added memo block");
            writeln!(out, "{id}")?;
        }
        Command::Update { id, title, source, format, height } => {
            // Fail on an unknown id before reading any file
            book.block(&id)?;
            if let Some(content) = read_content(&source)? {
                book.update_content(&id, content)?;
            }
            if let Some(title) = title {
                book.update_title(&id, title)?;
            }
            if let Some(format) = format {
                book.update_format(&id, format)?;
            }
            if let Some(height) = height {
                let stored = book.update_height(&id, height)?;
                if stored != height {
                    writeln!(out, "Height clamped to {stored}")?;
                }
            }
        }
        Command::ToggleLines { id } => {
            let shown = book.toggle_line_numbers(&id)?;
            writeln!(out, "Line numbers {}", if shown { "on" } else { "off" })?;
        }
        Command::Delete { id } => {
            if book.delete_block(&id)? {
                writeln!(out, "Deleted {id}")?;
            } else {
                writeln!(out, "Cannot delete the last memo block")?;
            }
        }
        Command::Tag { id, tag } => {
            if !book.add_tag(&id, &tag)? {
                debug!(%id, %tag, "Tag unchanged");
            }
        }
        Command::Untag { id, tag } => {
            if !book.remove_tag(&id, &tag)? {
                debug!(%id, %tag, "Tag not present");
            }
        }
        Command::Tags => {
            for tag in book.unique_tags() {
                writeln!(out, "{tag}")?;
            }
        }
        Command::Detect { file } => detect(file.as_deref(), &mut *out)?,
        Command::Beautify { id } => book.beautify(&id)?,
        Command::Copy { id } => book.copy_to(&id, &mut SystemClipboard::new())?,
        Command::Export { output } => {
            let document = book.export_document();
            match output {
                Some(path) => document.write_to(&path)?,
                None => writeln!(out, "{}", document.to_json()?)?,
            }
        }
    }

    for notification in book.take_notifications() {
        writeln!(out, "{}", presenter.render_notification(&notification))?;
    }
    Ok(())
}

fn detect(file: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    writeln!(out, "{}", detect_format(&content))?;
    Ok(())
}

fn read_content(source: &ContentSource) -> Result<Option<String>> {
    match (&source.content, &source.file) {
        (Some(content), _) => Ok(Some(content.clone())),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map(Some)
            .with_context(|| format!("Failed to read {}", path.display())),
        (None, None) => Ok(None),
    }
}
