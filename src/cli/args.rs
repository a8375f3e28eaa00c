// src/cli/args.rs
use crate::domain::{Format, SearchScope};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the JSON store file (optional)
    #[arg(short, long, value_name = "STORE", global = true)]
    pub store: Option<PathBuf>,

    /// Path to a TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// New block content, given inline or read from a file.
#[derive(ClapArgs, Debug, Clone, Default, PartialEq)]
#[group(multiple = false)]
pub struct ContentSource {
    /// Content text
    #[arg(long)]
    pub content: Option<String>,

    /// Read content from a file
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List memo blocks, optionally filtered by tag or search term
    List {
        /// Only blocks carrying this tag ("all" for every block)
        #[arg(long)]
        tag: Option<String>,

        /// Case-insensitive search term; overrides --tag
        #[arg(long)]
        search: Option<String>,

        /// Field(s) the search looks at
        #[arg(long, default_value_t = SearchScope::All)]
        scope: SearchScope,

        /// Output blocks as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one memo block
    View {
        #[arg(value_name = "ID")]
        id: String,

        /// Output the block as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a memo block
    Add {
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        source: ContentSource,

        /// Tag to attach (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        #[arg(long)]
        format: Option<Format>,
    },

    /// Change fields of a memo block
    Update {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        source: ContentSource,

        #[arg(long)]
        format: Option<Format>,

        /// Editor height in pixels (minimum 100)
        #[arg(long)]
        height: Option<u32>,
    },

    /// Toggle the line-number gutter of a memo block
    ToggleLines {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Delete a memo block (the last block is kept)
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Add a tag to a memo block
    Tag {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// Remove a tag from a memo block
    Untag {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "TAG")]
        tag: String,
    },

    /// List every tag in use
    Tags,

    /// Detect the format of a file or of stdin
    Detect {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Reformat a memo block's content for its format
    Beautify {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Copy a memo block's content to the system clipboard
    Copy {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Export all memo blocks and tags as JSON
    Export {
        /// Output file; stdout when omitted
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}
