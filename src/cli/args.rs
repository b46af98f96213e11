// src/cli/args.rs
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::QuoteFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Read quotes from a local JSON file instead of the configured store
    #[arg(short, long, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Filter inputs shared by the list and html commands
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Only show quotes from this anime (repeatable)
    #[arg(short, long, value_name = "ANIME")]
    pub anime: Vec<String>,

    /// Only show quotes by this character (repeatable)
    #[arg(short = 'C', long, value_name = "CHARACTER")]
    pub character: Vec<String>,

    /// Case-insensitive text to search for in quotes
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub search: String,
}

impl FilterArgs {
    pub fn to_filter(&self) -> QuoteFilter {
        QuoteFilter::new()
            .with_anime(self.anime.iter().cloned())
            .with_characters(self.character.iter().cloned())
            .with_search(self.search.clone())
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the quote of the day
    Daily {
        /// Date to pick the quote for (YYYY-MM-DD, defaults to today)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List quotes, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the anime titles and characters available as filters
    Options {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the vault as an HTML page and open it in the browser
    Html {
        #[command(flatten)]
        filter: FilterArgs,

        /// Write the page here instead of a temporary file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Do not open the page in the browser
        #[arg(long)]
        no_open: bool,
    },

    /// Import quotes from a JSON file into the store, skipping known quotes
    Import {
        /// JSON array of {"Quote", "Character", "Anime"} objects
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// Write a default config file
    InitConfig {
        /// Where to write it (defaults to the platform config directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}
