//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for gomarks using clap's derive macros.
//! Running without a subcommand starts the HTTP server.

use clap::{Parser, Subcommand};

/// gomarks - keyword shortcuts for the browser search bar
#[derive(Parser)]
#[command(name = "gomarks")]
#[command(version)]
#[command(about = "Keyword shortcuts for your browser's search bar", long_about = None)]
pub struct Cli {
    /// Path to the configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Add a shortcut
    ///
    /// Usage: add <KEYWORD> <DESTINATION>
    /// - Use %s in the destination where the query options go
    Add {
        keyword: String,

        /// Destination URL, optionally with one %s placeholder
        destination: String,

        /// Fall back to search when more than one option is given
        #[arg(long)]
        single_word: bool,
    },

    /// Update a shortcut
    Update {
        /// Keyword to update
        keyword: String,

        /// New destination URL
        destination: String,

        /// Rename the keyword
        #[arg(long)]
        rename: Option<String>,

        #[arg(long)]
        single_word: bool,
    },

    /// Remove a shortcut
    Remove { keyword: String },

    /// List all shortcuts
    List,

    /// Reset visit counts
    Reset {
        /// Keyword to reset
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        keyword: Option<String>,

        /// Reset every shortcut
        #[arg(long)]
        all: bool,
    },

    /// Show or set the fallback search URL
    Fallback {
        /// New fallback URL containing {searchTerms}
        url: Option<String>,
    },

    /// Show recent queries
    History {
        /// Number of entries (default: defaults.history_limit)
        #[arg(long, short = 'n')]
        limit: Option<u64>,
    },

    /// Delete all recorded queries
    ClearHistory,

    /// Resolve a query and print the target URL
    Resolve {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
        query: Vec<String>,

        /// Log the query and count the visit like a real request
        #[arg(long)]
        record: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate the loaded configuration
    Validate,
}

impl Commands {
    /// Commands that do not need a storage connection
    pub fn needs_storage(&self) -> bool {
        !matches!(self, Commands::Serve | Commands::Config { .. })
    }
}
