//! CLI interface module
//!
//! This module provides command-line management of shortcuts, the fallback
//! search URL and the query history. Commands talk to the database directly.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::config::get_config;
use crate::services::{ResolveService, ShortcutService};
use crate::storage::{ShortcutStore, StorageFactory};
use commands::{
    add_shortcut, clear_history, config_generate, config_validate, list_shortcuts,
    remove_shortcut, reset_visits, resolve_query, set_fallback, show_fallback, show_history,
    update_shortcut,
};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::GomarksError> for CliError {
    fn from(err: crate::errors::GomarksError) -> Self {
        use crate::errors::GomarksError;
        match err {
            GomarksError::Validation(msg)
            | GomarksError::NotFound(msg)
            | GomarksError::Conflict(msg) => CliError::CommandError(msg),
            GomarksError::Config(msg) => CliError::ParseError(msg),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

impl From<crate::resolver::ResolveError> for CliError {
    fn from(err: crate::resolver::ResolveError) -> Self {
        if err.is_user_error() {
            CliError::CommandError(err.to_string())
        } else {
            CliError::StorageError(err.to_string())
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // Config commands don't need a DB connection
    if let Commands::Config { action } = cmd {
        return match action {
            ConfigCommands::Generate { output_path, force } => {
                config_generate(output_path, force).await
            }
            ConfigCommands::Validate => config_validate(),
        };
    }

    let storage = StorageFactory::create()
        .await
        .map_err(|e| CliError::StorageError(e.to_string()))?;
    let store: Arc<dyn ShortcutStore> = storage.clone();
    let shortcuts = ShortcutService::new(store.clone(), get_config().defaults.history_limit);

    let result = match cmd {
        Commands::Add {
            keyword,
            destination,
            single_word,
        } => add_shortcut(&shortcuts, keyword, destination, single_word).await,

        Commands::Update {
            keyword,
            destination,
            rename,
            single_word,
        } => update_shortcut(&shortcuts, keyword, destination, rename, single_word).await,

        Commands::Remove { keyword } => remove_shortcut(&shortcuts, keyword).await,

        Commands::List => list_shortcuts(&shortcuts).await,

        Commands::Reset { keyword, all } => reset_visits(&shortcuts, keyword, all).await,

        Commands::Fallback { url: Some(url) } => set_fallback(&shortcuts, url).await,
        Commands::Fallback { url: None } => show_fallback(&shortcuts).await,

        Commands::History { limit } => show_history(&shortcuts, limit).await,

        Commands::ClearHistory => clear_history(&shortcuts).await,

        Commands::Resolve { query, record } => {
            let resolver = ResolveService::new(store);
            resolve_query(&resolver, &query.join(" "), record).await
        }

        Commands::Serve => Err(CliError::CommandError(
            "serve is handled by the server runtime".to_string(),
        )),
        Commands::Config { .. } => Ok(()),
    };

    storage.close().await;
    result
}
