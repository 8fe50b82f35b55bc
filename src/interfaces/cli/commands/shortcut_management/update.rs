//! Update shortcut command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{ShortcutService, UpdateShortcutRequest};

pub async fn update_shortcut(
    service: &ShortcutService,
    keyword: String,
    destination: String,
    rename: Option<String>,
    single_word: bool,
) -> Result<(), CliError> {
    let shortcut = service
        .update(
            &keyword,
            UpdateShortcutRequest {
                rename,
                destination,
                single_word,
            },
        )
        .await?;

    if !shortcut.keyword.eq_ignore_ascii_case(keyword.trim()) {
        println!(
            "{} Renamed shortcut: {} -> {}",
            "✓".bold().green(),
            keyword.yellow(),
            shortcut.keyword.cyan()
        );
    }
    println!(
        "{} Updated shortcut: {} -> {}",
        "✓".bold().green(),
        shortcut.keyword.cyan(),
        shortcut.destination.blue().underline()
    );
    Ok(())
}
