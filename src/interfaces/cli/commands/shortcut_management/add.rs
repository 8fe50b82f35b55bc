//! Add shortcut command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{CreateShortcutRequest, ShortcutService};

pub async fn add_shortcut(
    service: &ShortcutService,
    keyword: String,
    destination: String,
    single_word: bool,
) -> Result<(), CliError> {
    let shortcut = service
        .create(CreateShortcutRequest {
            keyword,
            destination,
            single_word,
        })
        .await?;

    println!(
        "{} Added shortcut: {} -> {}",
        "✓".bold().green(),
        shortcut.keyword.cyan(),
        shortcut.destination.blue().underline()
    );
    if single_word && !shortcut.single_word {
        println!(
            "{} --single-word ignored: destination has no %s placeholder",
            "ℹ".bold().blue()
        );
    }
    Ok(())
}
