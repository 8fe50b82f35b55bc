//! Fallback search URL commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::ShortcutService;

pub async fn show_fallback(service: &ShortcutService) -> Result<(), CliError> {
    let url = service.fallback().await?;
    println!(
        "{} Fallback search: {}",
        "ℹ".bold().blue(),
        url.blue().underline()
    );
    Ok(())
}

pub async fn set_fallback(service: &ShortcutService, url: String) -> Result<(), CliError> {
    let saved = service.set_fallback(&url).await?;
    println!(
        "{} Fallback search set to: {}",
        "✓".bold().green(),
        saved.blue().underline()
    );
    Ok(())
}
