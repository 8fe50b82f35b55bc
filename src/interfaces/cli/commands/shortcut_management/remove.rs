//! Remove shortcut command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::ShortcutService;

pub async fn remove_shortcut(service: &ShortcutService, keyword: String) -> Result<(), CliError> {
    service.delete(&keyword).await?;

    println!(
        "{} Deleted shortcut: {}",
        "✓".bold().green(),
        keyword.trim().cyan()
    );
    Ok(())
}
