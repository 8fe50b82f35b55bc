//! Query history commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::ShortcutService;

pub async fn show_history(service: &ShortcutService, limit: Option<u64>) -> Result<(), CliError> {
    let entries = service.history(limit).await?;

    if entries.is_empty() {
        println!("{} No queries recorded", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Recent queries:".bold().green());
    println!();
    for entry in &entries {
        println!(
            "  {} {}",
            entry
                .created_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .dimmed(),
            entry.raw_query.cyan()
        );
    }
    println!();
    println!(
        "{} Showing {} queries",
        "ℹ".bold().blue(),
        entries.len().to_string().green()
    );
    Ok(())
}

pub async fn clear_history(service: &ShortcutService) -> Result<(), CliError> {
    let removed = service.clear_history().await?;
    println!(
        "{} Removed {} recorded queries",
        "✓".bold().green(),
        removed.to_string().cyan()
    );
    Ok(())
}
