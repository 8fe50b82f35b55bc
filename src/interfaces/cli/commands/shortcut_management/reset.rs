//! Reset visit counts command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::ShortcutService;

pub async fn reset_visits(
    service: &ShortcutService,
    keyword: Option<String>,
    all: bool,
) -> Result<(), CliError> {
    match keyword {
        Some(keyword) if !all => {
            service.reset_visits(&keyword).await?;
            println!(
                "{} Reset visit count of {}",
                "✓".bold().green(),
                keyword.trim().cyan()
            );
        }
        _ => {
            let affected = service.reset_all_visits().await?;
            println!(
                "{} Reset visit counts of {} shortcuts",
                "✓".bold().green(),
                affected.to_string().cyan()
            );
        }
    }
    Ok(())
}
