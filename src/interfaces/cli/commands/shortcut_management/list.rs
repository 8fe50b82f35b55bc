//! List shortcuts command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::ShortcutService;

pub async fn list_shortcuts(service: &ShortcutService) -> Result<(), CliError> {
    let shortcuts = service.list().await?;

    if shortcuts.is_empty() {
        println!("{} No shortcuts found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Shortcut list:".bold().green());
    println!();
    for shortcut in &shortcuts {
        let mut info_parts = vec![format!(
            "{} -> {}",
            shortcut.keyword.cyan(),
            shortcut.destination.blue().underline()
        )];

        if shortcut.single_word {
            info_parts.push("(single word)".dimmed().yellow().to_string());
        }

        if shortcut.visit_count > 0 {
            info_parts.push(
                format!("(visits: {})", shortcut.visit_count)
                    .dimmed()
                    .cyan()
                    .to_string(),
            );
        }

        println!("  {}", info_parts.join(" "));
    }
    println!();
    println!(
        "{} Total {} shortcuts",
        "ℹ".bold().blue(),
        shortcuts.len().to_string().green()
    );
    Ok(())
}
