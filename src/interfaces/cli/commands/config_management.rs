//! Configuration commands

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use crate::config::{StaticConfig, get_config};
use crate::interfaces::cli::CliError;

/// Generate example configuration file
pub async fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());

    // 检查文件是否存在，非 --force 模式下交互确认
    if !force && Path::new(&path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout()
            .flush()
            .map_err(|e| CliError::CommandError(e.to_string()))?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    match StaticConfig::default().save_to_file(&path) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                path.blue()
            );
            println!(
                "  {}",
                "Please edit the configuration file and restart the service".yellow()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "  {} {}",
                "Failed to generate configuration file".red(),
                e.to_string().red()
            );
            Err(CliError::CommandError(format!(
                "Unable to write configuration file: {}",
                e
            )))
        }
    }
}

/// 校验当前加载的配置（文件 + GM__ 环境变量）
pub fn config_validate() -> Result<(), CliError> {
    let config = get_config();
    config
        .validate()
        .map_err(|e| CliError::ParseError(e.message().to_string()))?;

    println!("{} Configuration is valid", "✓".bold().green());
    println!(
        "  {} {}",
        "database:".dimmed(),
        config.database.database_url.cyan()
    );
    println!(
        "  {} {}:{}",
        "listen:".dimmed(),
        config.server.host.cyan(),
        config.server.port.to_string().cyan()
    );
    println!(
        "  {} {}",
        "fallback:".dimmed(),
        config.defaults.fallback_url.blue().underline()
    );
    Ok(())
}
