//! Resolve command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::resolver::Resolution;
use crate::services::ResolveService;

/// 解析一条查询并打印目标 URL，`record` 为真时写日志并计数
pub async fn resolve_query(
    resolver: &ResolveService,
    query: &str,
    record: bool,
) -> Result<(), CliError> {
    let resolution = if record {
        resolver.resolve(query).await?
    } else {
        resolver.preview(query).await?
    };

    match &resolution {
        Resolution::Direct { url, keyword } => println!(
            "{} {} -> {}",
            "→".bold().green(),
            keyword.cyan(),
            url.blue().underline()
        ),
        Resolution::Fallback { url } => println!(
            "{} {} -> {}",
            "→".bold().yellow(),
            "search".dimmed(),
            url.blue().underline()
        ),
    }
    Ok(())
}
