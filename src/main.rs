use clap::Parser;
use colored::Colorize;

use gomarks::cli::Cli;
use gomarks::config::{get_config, init_config};
use gomarks::runtime::modes::{Mode, detect_mode};
use gomarks::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config(cli.config.as_deref());

    let mode = detect_mode(cli.command.as_ref());

    // CLI 模式下配置错误只影响对应字段，服务器模式必须校验通过
    if mode == Mode::Server
        && let Err(e) = get_config().validate()
    {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }

    match mode {
        Mode::Server => {
            let _guard = init_logging(&get_config().logging)?;
            gomarks::runtime::modes::run_server().await
        }
        Mode::Cli => {
            let Some(command) = cli.command else {
                return Ok(());
            };
            if let Err(e) = gomarks::runtime::modes::run_cli(command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
        Mode::Unknown => {
            eprintln!("{}", "No execution mode available in this build".red());
            std::process::exit(1);
        }
    }
}
