use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use taskfetch::cli::{Cli, Commands};
use taskfetch::report::{color_enabled, Reporter};
use taskfetch::{FilterInputs, StatusFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let error_color = color_enabled(cli.no_color, io::stderr().is_terminal());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let prefix = if error_color {
                "❌ Erro:".red().to_string()
            } else {
                "❌ Erro:".to_string()
            };
            eprintln!("{} {:#}", prefix, err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "taskfetch", &mut io::stdout());
        return Ok(());
    }

    let config = cli
        .config(|key| std::env::var(key).ok())
        .context("falha ao ler a configuração")?;
    let filter = StatusFilter::resolve(&FilterInputs::from_process());
    log::debug!("config: {:?}, filter: {:?}", config, filter);

    let stdout = io::stdout();
    let color = color_enabled(cli.no_color, stdout.is_terminal());
    let mut reporter = Reporter::new(stdout.lock(), color);

    let summary = taskfetch::run(&config, &filter, &mut reporter).await?;
    log::info!(
        "kept {} of {} tasks, saved to {}",
        summary.kept,
        summary.fetched,
        summary.output_path.display()
    );

    Ok(())
}
