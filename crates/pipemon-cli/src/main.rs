use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

mod cli;
mod commands;

use commands::Outcome;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = cli::Cli::parse();

    match commands::run_command(cli).await {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::DifferencesFound) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(2)
        }
    }
}
