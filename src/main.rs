use clap::Parser;
use log::LevelFilter;
use std::path::Path;
use std::process::ExitCode;

mod cli;

use crate::cli::{Args, CliCommand};
use passmeter::core::Config;

fn run(args: Args) -> anyhow::Result<()> {
    let (config, config_warnings) = Config::load();

    let level = if args.verbose { LevelFilter::Debug } else { config.log_level };
    passmeter::logging::init(level)?;
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match &args.command {
        CliCommand::Generate(generate) => cli::handlers::handle_generate(generate, &config, args.json),
        CliCommand::Score { password, breakdown } => {
            cli::handlers::handle_score(password, *breakdown, args.json)
        }
    }
}

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
