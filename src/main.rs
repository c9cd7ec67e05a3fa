//! boxtag command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use boxtag::{AppConfig, GestureScript, LogLevel, ReplayError};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "boxtag", version, about = "Replay box annotation sessions")]
struct Cli {
    /// Config file; defaults to the platform config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a gesture script and print the annotation record
    Replay {
        /// Script JSON file
        script: PathBuf,
        /// Read image dimensions from this file instead of the script
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// List the configured tags
    Tags,
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig, ReplayError> {
    match path {
        Some(path) => Ok(AppConfig::load(path)?),
        None => Ok(AppConfig::load_from_default_path().unwrap_or_default()),
    }
}

fn run(cli: Cli, config: AppConfig) -> Result<(), ReplayError> {
    match cli.command {
        Command::Replay { script, image } => {
            let mut script = GestureScript::load(&script)?;
            if let Some(image) = image {
                script.use_image_file(&image)?;
            }
            let outcome = script.replay(&config)?;
            println!("{}", outcome.record.to_json()?);
        }
        Command::Tags => {
            for tag in &config.tags {
                println!("{}", tag);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config errors are reported after logging is up, with the default level.
    let config = load_config(cli.config.as_ref());
    let level = cli
        .log_level
        .or_else(|| config.as_ref().ok().map(|c| c.preferences.log_level))
        .unwrap_or_default();
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .init();

    let result = config.and_then(|config| run(cli, config));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}
