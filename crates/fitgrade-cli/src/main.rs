use clap::{Parser, Subcommand};
use fitgrade_core::storage::LoggingConfig;
use fitgrade_core::{Config, ConfigError};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "fitgrade-cli", version, about = "Fitgrade CLI")]
struct Cli {
    /// Log filter directive, overrides the configured level (e.g. "debug")
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seven-day push-up and running summary
    Weekly(commands::weekly::WeeklyArgs),
    /// One day's tempo breakdown and grades
    Daily(commands::daily::DailyArgs),
    /// Grade a single result
    Grade(commands::grade::GradeArgs),
    /// Calendar markers for the current week
    Calendar(commands::calendar::CalendarArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

impl Commands {
    /// Subcommands that read the backend location and session.
    fn needs_config(&self) -> bool {
        matches!(
            self,
            Commands::Weekly(_) | Commands::Daily(_) | Commands::Calendar(_)
        )
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.command.needs_config().then(Config::load);

    let default_logging = LoggingConfig::default();
    let logging_config = match &config {
        Some(Ok(config)) => &config.logging,
        _ => &default_logging,
    };
    logging::init(cli.log.as_deref(), logging_config);

    if let Err(e) = run(cli.command, config) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(
    command: Commands,
    config: Option<Result<Config, ConfigError>>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Weekly(args) => commands::weekly::run(args, &loaded(config)?),
        Commands::Daily(args) => commands::daily::run(args, &loaded(config)?),
        Commands::Grade(args) => commands::grade::run(args),
        Commands::Calendar(args) => commands::calendar::run(args, &loaded(config)?),
        Commands::Config { action } => commands::config::run(action),
    }
}

fn loaded(config: Option<Result<Config, ConfigError>>) -> Result<Config, ConfigError> {
    config.unwrap_or_else(Config::load)
}
