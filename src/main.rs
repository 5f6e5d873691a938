//! alertctl - alert routing control tool
//!
//! A command-line tool for resolving alert routing decisions from a TOML
//! rule configuration, with severity overrides and quiet-hours suppression.

use alertctl::cli::args::{generate_completions, Cli, Commands};
use alertctl::commands::{run_quiet, run_route, run_rules};
use alertctl::error::AppError;
use clap::Parser;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Route(args) => run_route(args, cli.format, cli.config.as_deref()),

        Commands::Rules => run_rules(cli.format, cli.config.as_deref()),

        Commands::Quiet(args) => run_quiet(args, cli.format, cli.config.as_deref()),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(alertctl::error::ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Pass --config or create one of the default config files.");
            eprintln!("      Run 'alertctl rules' to see which paths are searched.");
        }
        AppError::Config(alertctl::error::ConfigError::InvalidTime(_)) => {
            eprintln!();
            eprintln!("Hint: Times use 24-hour HH:MM format, e.g. --time 22:30.");
        }
        _ => {}
    }
}
