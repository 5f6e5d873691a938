//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Alert routing control tool
///
/// Resolve alert routing decisions from a TOML rule configuration,
/// inspect configured rules, and check quiet-hours suppression.
#[derive(Parser, Debug)]
#[command(name = "alertctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ALERTCTL_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Route an alert and print the decision
    Route(RouteArgs),

    /// List configured routing rules
    Rules,

    /// Check whether a time falls inside quiet hours
    Quiet(QuietArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the route command
#[derive(Parser, Debug)]
pub struct RouteArgs {
    /// Alert type to route (e.g. motion, temperature)
    pub alert_type: String,

    /// Alert severity (critical, warning, info, or free-form)
    #[arg(short, long)]
    pub severity: Option<String>,

    /// Wall-clock time of the alert as HH:MM; defaults to now
    #[arg(short, long)]
    pub time: Option<String>,

    /// Evaluate without any time, skipping quiet hours
    #[arg(long, conflicts_with = "time")]
    pub no_time: bool,
}

/// Arguments for the quiet command
#[derive(Parser, Debug)]
pub struct QuietArgs {
    /// Time to check as HH:MM; defaults to now
    #[arg(short, long)]
    pub time: Option<String>,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

/// Generate shell completions to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
