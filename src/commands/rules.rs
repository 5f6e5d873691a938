//! Rules command handler

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, RuleList};
use crate::commands::load_config;
use crate::error::Result;

/// List the configured routing rules
pub fn run_rules(format: OutputFormat, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let router = config.build_router()?;

    let list = RuleList {
        rules: router.rules(),
    };
    print_output(&list, format)?;

    Ok(())
}
