//! Quiet command handler

use crate::cli::args::{OutputFormat, QuietArgs};
use crate::cli::output::{print_output, QuietReport};
use crate::commands::load_config;
use crate::config::parse_time;
use crate::error::Result;

/// Report whether a time falls inside the configured quiet-hours window
pub fn run_quiet(args: &QuietArgs, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let router = config.build_router()?;

    let time = match &args.time {
        Some(time) => parse_time(time)?,
        None => chrono::Local::now().time(),
    };

    let window = router
        .quiet_hours_start()
        .zip(router.quiet_hours_end())
        .map(|(start, end)| format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")));

    let report = QuietReport {
        time: time.format("%H:%M").to_string(),
        quiet: router.is_quiet(time),
        window,
    };
    print_output(&report, format)?;

    Ok(())
}
