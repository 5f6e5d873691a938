//! Route command handler

use crate::cli::args::{OutputFormat, RouteArgs};
use crate::cli::output::{print_output, RouteReport};
use crate::commands::load_config;
use crate::config::parse_time;
use crate::error::Result;
use crate::routing::Severity;
use chrono::NaiveTime;

/// Route a single alert and print the decision
pub fn run_route(args: &RouteArgs, format: OutputFormat, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?;
    let router = config.build_router()?;

    let severity = args.severity.as_deref().map(Severity::parse);
    let time = resolve_time(args)?;

    let result = router.route_alert(&args.alert_type, severity.as_ref(), time);
    log::info!(
        "Routed '{}' to {} channel(s) (queued: {}, suppressed: {})",
        args.alert_type,
        result.channels.len(),
        result.queued,
        result.suppressed
    );

    let report = RouteReport {
        alert_type: args.alert_type.clone(),
        severity: severity.as_ref().map(ToString::to_string),
        time: time.map(|t| t.format("%H:%M").to_string()),
        result,
    };
    print_output(&report, format)?;

    Ok(())
}

/// Determine the evaluation time: `--no-time` means none, `--time` parses
/// the given value, otherwise the current local time is used.
fn resolve_time(args: &RouteArgs) -> Result<Option<NaiveTime>> {
    if args.no_time {
        return Ok(None);
    }
    match &args.time {
        Some(time) => Ok(Some(parse_time(time)?)),
        None => Ok(Some(chrono::Local::now().time())),
    }
}
