//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::routing::{RouteResult, RoutingRule};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            writeln!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Routing decision for display
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub alert_type: String,
    pub severity: Option<String>,
    pub time: Option<String>,
    #[serde(flatten)]
    pub result: RouteResult,
}

impl TableDisplay for RouteReport {
    fn to_table(&self) -> String {
        let channels = if self.result.channels.is_empty() {
            "(none)".to_string()
        } else {
            self.result
                .channels
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "Alert:      {}\nSeverity:   {}\nTime:       {}\nChannels:   {}\nQueued:     {}\nSuppressed: {}",
            self.alert_type,
            self.severity.as_deref().unwrap_or("-"),
            self.time.as_deref().unwrap_or("-"),
            channels,
            self.result.queued,
            self.result.suppressed,
        )
    }

    fn to_compact(&self) -> String {
        let channels = self
            .result
            .channels
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "{}:{}{}",
            self.alert_type,
            channels,
            if self.result.suppressed { " (suppressed)" } else { "" }
        )
    }
}

/// Configured rule list for display
#[derive(Debug, Clone, Serialize)]
pub struct RuleList {
    pub rules: Vec<RoutingRule>,
}

impl TableDisplay for RuleList {
    fn to_table(&self) -> String {
        if self.rules.is_empty() {
            return "No routing rules configured".to_string();
        }

        self.rules
            .iter()
            .map(|rule| {
                let channels = rule
                    .channels
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{} -> [{}]", rule.alert_type, channels)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Quiet-hours check for display
#[derive(Debug, Clone, Serialize)]
pub struct QuietReport {
    pub time: String,
    pub quiet: bool,
    pub window: Option<String>,
}

impl TableDisplay for QuietReport {
    fn to_table(&self) -> String {
        match &self.window {
            Some(window) => format!(
                "Time:   {}\nWindow: {}\nQuiet:  {}",
                self.time, window, self.quiet
            ),
            None => format!("Time:   {}\nWindow: (none)\nQuiet:  false", self.time),
        }
    }

    fn to_compact(&self) -> String {
        format!("{}:{}", self.time, self.quiet)
    }
}
