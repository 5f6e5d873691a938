//! Configuration system
//!
//! TOML-based configuration for routing rules, the global quiet-hours
//! window, and the per-severity channel registry.

pub mod file;

pub use file::ConfigFile;

use crate::error::ConfigError;
use crate::routing::{AlertRouter, Channel, RoutingConfig, RoutingRule, Severity};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parse a time-of-day string in `HH:MM` or `HH:MM:SS` form
pub fn parse_time(s: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ConfigError::InvalidTime(s.to_string()))
}

/// Quiet-hours section of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuietHoursConfig {
    /// Window start, `HH:MM` or `HH:MM:SS`
    pub start: String,
    /// Window end, `HH:MM` or `HH:MM:SS`
    pub end: String,
    /// Timezone label, stored as metadata
    pub timezone: Option<String>,
}

impl QuietHoursConfig {
    fn parse(&self) -> Result<(NaiveTime, NaiveTime), ConfigError> {
        Ok((parse_time(&self.start)?, parse_time(&self.end)?))
    }
}

/// Router configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfigFile {
    /// Routing rules; later entries win on duplicate alert types
    #[serde(default)]
    pub rules: Vec<RoutingRule>,
    /// Global quiet-hours window
    pub quiet_hours: Option<QuietHoursConfig>,
    /// Per-severity channel registry (standalone surface, not consulted
    /// by routing)
    #[serde(default)]
    pub severity_channels: BTreeMap<String, Vec<Channel>>,
}

impl RouterConfigFile {
    /// Build a fully configured router from this file
    pub fn build_router(&self) -> Result<AlertRouter, ConfigError> {
        let router = AlertRouter::with_config(RoutingConfig::new(self.rules.clone()));

        if let Some(quiet) = &self.quiet_hours {
            let (start, end) = quiet.parse()?;
            router.set_quiet_hours(start, end, quiet.timezone.clone());
        }

        for (severity, channels) in &self.severity_channels {
            router.set_severity_channels(Severity::parse(severity), channels.clone());
        }

        Ok(router)
    }
}
