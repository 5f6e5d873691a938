//! Severity policy
//!
//! Transforms a candidate channel list based on the alert's severity tier,
//! and holds the per-severity channel override registry.

use super::types::{Channel, Severity};
use std::collections::HashMap;

/// Pure severity-based channel transform
pub struct SeverityPolicy;

impl SeverityPolicy {
    /// Apply the severity tier to a candidate channel list.
    ///
    /// - `info`: hard override to `[Log]`, regardless of the input.
    /// - `warning`: truncate to the first (highest-priority) channel.
    /// - `critical`, unrecognized tiers, or no severity: pass-through.
    pub fn apply(severity: Option<&Severity>, mut channels: Vec<Channel>) -> Vec<Channel> {
        match severity {
            Some(Severity::Info) => vec![Channel::Log],
            Some(Severity::Warning) => {
                channels.truncate(1);
                channels
            }
            _ => channels,
        }
    }
}

/// Per-severity channel override registry
///
/// A configuration surface queryable by collaborators. The routing decision
/// itself does not consult it; see the routing module docs.
#[derive(Debug, Clone, Default)]
pub struct SeverityOverrides {
    channels: HashMap<Severity, Vec<Channel>>,
}

impl SeverityOverrides {
    /// Configure the channels for a severity tier
    pub fn set(&mut self, severity: Severity, channels: Vec<Channel>) {
        self.channels.insert(severity, channels);
    }

    /// Get the configured channels for a severity tier, empty if unset
    pub fn get(&self, severity: &Severity) -> Vec<Channel> {
        self.channels.get(severity).cloned().unwrap_or_default()
    }
}
