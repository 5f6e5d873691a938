//! Alert routing domain types
//!
//! Defines the channels, severities, rules, and results used by the routing engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Notification channel for a routed alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Fan-out to a broadcast/pub-sub topic
    Broadcast,
    /// Chat webhook
    Chat,
    /// Email gateway
    Email,
    /// Log sink only, no external delivery
    Log,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Broadcast => write!(f, "broadcast"),
            Self::Chat => write!(f, "chat"),
            Self::Email => write!(f, "email"),
            Self::Log => write!(f, "log"),
        }
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "broadcast" => Ok(Self::Broadcast),
            "chat" => Ok(Self::Chat),
            "email" => Ok(Self::Email),
            "log" => Ok(Self::Log),
            other => Err(format!(
                "unknown channel '{}' (expected broadcast, chat, email, or log)",
                other
            )),
        }
    }
}

/// Alert severity tier
///
/// The three named tiers drive channel selection and quiet-hours bypass;
/// anything else is carried verbatim and routed as pass-through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    /// Full fan-out, exempt from quiet-hours suppression
    Critical,
    /// Truncated to the highest-priority configured channel
    Warning,
    /// Log-only, hard override
    Info,
    /// Unrecognized tier, treated as pass-through
    Other(String),
}

impl Severity {
    /// Parse a severity string; exact lowercase matches map to named tiers.
    pub fn parse(s: &str) -> Self {
        match s {
            "critical" => Self::Critical,
            "warning" => Self::Warning,
            "info" => Self::Info,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        s.as_str().to_string()
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// A rule mapping an alert type to an ordered channel list
///
/// Channel order is priority order: severity truncation keeps the first
/// configured channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingRule {
    /// Alert type this rule applies to (unique key)
    pub alert_type: String,
    /// Channels in priority order
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl RoutingRule {
    /// Create a new routing rule
    pub fn new(alert_type: impl Into<String>, channels: Vec<Channel>) -> Self {
        Self {
            alert_type: alert_type.into(),
            channels,
        }
    }
}

/// Initial configuration for an [`AlertRouter`](crate::routing::AlertRouter)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Routing rules; later entries win on duplicate alert types
    #[serde(default)]
    pub rules: Vec<RoutingRule>,
}

impl RoutingConfig {
    pub fn new(rules: Vec<RoutingRule>) -> Self {
        Self { rules }
    }
}

/// Outcome of routing one alert
///
/// `suppressed` implies `channels` is empty and `queued` is set; the
/// constructors below are the only way these fields are produced, which
/// keeps that implication intact on every path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    /// Channels that should receive the alert, in priority order
    pub channels: Vec<Channel>,
    /// Whether the alert should be queued for later delivery
    pub queued: bool,
    /// Whether delivery was suppressed (quiet hours)
    pub suppressed: bool,
}

impl RouteResult {
    /// A normal delivery outcome
    pub fn delivered(channels: Vec<Channel>) -> Self {
        Self {
            channels,
            queued: false,
            suppressed: false,
        }
    }

    /// A quiet-hours suppression outcome: nothing delivered now, queued for later
    pub fn suppressed() -> Self {
        Self {
            channels: Vec::new(),
            queued: true,
            suppressed: true,
        }
    }
}
