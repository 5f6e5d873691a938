//! alertctl - alert routing library
//!
//! This library decides which notification channels should receive a raised
//! alert, combining per-alert-type routing rules, severity-based overrides,
//! and quiet-hours suppression. It produces routing decisions only; actual
//! delivery belongs to an external dispatch component.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`error`]: Error types
//! - [`routing`]: The routing engine

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod routing;

pub use error::{AppError, Result};
pub use routing::{
    AlertRouter, Channel, PreferenceUpdate, RouteResult, RoutingConfig, RoutingRule, Severity,
    UserPreferences,
};
