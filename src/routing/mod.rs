//! Alert routing engine
//!
//! Decides which notification channels receive a raised alert, combining
//! per-type routing rules, severity overrides, and quiet-hours suppression.
//! The decision is purely computational; delivery belongs to an external
//! dispatcher that consumes the returned [`RouteResult`].
//!
//! Two surfaces are deliberately not part of the routing decision: the
//! per-severity channel registry ([`AlertRouter::set_severity_channels`])
//! and per-user quiet hours held in [`UserPreferences`]. Both are stored
//! and queryable but never consulted by [`AlertRouter::route_alert`].

mod preferences;
mod quiet;
mod rules;
mod router;
mod severity;
mod types;

pub use preferences::{PreferenceUpdate, UserPreferenceStore, UserPreferences};
pub use quiet::{QuietHoursPolicy, QuietWindow};
pub use router::AlertRouter;
pub use rules::RuleStore;
pub use severity::{SeverityOverrides, SeverityPolicy};
pub use types::{Channel, RouteResult, RoutingConfig, RoutingRule, Severity};
