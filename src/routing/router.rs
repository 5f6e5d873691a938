//! Alert router
//!
//! Composes the rule store, severity policy, and quiet-hours policy into a
//! single routing decision, and exposes the user-preference and severity
//! override stores as secondary surfaces.

use super::preferences::{PreferenceUpdate, UserPreferenceStore, UserPreferences};
use super::quiet::QuietHoursPolicy;
use super::rules::RuleStore;
use super::severity::{SeverityOverrides, SeverityPolicy};
use super::types::{Channel, RouteResult, RoutingConfig, RoutingRule, Severity};
use chrono::NaiveTime;
use std::sync::{PoisonError, RwLock};

/// All mutable router state, guarded by one lock so that a routing call
/// observes a consistent snapshot across every store.
#[derive(Debug, Default)]
struct RouterState {
    rules: RuleStore,
    severity_overrides: SeverityOverrides,
    quiet_hours: QuietHoursPolicy,
    preferences: UserPreferenceStore,
}

/// Routes alerts to notification channels
///
/// Routing itself is read-only and infallible; administrative calls
/// (`add_rule`, `set_quiet_hours`, `set_preference`, ...) mutate state
/// under a write lock, so producers may route concurrently with
/// configuration changes. Each instance is fully independent.
#[derive(Debug, Default)]
pub struct AlertRouter {
    state: RwLock<RouterState>,
}

impl AlertRouter {
    /// Create a router with no rules and no quiet hours
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router from an initial routing configuration
    pub fn with_config(config: RoutingConfig) -> Self {
        Self {
            state: RwLock::new(RouterState {
                rules: RuleStore::new(config),
                ..RouterState::default()
            }),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, RouterState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, RouterState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add or replace a routing rule
    pub fn add_rule(&self, rule: RoutingRule) {
        log::debug!(
            "Routing rule for '{}': {} channel(s)",
            rule.alert_type,
            rule.channels.len()
        );
        self.write().rules.add_rule(rule);
    }

    /// All configured rules, sorted by alert type
    pub fn rules(&self) -> Vec<RoutingRule> {
        self.read().rules.rules().into_iter().cloned().collect()
    }

    /// Resolve the channels for an alert without building a full result.
    ///
    /// On quiet-hours suppression this path falls back to `[Log]`, unlike
    /// [`route_alert`](Self::route_alert) whose suppressed result carries no
    /// channels. Consumers may rely on either; both are kept.
    pub fn get_channels(
        &self,
        alert_type: &str,
        severity: Option<&Severity>,
        current_time: Option<NaiveTime>,
    ) -> Vec<Channel> {
        Self::resolve_channels(&self.read(), alert_type, severity, current_time)
    }

    /// Configure the channel list for a severity tier.
    ///
    /// This registry is a standalone surface; `route_alert` does not read it.
    pub fn set_severity_channels(&self, severity: Severity, channels: Vec<Channel>) {
        self.write().severity_overrides.set(severity, channels);
    }

    /// Get the configured channel list for a severity tier, empty if unset
    pub fn get_severity_channels(&self, severity: &Severity) -> Vec<Channel> {
        self.read().severity_overrides.get(severity)
    }

    /// Set the global quiet-hours window during which non-critical alerts
    /// are suppressed. The timezone label is stored as metadata only.
    pub fn set_quiet_hours(&self, start: NaiveTime, end: NaiveTime, timezone: Option<String>) {
        log::debug!("Quiet hours set to {}-{}", start, end);
        self.write().quiet_hours.set_quiet_hours(start, end, timezone);
    }

    pub fn quiet_hours_start(&self) -> Option<NaiveTime> {
        self.read().quiet_hours.start()
    }

    pub fn quiet_hours_end(&self) -> Option<NaiveTime> {
        self.read().quiet_hours.end()
    }

    pub fn quiet_hours_timezone(&self) -> Option<String> {
        self.read().quiet_hours.timezone().map(str::to_string)
    }

    /// Whether the given time falls inside the global quiet-hours window
    pub fn is_quiet(&self, current_time: NaiveTime) -> bool {
        self.read().quiet_hours.is_quiet(current_time)
    }

    /// Route an alert and return the full decision
    pub fn route_alert(
        &self,
        alert_type: &str,
        severity: Option<&Severity>,
        current_time: Option<NaiveTime>,
    ) -> RouteResult {
        let state = self.read();
        let channels = Self::resolve_channels(&state, alert_type, severity, current_time);

        if let Some(time) = current_time {
            if state.quiet_hours.is_quiet(time) && !matches!(severity, Some(Severity::Critical)) {
                log::debug!(
                    "Alert '{}' suppressed by quiet hours at {}",
                    alert_type,
                    time
                );
                return RouteResult::suppressed();
            }
        }

        RouteResult::delivered(channels)
    }

    /// Apply a merge-patch preference update for a user
    pub fn set_preference(&self, user_id: &str, update: PreferenceUpdate) {
        self.write().preferences.set_preference(user_id, update);
    }

    /// Get a user's preferences; unknown users get the default record
    pub fn get_preferences(&self, user_id: &str) -> UserPreferences {
        self.read().preferences.get_preferences(user_id)
    }

    /// Channel resolution shared by `get_channels` and `route_alert`.
    ///
    /// Unknown alert types resolve to an empty list before any severity
    /// handling. `info` short-circuits to `[Log]` without consulting quiet
    /// hours; every other severity is subject to the quiet-hours fallback
    /// unless it is `critical`.
    fn resolve_channels(
        state: &RouterState,
        alert_type: &str,
        severity: Option<&Severity>,
        current_time: Option<NaiveTime>,
    ) -> Vec<Channel> {
        let Some(rule) = state.rules.rule(alert_type) else {
            return Vec::new();
        };

        let channels = SeverityPolicy::apply(severity, rule.channels.clone());
        if matches!(severity, Some(Severity::Info)) {
            return channels;
        }

        if let Some(time) = current_time {
            if state.quiet_hours.is_quiet(time) && !matches!(severity, Some(Severity::Critical)) {
                return vec![Channel::Log];
            }
        }

        channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn router_with(rules: Vec<RoutingRule>) -> AlertRouter {
        AlertRouter::with_config(RoutingConfig::new(rules))
    }

    #[test]
    fn test_unknown_type_routes_nowhere() {
        let router = AlertRouter::new();

        assert!(router.get_channels("motion", None, None).is_empty());
        let result = router.route_alert("motion", None, None);
        assert_eq!(result, RouteResult::delivered(vec![]));
    }

    #[test]
    fn test_unknown_type_with_info_severity_is_still_empty() {
        // The rule lookup short-circuits before the info override applies
        let router = AlertRouter::new();
        assert!(router
            .get_channels("motion", Some(&Severity::Info), None)
            .is_empty());
    }

    #[test]
    fn test_basic_routing() {
        let router = router_with(vec![RoutingRule::new(
            "motion",
            vec![Channel::Broadcast, Channel::Chat],
        )]);

        let result = router.route_alert("motion", None, None);
        assert_eq!(result.channels, vec![Channel::Broadcast, Channel::Chat]);
        assert!(!result.queued);
        assert!(!result.suppressed);
    }

    #[test]
    fn test_info_routes_to_log_only() {
        let router = router_with(vec![RoutingRule::new(
            "motion",
            vec![Channel::Broadcast, Channel::Chat],
        )]);

        let channels = router.get_channels("motion", Some(&Severity::Info), None);
        assert_eq!(channels, vec![Channel::Log]);
    }

    #[test]
    fn test_info_bypasses_quiet_hours() {
        let router = router_with(vec![RoutingRule::new("motion", vec![Channel::Broadcast])]);
        router.set_quiet_hours(at(22, 0), at(7, 0), None);

        // get_channels yields [Log] from the info override, not the
        // quiet-hours fallback
        let channels = router.get_channels("motion", Some(&Severity::Info), Some(at(23, 0)));
        assert_eq!(channels, vec![Channel::Log]);
    }

    #[test]
    fn test_warning_truncates_to_first_channel() {
        let router = router_with(vec![RoutingRule::new(
            "motion",
            vec![Channel::Broadcast, Channel::Chat],
        )]);

        let channels = router.get_channels("motion", Some(&Severity::Warning), None);
        assert_eq!(channels, vec![Channel::Broadcast]);
    }

    #[test]
    fn test_critical_bypasses_quiet_hours() {
        let router = router_with(vec![RoutingRule::new(
            "motion",
            vec![Channel::Broadcast, Channel::Chat],
        )]);
        router.set_quiet_hours(at(22, 0), at(7, 0), None);

        let result = router.route_alert("motion", Some(&Severity::Critical), Some(at(23, 0)));
        assert_eq!(result.channels, vec![Channel::Broadcast, Channel::Chat]);
        assert!(!result.queued);
        assert!(!result.suppressed);
    }

    #[test]
    fn test_warning_suppressed_during_quiet_hours() {
        let router = router_with(vec![RoutingRule::new(
            "motion",
            vec![Channel::Broadcast, Channel::Chat],
        )]);
        router.set_quiet_hours(at(22, 0), at(7, 0), None);

        let result = router.route_alert("motion", Some(&Severity::Warning), Some(at(23, 0)));
        assert_eq!(result, RouteResult::suppressed());
    }

    #[test]
    fn test_suppression_channel_asymmetry() {
        // get_channels falls back to [Log] while route_alert reports an
        // empty suppressed result for the same inputs
        let router = router_with(vec![RoutingRule::new("motion", vec![Channel::Broadcast])]);
        router.set_quiet_hours(at(22, 0), at(7, 0), None);

        let channels = router.get_channels("motion", Some(&Severity::Warning), Some(at(23, 0)));
        assert_eq!(channels, vec![Channel::Log]);

        let result = router.route_alert("motion", Some(&Severity::Warning), Some(at(23, 0)));
        assert!(result.channels.is_empty());
        assert!(result.suppressed);
    }

    #[test]
    fn test_no_time_supplied_skips_quiet_hours() {
        let router = router_with(vec![RoutingRule::new("motion", vec![Channel::Broadcast])]);
        router.set_quiet_hours(at(0, 0), at(23, 59), None);

        let result = router.route_alert("motion", Some(&Severity::Warning), None);
        assert_eq!(result.channels, vec![Channel::Broadcast]);
        assert!(!result.suppressed);
    }

    #[test]
    fn test_missing_severity_is_suppressed_during_quiet_hours() {
        let router = router_with(vec![RoutingRule::new("motion", vec![Channel::Broadcast])]);
        router.set_quiet_hours(at(22, 0), at(7, 0), None);

        let result = router.route_alert("motion", None, Some(at(23, 0)));
        assert_eq!(result, RouteResult::suppressed());
    }

    #[test]
    fn test_unknown_type_during_quiet_hours_reports_suppressed() {
        let router = AlertRouter::new();
        router.set_quiet_hours(at(22, 0), at(7, 0), None);

        let result = router.route_alert("nonexistent", Some(&Severity::Warning), Some(at(23, 0)));
        assert_eq!(result, RouteResult::suppressed());
    }

    #[test]
    fn test_add_rule_after_construction() {
        let router = AlertRouter::new();
        router.add_rule(RoutingRule::new("door", vec![Channel::Email]));

        assert_eq!(
            router.route_alert("door", None, None).channels,
            vec![Channel::Email]
        );
    }

    #[test]
    fn test_severity_override_registry_is_independent() {
        let router = router_with(vec![RoutingRule::new(
            "motion",
            vec![Channel::Broadcast, Channel::Chat],
        )]);
        router.set_severity_channels(Severity::Warning, vec![Channel::Email]);

        assert_eq!(
            router.get_severity_channels(&Severity::Warning),
            vec![Channel::Email]
        );
        // Routing still truncates from the rule, ignoring the registry
        assert_eq!(
            router.get_channels("motion", Some(&Severity::Warning), None),
            vec![Channel::Broadcast]
        );
    }

    #[test]
    fn test_preference_merge_through_router() {
        let router = AlertRouter::new();
        router.set_preference("alice", PreferenceUpdate::new().channels(vec![Channel::Email]));
        router.set_preference("alice", PreferenceUpdate::new().alert_types(["motion"]));

        let prefs = router.get_preferences("alice");
        assert_eq!(prefs.channels, vec![Channel::Email]);
        assert!(prefs.alert_types.contains("motion"));
    }

    #[test]
    fn test_preferences_do_not_change_routing() {
        let router = router_with(vec![RoutingRule::new("motion", vec![Channel::Broadcast])]);
        router.set_preference(
            "alice",
            PreferenceUpdate::new()
                .channels(vec![Channel::Email])
                .quiet_hours(at(0, 0), at(23, 59)),
        );

        // Per-user quiet hours are stored, not merged into route_alert
        let result = router.route_alert("motion", None, Some(at(12, 0)));
        assert_eq!(result.channels, vec![Channel::Broadcast]);
        assert!(!result.suppressed);
    }

    #[test]
    fn test_end_to_end_temperature_scenarios() {
        let router = router_with(vec![RoutingRule::new("temperature", vec![Channel::Broadcast])]);

        assert_eq!(
            router.get_channels("temperature", Some(&Severity::Info), None),
            vec![Channel::Log]
        );
        assert_eq!(
            router.get_channels("temperature", Some(&Severity::Warning), None),
            vec![Channel::Broadcast]
        );
        assert_eq!(
            router.get_channels("temperature", Some(&Severity::Critical), None),
            vec![Channel::Broadcast]
        );

        router.set_quiet_hours(at(22, 0), at(6, 0), None);
        let result = router.route_alert("temperature", Some(&Severity::Warning), Some(at(23, 0)));
        assert_eq!(result, RouteResult::suppressed());
    }

    #[test]
    fn test_router_is_shareable_across_threads() {
        use std::sync::Arc;

        let router = Arc::new(router_with(vec![RoutingRule::new(
            "motion",
            vec![Channel::Broadcast],
        )]));

        let reader = {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    let _ = router.route_alert("motion", Some(&Severity::Warning), None);
                }
            })
        };
        let writer = {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                for _ in 0..100 {
                    router.add_rule(RoutingRule::new("motion", vec![Channel::Broadcast]));
                }
            })
        };

        reader.join().unwrap();
        writer.join().unwrap();

        let result = router.route_alert("motion", None, None);
        assert_eq!(result.channels, vec![Channel::Broadcast]);
    }
}
