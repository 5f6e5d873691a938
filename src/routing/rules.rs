//! Rule storage
//!
//! Holds the alert-type to channel-list mapping consulted by the router.

use super::types::{Channel, RoutingConfig, RoutingRule};
use std::collections::HashMap;

/// Stores routing rules keyed by alert type
///
/// Upserts by alert type: adding a rule for an existing type replaces it.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: HashMap<String, RoutingRule>,
}

impl RuleStore {
    /// Build a store from an initial configuration; later duplicates win
    pub fn new(config: RoutingConfig) -> Self {
        let mut store = Self::default();
        for rule in config.rules {
            store.add_rule(rule);
        }
        store
    }

    /// Add or replace the rule for an alert type
    pub fn add_rule(&mut self, rule: RoutingRule) {
        self.rules.insert(rule.alert_type.clone(), rule);
    }

    /// Look up the rule for an alert type
    pub fn rule(&self, alert_type: &str) -> Option<&RoutingRule> {
        self.rules.get(alert_type)
    }

    /// Get the configured channels for an alert type, empty if unknown
    pub fn get_channels(&self, alert_type: &str) -> Vec<Channel> {
        self.rules
            .get(alert_type)
            .map(|rule| rule.channels.clone())
            .unwrap_or_default()
    }

    /// All configured rules, sorted by alert type for stable output
    pub fn rules(&self) -> Vec<&RoutingRule> {
        let mut rules: Vec<&RoutingRule> = self.rules.values().collect();
        rules.sort_by(|a, b| a.alert_type.cmp(&b.alert_type));
        rules
    }

    /// Number of configured rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
