//! Per-user routing preferences
//!
//! Stores per-user channel, alert-type, and quiet-hours overrides with
//! merge-patch update semantics.

use super::types::Channel;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Per-user routing preferences
///
/// An empty `alert_types` set means no filtering. Records are created
/// lazily on first write; reads of unknown users yield the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Preferred channels in priority order
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Alert types the user wants (allow-list; empty = all)
    #[serde(default)]
    pub alert_types: BTreeSet<String>,
    /// Per-user quiet hours start
    pub quiet_hours_start: Option<NaiveTime>,
    /// Per-user quiet hours end
    pub quiet_hours_end: Option<NaiveTime>,
}

/// Merge-patch update for [`UserPreferences`]
///
/// `None` fields leave the stored value unchanged; set fields overwrite it.
/// Providing an empty list or set explicitly clears that field.
#[derive(Debug, Clone, Default)]
pub struct PreferenceUpdate {
    pub channels: Option<Vec<Channel>>,
    pub alert_types: Option<BTreeSet<String>>,
    pub quiet_hours_start: Option<NaiveTime>,
    pub quiet_hours_end: Option<NaiveTime>,
}

impl PreferenceUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channels(mut self, channels: Vec<Channel>) -> Self {
        self.channels = Some(channels);
        self
    }

    pub fn alert_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alert_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn quiet_hours(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.quiet_hours_start = Some(start);
        self.quiet_hours_end = Some(end);
        self
    }
}

/// In-memory store of per-user preferences
#[derive(Debug, Clone, Default)]
pub struct UserPreferenceStore {
    preferences: HashMap<String, UserPreferences>,
}

impl UserPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a merge-patch update, creating the record on first write
    pub fn set_preference(&mut self, user_id: &str, update: PreferenceUpdate) {
        let prefs = self.preferences.entry(user_id.to_string()).or_default();

        if let Some(channels) = update.channels {
            prefs.channels = channels;
        }
        if let Some(alert_types) = update.alert_types {
            prefs.alert_types = alert_types;
        }
        if let Some(start) = update.quiet_hours_start {
            prefs.quiet_hours_start = Some(start);
        }
        if let Some(end) = update.quiet_hours_end {
            prefs.quiet_hours_end = Some(end);
        }
    }

    /// Get a user's preferences; unknown users get the default record
    pub fn get_preferences(&self, user_id: &str) -> UserPreferences {
        self.preferences.get(user_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_unknown_user_gets_default() {
        let store = UserPreferenceStore::new();
        let prefs = store.get_preferences("unknown-user");

        assert!(prefs.channels.is_empty());
        assert!(prefs.alert_types.is_empty());
        assert!(prefs.quiet_hours_start.is_none());
        assert!(prefs.quiet_hours_end.is_none());
    }

    #[test]
    fn test_first_write_creates_record() {
        let mut store = UserPreferenceStore::new();
        store.set_preference("alice", PreferenceUpdate::new().channels(vec![Channel::Email]));

        assert_eq!(store.get_preferences("alice").channels, vec![Channel::Email]);
    }

    #[test]
    fn test_merge_patch_keeps_unset_fields() {
        let mut store = UserPreferenceStore::new();
        store.set_preference("alice", PreferenceUpdate::new().channels(vec![Channel::Email]));
        store.set_preference("alice", PreferenceUpdate::new().alert_types(["motion"]));

        let prefs = store.get_preferences("alice");
        assert_eq!(prefs.channels, vec![Channel::Email]);
        assert_eq!(
            prefs.alert_types,
            BTreeSet::from(["motion".to_string()])
        );
    }

    #[test]
    fn test_explicit_empty_clears_field() {
        let mut store = UserPreferenceStore::new();
        store.set_preference("alice", PreferenceUpdate::new().channels(vec![Channel::Email]));
        store.set_preference("alice", PreferenceUpdate::new().channels(vec![]));

        assert!(store.get_preferences("alice").channels.is_empty());
    }

    #[test]
    fn test_quiet_hours_update() {
        let mut store = UserPreferenceStore::new();
        store.set_preference(
            "bob",
            PreferenceUpdate::new().quiet_hours(at(22, 0), at(7, 0)),
        );

        let prefs = store.get_preferences("bob");
        assert_eq!(prefs.quiet_hours_start, Some(at(22, 0)));
        assert_eq!(prefs.quiet_hours_end, Some(at(7, 0)));
    }

    #[test]
    fn test_users_are_independent() {
        let mut store = UserPreferenceStore::new();
        store.set_preference("alice", PreferenceUpdate::new().channels(vec![Channel::Email]));
        store.set_preference("bob", PreferenceUpdate::new().channels(vec![Channel::Chat]));

        assert_eq!(store.get_preferences("alice").channels, vec![Channel::Email]);
        assert_eq!(store.get_preferences("bob").channels, vec![Channel::Chat]);
    }
}
