//! Quiet-hours policy
//!
//! Evaluates whether a wall-clock time falls inside the configured
//! suppression window, including overnight windows that wrap midnight.

use chrono::NaiveTime;

/// A configured quiet-hours window
///
/// The timezone label is retained as metadata for callers; times are
/// compared as supplied, without conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuietWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub timezone: Option<String>,
}

/// Time-window suppression policy
///
/// With no window configured, nothing is ever quiet. Both window bounds are
/// inclusive. A window whose start is later than its end wraps midnight
/// (e.g. 22:00-07:00).
#[derive(Debug, Clone, Default)]
pub struct QuietHoursPolicy {
    window: Option<QuietWindow>,
}

impl QuietHoursPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the quiet-hours window
    pub fn set_quiet_hours(&mut self, start: NaiveTime, end: NaiveTime, timezone: Option<String>) {
        self.window = Some(QuietWindow {
            start,
            end,
            timezone,
        });
    }

    /// The configured window, if any
    pub fn window(&self) -> Option<&QuietWindow> {
        self.window.as_ref()
    }

    pub fn start(&self) -> Option<NaiveTime> {
        self.window.as_ref().map(|w| w.start)
    }

    pub fn end(&self) -> Option<NaiveTime> {
        self.window.as_ref().map(|w| w.end)
    }

    pub fn timezone(&self) -> Option<&str> {
        self.window.as_ref().and_then(|w| w.timezone.as_deref())
    }

    /// Whether the given time-of-day falls inside the window
    pub fn is_quiet(&self, current_time: NaiveTime) -> bool {
        let Some(window) = &self.window else {
            return false;
        };

        if window.start <= window.end {
            window.start <= current_time && current_time <= window.end
        } else {
            // Overnight window wrapping midnight
            current_time >= window.start || current_time <= window.end
        }
    }
}
