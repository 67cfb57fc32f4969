//! Work-schedule configuration and session slot generation.
//!
//! A workday is divided into `session_count` evenly spaced pause sessions.
//! Slots are never cached or mutated: they are regenerated on demand from
//! the stored [`WorkScheduleConfig`].

pub mod clock;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Minimum supported work window.
pub const MIN_WINDOW_MINUTES: u32 = 4 * 60;

/// Session counts the schedule editor offers.
pub const ALLOWED_SESSION_COUNTS: [u32; 3] = [6, 8, 12];

/// Work-window configuration the slots are generated from.
///
/// CamelCase on the wire: exports stay compatible with the original app's
/// JSON files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkScheduleConfig {
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default)]
    pub start_minute: u32,
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
    #[serde(default)]
    pub end_minute: u32,
    #[serde(default = "default_session_count")]
    pub session_count: u32,
}

fn default_start_hour() -> u32 {
    10
}
fn default_end_hour() -> u32 {
    17
}
fn default_session_count() -> u32 {
    6
}

impl Default for WorkScheduleConfig {
    fn default() -> Self {
        Self {
            start_hour: 10,
            start_minute: 0,
            end_hour: 17,
            end_minute: 0,
            session_count: 6,
        }
    }
}

impl WorkScheduleConfig {
    pub fn start_minutes(&self) -> u32 {
        self.start_hour * 60 + self.start_minute
    }

    pub fn end_minutes(&self) -> u32 {
        self.end_hour * 60 + self.end_minute
    }

    /// Reject nonsensical windows before they are persisted.
    ///
    /// The generator itself performs no range checks; an end-before-start
    /// window would produce garbage slots, so the editor must call this
    /// first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let start = self.start_minutes();
        let end = self.end_minutes();
        if end <= start {
            return Err(ValidationError::InvalidTimeRange {
                start: format!("{:02}:{:02}", self.start_hour, self.start_minute),
                end: format!("{:02}:{:02}", self.end_hour, self.end_minute),
            });
        }
        if end - start < MIN_WINDOW_MINUTES {
            return Err(ValidationError::WindowTooShort {
                minutes: end - start,
                min_minutes: MIN_WINDOW_MINUTES,
            });
        }
        if !ALLOWED_SESSION_COUNTS.contains(&self.session_count) {
            return Err(ValidationError::UnsupportedSessionCount(self.session_count));
        }
        Ok(())
    }
}

/// Governs whether a reminder may fire right now, independent of the work
/// window. Disabled means fail-open: reminders are never blocked by an
/// absent or switched-off notification schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationScheduleConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_notif_start_hour")]
    pub start_hour: u32,
    #[serde(default)]
    pub start_minute: u32,
    #[serde(default = "default_notif_end_hour")]
    pub end_hour: u32,
    #[serde(default)]
    pub end_minute: u32,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u32,
}

fn default_notif_start_hour() -> u32 {
    8
}
fn default_notif_end_hour() -> u32 {
    22
}
fn default_max_sessions() -> u32 {
    12
}

impl Default for NotificationScheduleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            start_hour: 8,
            start_minute: 0,
            end_hour: 22,
            end_minute: 0,
            max_sessions: 12,
        }
    }
}

/// One scheduled pause slot.
///
/// Identity is positional: `id` is index+1 within the generated list, so
/// changing the session count renumbers everything. Never mutated, only
/// regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: u32,
    pub hour: u32,
    pub minute: u32,
    /// Zero-padded "HH:MM".
    pub label: String,
}

impl Session {
    pub fn time_minutes(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Generate evenly spaced sessions across the work window.
///
/// For N sessions there are N-1 intervals, so the first slot lands exactly
/// on the start time and the last on the end time. Rounding each slot
/// independently keeps drift under a minute.
pub fn generate_sessions(config: &WorkScheduleConfig) -> Vec<Session> {
    let start_minutes = config.start_minutes();

    // Guard the N-1 division; real configs always have count >= 6.
    if config.session_count < 2 {
        return vec![session_at(1, start_minutes)];
    }

    let total = config.end_minutes() as f64 - start_minutes as f64;
    let interval = total / (config.session_count - 1) as f64;

    (0..config.session_count)
        .map(|i| {
            let slot = (start_minutes as f64 + interval * i as f64).round() as u32;
            session_at(i + 1, slot)
        })
        .collect()
}

fn session_at(id: u32, slot_minutes: u32) -> Session {
    let hour = slot_minutes / 60;
    let minute = slot_minutes % 60;
    Session {
        id,
        hour,
        minute,
        label: format!("{hour:02}:{minute:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_schedule_six_sessions_ten_to_five() {
        let sessions = generate_sessions(&WorkScheduleConfig::default());
        assert_eq!(sessions.len(), 6);
        assert_eq!(sessions[0].label, "10:00");
        assert_eq!(sessions[5].label, "17:00");
        // 7h window / 5 intervals = 84 min
        assert_eq!(sessions[1].label, "11:24");
    }

    #[test]
    fn ids_are_positional() {
        let sessions = generate_sessions(&WorkScheduleConfig::default());
        for (i, s) in sessions.iter().enumerate() {
            assert_eq!(s.id, i as u32 + 1);
        }
    }

    #[test]
    fn single_session_guard() {
        let config = WorkScheduleConfig {
            session_count: 1,
            ..Default::default()
        };
        let sessions = generate_sessions(&config);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].label, "10:00");
    }

    #[test]
    fn validate_rejects_end_before_start() {
        let config = WorkScheduleConfig {
            start_hour: 17,
            end_hour: 10,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeRange { .. })
        ));
    }

    #[test]
    fn validate_rejects_short_window() {
        let config = WorkScheduleConfig {
            start_hour: 10,
            end_hour: 13,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::WindowTooShort { .. })
        ));
    }

    #[test]
    fn validate_rejects_odd_session_count() {
        let config = WorkScheduleConfig {
            session_count: 7,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedSessionCount(7))
        ));
    }

    proptest! {
        #[test]
        fn endpoints_and_monotonicity(
            start in 0u32..18 * 60,
            span in MIN_WINDOW_MINUTES..10 * 60,
            count_idx in 0usize..3,
        ) {
            let end = start + span;
            prop_assume!(end < 24 * 60);
            let config = WorkScheduleConfig {
                start_hour: start / 60,
                start_minute: start % 60,
                end_hour: end / 60,
                end_minute: end % 60,
                session_count: ALLOWED_SESSION_COUNTS[count_idx],
            };
            config.validate().unwrap();
            let sessions = generate_sessions(&config);

            prop_assert_eq!(sessions.len() as u32, config.session_count);
            prop_assert_eq!(sessions[0].time_minutes(), start);
            let last = sessions.last().unwrap().time_minutes();
            prop_assert!(last.abs_diff(end) <= 1);
            for pair in sessions.windows(2) {
                prop_assert!(pair[0].time_minutes() <= pair[1].time_minutes());
            }
        }
    }
}
