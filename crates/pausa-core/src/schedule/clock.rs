//! Session clock: pure lookups over a generated slot list.
//!
//! Every function takes the current time as minutes since midnight so the
//! date boundary stays a testable input instead of ambient `now()`.

use chrono::Timelike;

use super::{NotificationScheduleConfig, Session, WorkScheduleConfig};

/// "Is it time to notify" proximity, in minutes.
pub const REMINDER_TOLERANCE_MIN: u32 = 5;

/// "Which session does a completion in progress belong to" proximity.
/// Deliberately wider than [`REMINDER_TOLERANCE_MIN`]; the two constants
/// are independent and neither derives from the other.
pub const SESSION_ATTACH_TOLERANCE_MIN: u32 = 30;

/// Remaining time to the next session, split into whole hours and minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeUntil {
    pub hours: u32,
    pub minutes: u32,
}

/// Minutes since local midnight.
pub fn minutes_since_midnight(time: impl Timelike) -> u32 {
    time.hour() * 60 + time.minute()
}

/// First session strictly after `now_minutes`; wraps to the first slot of
/// the list (tomorrow's first session) when today is exhausted. `None` only
/// for an empty schedule.
pub fn next_session(sessions: &[Session], now_minutes: u32) -> Option<&Session> {
    sessions
        .iter()
        .find(|s| s.time_minutes() > now_minutes)
        .or_else(|| sessions.first())
}

/// True when `now_minutes` is within `tolerance` (inclusive) of any
/// session, not just the next one.
pub fn is_session_time(sessions: &[Session], now_minutes: u32, tolerance: u32) -> bool {
    sessions
        .iter()
        .any(|s| s.time_minutes().abs_diff(now_minutes) <= tolerance)
}

/// Time remaining until the next session; a wrapped (tomorrow) session gets
/// 24h added before the split.
pub fn time_until_next(sessions: &[Session], now_minutes: u32) -> Option<TimeUntil> {
    let next = next_session(sessions, now_minutes)?;
    let mut diff = next.time_minutes() as i64 - now_minutes as i64;
    if diff < 0 {
        diff += 24 * 60;
    }
    Some(TimeUntil {
        hours: (diff / 60) as u32,
        minutes: (diff % 60) as u32,
    })
}

/// Id of the session a completion happening now belongs to, using the
/// 30-minute attach tolerance.
pub fn current_session_id(sessions: &[Session], now_minutes: u32) -> Option<u32> {
    sessions
        .iter()
        .find(|s| s.time_minutes().abs_diff(now_minutes) <= SESSION_ATTACH_TOLERANCE_MIN)
        .map(|s| s.id)
}

/// Inclusive range check against the work window.
pub fn is_within_work_hours(config: &WorkScheduleConfig, now_minutes: u32) -> bool {
    now_minutes >= config.start_minutes() && now_minutes <= config.end_minutes()
}

/// Inclusive range check against the notification window. Fail-open: a
/// disabled schedule never blocks reminders.
pub fn is_within_notification_hours(
    config: &NotificationScheduleConfig,
    now_minutes: u32,
) -> bool {
    if !config.enabled {
        return true;
    }
    let start = config.start_hour * 60 + config.start_minute;
    let end = config.end_hour * 60 + config.end_minute;
    now_minutes >= start && now_minutes <= end
}

/// Human-readable remaining time, e.g. "1h 24min" or "45 min".
pub fn format_time_until(time: TimeUntil) -> String {
    if time.hours > 0 {
        format!("{}h {}min", time.hours, time.minutes)
    } else {
        format!("{} min", time.minutes)
    }
}

/// "First - last" slot labels for display, empty for an empty schedule.
pub fn schedule_range_label(sessions: &[Session]) -> String {
    match (sessions.first(), sessions.last()) {
        (Some(first), Some(last)) => format!("{} - {}", first.label, last.label),
        _ => String::new(),
    }
}
