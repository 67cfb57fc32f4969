//! Reminder eligibility and dispatch.
//!
//! Eligibility is shared, backend-independent logic; the dispatcher trait
//! has two backends chosen at composition time (stdout for the CLI poll
//! loop, `notify-send` for desktop notifications). A dispatch failure is
//! never fatal.

use crate::error::CoreError;
use crate::ledger::DayLedger;
use crate::schedule::clock::{
    current_session_id, is_session_time, is_within_notification_hours, REMINDER_TOLERANCE_MIN,
};
use crate::schedule::{NotificationScheduleConfig, Session};

/// A reminder ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub session_id: u32,
    pub title: String,
    pub body: String,
}

/// Why no reminder fires right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppression {
    NotificationsDisabled,
    QuietHours,
    NoSessionNearby,
    AlreadyCompleted,
}

/// Decide whether a reminder should fire at `now_minutes`.
///
/// Gates, in order: the master notifications flag, quiet hours (fail-open
/// when unconfigured), the 5-minute session window, and whether the nearby
/// session is already marked done today.
pub fn should_remind(
    notifications_enabled: bool,
    notification_schedule: &NotificationScheduleConfig,
    sessions: &[Session],
    ledger: &DayLedger,
    now_minutes: u32,
) -> Result<Reminder, Suppression> {
    if !notifications_enabled {
        return Err(Suppression::NotificationsDisabled);
    }
    if !is_within_notification_hours(notification_schedule, now_minutes) {
        return Err(Suppression::QuietHours);
    }
    if !is_session_time(sessions, now_minutes, REMINDER_TOLERANCE_MIN) {
        return Err(Suppression::NoSessionNearby);
    }
    let session_id =
        current_session_id(sessions, now_minutes).ok_or(Suppression::NoSessionNearby)?;
    if ledger.is_completed(session_id) {
        return Err(Suppression::AlreadyCompleted);
    }

    Ok(Reminder {
        session_id,
        title: "¡Hora de tu pausa activa!".into(),
        body: "Toca para iniciar tu ejercicio y mantener tu cuerpo activo.".into(),
    })
}

/// Backend that actually shows a reminder.
pub trait ReminderDispatcher {
    fn dispatch(&self, reminder: &Reminder) -> Result<(), CoreError>;
}

/// Prints the reminder to stdout; the `watch` loop's default.
pub struct ConsoleDispatcher;

impl ReminderDispatcher for ConsoleDispatcher {
    fn dispatch(&self, reminder: &Reminder) -> Result<(), CoreError> {
        println!("[pausa] {} {}", reminder.title, reminder.body);
        Ok(())
    }
}

/// Desktop notifications via `notify-send`. Missing binary or a nonzero
/// exit degrades to an error the caller may ignore.
pub struct NotifySendDispatcher;

impl ReminderDispatcher for NotifySendDispatcher {
    fn dispatch(&self, reminder: &Reminder) -> Result<(), CoreError> {
        let status = std::process::Command::new("notify-send")
            .arg(&reminder.title)
            .arg(&reminder.body)
            .status()?;
        if status.success() {
            Ok(())
        } else {
            Err(CoreError::Custom(format!(
                "notify-send exited with {status}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{generate_sessions, WorkScheduleConfig};
    use chrono::NaiveDate;

    fn setup() -> (Vec<Session>, NotificationScheduleConfig, DayLedger) {
        let sessions = generate_sessions(&WorkScheduleConfig::default());
        let schedule = NotificationScheduleConfig::default();
        let ledger = DayLedger::new(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        (sessions, schedule, ledger)
    }

    #[test]
    fn fires_at_session_time() {
        let (sessions, schedule, ledger) = setup();
        let reminder = should_remind(true, &schedule, &sessions, &ledger, 10 * 60).unwrap();
        assert_eq!(reminder.session_id, 1);
    }

    #[test]
    fn master_flag_wins() {
        let (sessions, schedule, ledger) = setup();
        assert_eq!(
            should_remind(false, &schedule, &sessions, &ledger, 10 * 60),
            Err(Suppression::NotificationsDisabled)
        );
    }

    #[test]
    fn quiet_hours_suppress() {
        let (sessions, mut schedule, ledger) = setup();
        schedule.enabled = true;
        schedule.start_hour = 12;
        assert_eq!(
            should_remind(true, &schedule, &sessions, &ledger, 10 * 60),
            Err(Suppression::QuietHours)
        );
    }

    #[test]
    fn no_reminder_between_sessions() {
        let (sessions, schedule, ledger) = setup();
        assert_eq!(
            should_remind(true, &schedule, &sessions, &ledger, 10 * 60 + 40),
            Err(Suppression::NoSessionNearby)
        );
    }

    #[test]
    fn completed_session_is_silent() {
        let (sessions, schedule, mut ledger) = setup();
        ledger.mark_completed(1);
        assert_eq!(
            should_remind(true, &schedule, &sessions, &ledger, 10 * 60),
            Err(Suppression::AlreadyCompleted)
        );
    }
}
