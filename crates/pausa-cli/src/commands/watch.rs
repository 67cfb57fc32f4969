//! Reminder poll loop.
//!
//! Re-evaluates "is a session due" on a fixed interval, dispatching at most
//! one reminder per session id, and stops cleanly on ctrl-c so no stale
//! tick fires after shutdown.

use std::time::Duration;

use chrono::Local;
use pausa_core::reminder::{
    should_remind, ConsoleDispatcher, NotifySendDispatcher, ReminderDispatcher,
};
use pausa_core::schedule::clock;
use pausa_core::{Config, Database};

pub fn run(interval_secs: u64, desktop: bool) -> Result<(), Box<dyn std::error::Error>> {
    let dispatcher: Box<dyn ReminderDispatcher> = if desktop {
        Box::new(NotifySendDispatcher)
    } else {
        Box::new(ConsoleDispatcher)
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        let mut last_notified: Option<u32> = None;
        println!("watching for due sessions every {interval_secs}s (ctrl-c to stop)");

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    println!("stopped");
                    return;
                }
                _ = interval.tick() => {
                    if let Err(e) = poll_once(dispatcher.as_ref(), &mut last_notified) {
                        eprintln!("warning: {e}");
                    }
                }
            }
        }
    });
    Ok(())
}

fn poll_once(
    dispatcher: &dyn ReminderDispatcher,
    last_notified: &mut Option<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Reload state each tick; another process may have completed a session
    // or changed the schedule since the last poll.
    let config = Config::load_or_default();
    let db = Database::open()?;

    let now = Local::now();
    let sessions = config.sessions();
    let ledger = db.ledger(now.date_naive())?;
    let now_minutes = clock::minutes_since_midnight(now.time());

    match should_remind(
        config.preferences.notifications,
        &config.effective_notification_schedule(),
        &sessions,
        &ledger,
        now_minutes,
    ) {
        Ok(reminder) => {
            // One reminder per session, however long the tolerance window.
            if *last_notified != Some(reminder.session_id) {
                if let Err(e) = dispatcher.dispatch(&reminder) {
                    eprintln!("warning: could not dispatch reminder: {e}");
                }
                *last_notified = Some(reminder.session_id);
            }
        }
        Err(_) => {
            *last_notified = None;
        }
    }
    Ok(())
}
