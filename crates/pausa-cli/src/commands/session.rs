use chrono::Local;
use clap::Subcommand;
use pausa_core::exercise::catalog;
use pausa_core::schedule::clock;
use pausa_core::stats::CompletedExercise;
use pausa_core::{Config, Database};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record a completed exercise and mark the current session done
    Complete {
        /// Id of the exercise that was performed
        exercise_id: u32,
    },
    /// Show today's completed sessions
    Today,
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let db = Database::open()?;
    let now = Local::now();
    let today = now.date_naive();

    match action {
        SessionAction::Complete { exercise_id } => {
            let exercise = catalog::find_exercise(
                exercise_id,
                &config.advanced.enabled_extra_exercises,
                &config.advanced.custom_exercises,
            )
            .ok_or_else(|| format!("unknown exercise id: {exercise_id}"))?;

            let mut history = db.stats_history()?;
            history.record(
                CompletedExercise {
                    id: exercise.id,
                    name: exercise.name.clone(),
                    zone: exercise.zone,
                    duration_seconds: exercise.duration_seconds,
                    completed_at: now,
                },
                today,
            );
            db.save_stats_history(&history)?;

            // Attach the completion to the session within the 30-minute
            // window, if any; off-schedule completions still count in stats.
            let sessions = config.sessions();
            let now_minutes = clock::minutes_since_midnight(now.time());
            let mut ledger = db.ledger(today)?;
            match clock::current_session_id(&sessions, now_minutes) {
                Some(session_id) => {
                    ledger.mark_completed(session_id);
                    db.save_ledger(&ledger)?;
                    println!(
                        "recorded '{}' for session {} ({}/{} today)",
                        exercise.name,
                        session_id,
                        ledger.completed_count(),
                        sessions.len()
                    );
                }
                None => {
                    println!("recorded '{}' (no session active right now)", exercise.name);
                }
            }
        }
        SessionAction::Today => {
            let ledger = db.ledger(today)?;
            let history = db.stats_history()?;
            let sessions = config.sessions();
            println!(
                "completed sessions: {}/{} {:?}",
                ledger.completed_count(),
                sessions.len(),
                ledger.session_ids
            );
            if let Some(day) = history.today_stats(today) {
                for s in &day.sessions {
                    println!(
                        "  {}  {} ({}s, {})",
                        s.completed_at.format("%H:%M"),
                        s.name,
                        s.duration_seconds,
                        s.zone.as_str()
                    );
                }
            }
        }
    }
    Ok(())
}
