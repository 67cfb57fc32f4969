use chrono::Local;
use clap::Subcommand;
use pausa_core::schedule::clock;
use pausa_core::schedule::clock::REMINDER_TOLERANCE_MIN;
use pausa_core::{Config, Database, WorkScheduleConfig};

#[derive(Subcommand)]
pub enum ScheduleAction {
    /// Show today's session slots
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Next session and time remaining
    Next,
    /// Current schedule status (work hours, active session, completion)
    Status,
    /// Set the work schedule (enables advanced settings)
    Set {
        /// Work window start, HH:MM
        #[arg(long)]
        start: String,
        /// Work window end, HH:MM
        #[arg(long)]
        end: String,
        /// Sessions per day (6, 8 or 12)
        #[arg(long)]
        sessions: u32,
    },
}

fn parse_hhmm(value: &str) -> Result<(u32, u32), Box<dyn std::error::Error>> {
    let time = chrono::NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| format!("invalid time '{value}', expected HH:MM"))?;
    use chrono::Timelike;
    Ok((time.hour(), time.minute()))
}

pub fn run(action: ScheduleAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ScheduleAction::Show { json } => {
            let config = Config::load_or_default();
            let sessions = config.sessions();
            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
            } else {
                println!("schedule: {}", clock::schedule_range_label(&sessions));
                for s in &sessions {
                    println!("  session {:>2}  {}", s.id, s.label);
                }
            }
        }
        ScheduleAction::Next => {
            let config = Config::load_or_default();
            let sessions = config.sessions();
            let now = clock::minutes_since_midnight(Local::now().time());
            match clock::next_session(&sessions, now) {
                Some(next) => {
                    let until = clock::time_until_next(&sessions, now)
                        .map(clock::format_time_until)
                        .unwrap_or_default();
                    println!("next session {} at {} (in {})", next.id, next.label, until);
                }
                None => println!("no sessions scheduled"),
            }
        }
        ScheduleAction::Status => {
            let config = Config::load_or_default();
            let db = Database::open()?;
            let sessions = config.sessions();
            let now = clock::minutes_since_midnight(Local::now().time());
            let today = Local::now().date_naive();
            let ledger = db.ledger(today)?;

            let work_schedule = config.effective_work_schedule();
            println!(
                "within work hours: {}",
                clock::is_within_work_hours(&work_schedule, now)
            );
            println!(
                "session active now: {}",
                clock::is_session_time(&sessions, now, REMINDER_TOLERANCE_MIN)
            );
            match clock::current_session_id(&sessions, now) {
                Some(id) => println!(
                    "current session: {} (completed: {})",
                    id,
                    ledger.is_completed(id)
                ),
                None => println!("current session: none"),
            }
            println!(
                "completed today: {}/{}",
                ledger.completed_count(),
                sessions.len()
            );
        }
        ScheduleAction::Set { start, end, sessions } => {
            let (start_hour, start_minute) = parse_hhmm(&start)?;
            let (end_hour, end_minute) = parse_hhmm(&end)?;
            let schedule = WorkScheduleConfig {
                start_hour,
                start_minute,
                end_hour,
                end_minute,
                session_count: sessions,
            };
            // Invalid windows never reach the config file.
            schedule.validate()?;

            let mut config = Config::load_or_default();
            config.advanced.enabled = true;
            config.advanced.work_schedule = schedule;
            config.save()?;
            println!("work schedule updated: {start} - {end}, {sessions} sessions");
        }
    }
    Ok(())
}
