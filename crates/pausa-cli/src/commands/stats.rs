use std::collections::BTreeMap;

use chrono::Local;
use clap::Subcommand;
use pausa_core::exercise::Zone;
use pausa_core::stats::{self, DayActivity, ZoneTally};
use pausa_core::Database;
use serde::Serialize;

#[derive(Subcommand)]
pub enum StatsAction {
    /// This week's summary
    Week,
    /// Today's completions
    Today,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WeeklySummary {
    range: String,
    session_count: usize,
    total_seconds: u64,
    total_time: String,
    zones: BTreeMap<Zone, ZoneTally>,
    days: Vec<DayActivity>,
    least_worked_zones: Vec<Zone>,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let history = db.stats_history()?;
    let today = Local::now().date_naive();

    match action {
        StatsAction::Week => {
            let summary = WeeklySummary {
                range: stats::week_range_label(today),
                session_count: history.weekly_session_count(today),
                total_seconds: history.weekly_total_seconds(today),
                total_time: stats::format_seconds_to_minutes(history.weekly_total_seconds(today)),
                zones: history.weekly_zone_distribution(today),
                days: history.weekly_daily_counts(today),
                least_worked_zones: history.least_worked_zones(today),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Today => match history.today_stats(today) {
            Some(day) => println!("{}", serde_json::to_string_pretty(day)?),
            None => println!("no completions today"),
        },
    }
    Ok(())
}
