//! Completion history and weekly aggregation.
//!
//! History is an ordered list of per-day records; entries are created
//! lazily the first time a day has a completion and never edited or
//! deleted afterwards (bulk import can only add wholly new days). Weekly
//! views cover Monday..Sunday of the week containing `today`.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::exercise::Zone;

/// One recorded completion. Append-only. CamelCase on the wire so export
/// files match the original app's format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedExercise {
    pub id: u32,
    pub name: String,
    pub zone: Zone,
    pub duration_seconds: u32,
    pub completed_at: DateTime<Local>,
}

/// All completions of one calendar day, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub sessions: Vec<CompletedExercise>,
}

/// Per-zone weekly tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTally {
    pub count: u32,
    pub total_seconds: u32,
}

/// One cell of the Monday..Sunday activity strip. Output-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    pub day: &'static str,
    pub date: NaiveDate,
    pub count: usize,
    pub is_today: bool,
}

/// Single-letter Spanish day labels, Monday first.
const DAY_LABELS: [&str; 7] = ["L", "M", "X", "J", "V", "S", "D"];

const MONTH_LABELS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Monday and Sunday of the week containing `today`.
pub fn week_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = today.weekday().num_days_from_monday() as i64;
    let monday = today - chrono::Duration::days(offset);
    (monday, monday + chrono::Duration::days(6))
}

/// The durable completion record, ordered ascending by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsHistory {
    pub days: Vec<DailyStats>,
}

impl StatsHistory {
    /// Append a completion to `today`, creating the day entry lazily.
    pub fn record(&mut self, exercise: CompletedExercise, today: NaiveDate) {
        match self.days.iter_mut().find(|d| d.date == today) {
            Some(day) => day.sessions.push(exercise),
            None => self.days.push(DailyStats {
                date: today,
                sessions: vec![exercise],
            }),
        }
    }

    pub fn today_stats(&self, today: NaiveDate) -> Option<&DailyStats> {
        self.days.iter().find(|d| d.date == today)
    }

    /// Days falling in the week of `today`.
    pub fn weekly_days(&self, today: NaiveDate) -> impl Iterator<Item = &DailyStats> {
        let (monday, sunday) = week_range(today);
        self.days
            .iter()
            .filter(move |d| d.date >= monday && d.date <= sunday)
    }

    pub fn weekly_session_count(&self, today: NaiveDate) -> usize {
        self.weekly_days(today).map(|d| d.sessions.len()).sum()
    }

    pub fn weekly_total_seconds(&self, today: NaiveDate) -> u64 {
        self.weekly_days(today)
            .flat_map(|d| d.sessions.iter())
            .map(|s| s.duration_seconds as u64)
            .sum()
    }

    /// Weekly tally per zone. Every zone is present, zeroed when idle, so
    /// consumers never deal with missing keys.
    pub fn weekly_zone_distribution(&self, today: NaiveDate) -> BTreeMap<Zone, ZoneTally> {
        let mut distribution: BTreeMap<Zone, ZoneTally> =
            Zone::ALL.iter().map(|z| (*z, ZoneTally::default())).collect();

        for session in self.weekly_days(today).flat_map(|d| d.sessions.iter()) {
            let tally = distribution.entry(session.zone).or_default();
            tally.count += 1;
            tally.total_seconds += session.duration_seconds;
        }
        distribution
    }

    /// Zones ordered ascending by weekly completion count; ties keep
    /// enumeration order (stable sort).
    pub fn least_worked_zones(&self, today: NaiveDate) -> Vec<Zone> {
        let distribution = self.weekly_zone_distribution(today);
        let mut zones = Zone::ALL.to_vec();
        zones.sort_by_key(|z| distribution[z].count);
        zones
    }

    /// Seven entries covering Monday..Sunday of the current week; days
    /// without a record count 0 rather than being absent.
    pub fn weekly_daily_counts(&self, today: NaiveDate) -> Vec<DayActivity> {
        let (monday, _) = week_range(today);
        DAY_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let date = monday + chrono::Duration::days(i as i64);
                let count = self
                    .days
                    .iter()
                    .find(|d| d.date == date)
                    .map_or(0, |d| d.sessions.len());
                DayActivity {
                    day: label,
                    date,
                    count,
                    is_today: date == today,
                }
            })
            .collect()
    }

    /// Ids of the most recent completions, most recent first, walking days
    /// then sessions in reverse. Duplicates are kept; callers only test
    /// membership.
    pub fn recent_exercise_ids(&self, limit: usize) -> Vec<u32> {
        let mut recent = Vec::with_capacity(limit);
        for day in self.days.iter().rev() {
            for session in day.sessions.iter().rev() {
                if recent.len() >= limit {
                    return recent;
                }
                recent.push(session.id);
            }
        }
        recent
    }
}

/// "Ene 5 - Ene 11" style label for the week of `today`.
pub fn week_range_label(today: NaiveDate) -> String {
    let (monday, sunday) = week_range(today);
    format!(
        "{} {} - {} {}",
        MONTH_LABELS[monday.month0() as usize],
        monday.day(),
        MONTH_LABELS[sunday.month0() as usize],
        sunday.day()
    )
}

/// Rounded "Xmin" display of a seconds total.
pub fn format_seconds_to_minutes(seconds: u64) -> String {
    format!("{}min", (seconds as f64 / 60.0).round() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn completed(id: u32, zone: Zone, secs: u32) -> CompletedExercise {
        CompletedExercise {
            id,
            name: format!("Ejercicio {id}"),
            zone,
            duration_seconds: secs,
            completed_at: Local.with_ymd_and_hms(2024, 3, 11, 10, 5, 0).unwrap(),
        }
    }

    #[test]
    fn week_range_monday_start() {
        // 2024-03-13 is a Wednesday.
        let (monday, sunday) = week_range(day("2024-03-13"));
        assert_eq!(monday, day("2024-03-11"));
        assert_eq!(sunday, day("2024-03-17"));
    }

    #[test]
    fn week_range_sunday_maps_to_offset_six() {
        let (monday, sunday) = week_range(day("2024-03-17"));
        assert_eq!(monday, day("2024-03-11"));
        assert_eq!(sunday, day("2024-03-17"));
    }

    #[test]
    fn record_creates_day_lazily_and_appends() {
        let mut history = StatsHistory::default();
        history.record(completed(1, Zone::Cuello, 40), day("2024-03-11"));
        history.record(completed(2, Zone::Cuello, 40), day("2024-03-11"));
        assert_eq!(history.days.len(), 1);
        assert_eq!(history.days[0].sessions.len(), 2);
    }

    #[test]
    fn weekly_aggregation_worked_example() {
        // Monday: two cuello sessions of 40s; Wednesday: one hombros of 30s.
        let mut history = StatsHistory::default();
        history.record(completed(1, Zone::Cuello, 40), day("2024-03-11"));
        history.record(completed(2, Zone::Cuello, 40), day("2024-03-11"));
        history.record(completed(4, Zone::Hombros, 30), day("2024-03-13"));

        let today = day("2024-03-14");
        assert_eq!(history.weekly_session_count(today), 3);
        assert_eq!(history.weekly_total_seconds(today), 110);

        let distribution = history.weekly_zone_distribution(today);
        assert_eq!(distribution[&Zone::Cuello], ZoneTally { count: 2, total_seconds: 80 });
        assert_eq!(distribution[&Zone::Hombros], ZoneTally { count: 1, total_seconds: 30 });
        assert_eq!(distribution[&Zone::Piernas], ZoneTally::default());
        assert_eq!(distribution.len(), 6);
    }

    #[test]
    fn previous_week_is_excluded() {
        let mut history = StatsHistory::default();
        history.record(completed(1, Zone::Cuello, 40), day("2024-03-08"));
        assert_eq!(history.weekly_session_count(day("2024-03-11")), 0);
    }

    #[test]
    fn least_worked_zones_ascending_with_stable_ties() {
        let mut history = StatsHistory::default();
        let today = day("2024-03-11");
        history.record(completed(1, Zone::Cuello, 40), today);
        history.record(completed(2, Zone::Cuello, 40), today);
        history.record(completed(7, Zone::Espalda, 40), today);

        let zones = history.least_worked_zones(today);
        // Untouched zones first in enumeration order, then espalda (1),
        // then cuello (2).
        assert_eq!(
            zones,
            vec![Zone::Hombros, Zone::Cadera, Zone::Piernas, Zone::DePie, Zone::Espalda, Zone::Cuello]
        );
    }

    #[test]
    fn daily_counts_cover_full_week_with_zeros() {
        let mut history = StatsHistory::default();
        let today = day("2024-03-13");
        history.record(completed(1, Zone::Cuello, 40), today);

        let counts = history.weekly_daily_counts(today);
        assert_eq!(counts.len(), 7);
        assert_eq!(counts[0].day, "L");
        assert_eq!(counts[6].day, "D");
        assert_eq!(counts[2].count, 1);
        assert!(counts[2].is_today);
        assert_eq!(counts.iter().filter(|c| c.is_today).count(), 1);
        assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), 1);
    }

    #[test]
    fn recent_ids_reverse_chronological_with_duplicates() {
        let mut history = StatsHistory::default();
        history.record(completed(1, Zone::Cuello, 40), day("2024-03-11"));
        history.record(completed(2, Zone::Cuello, 40), day("2024-03-11"));
        history.record(completed(2, Zone::Cuello, 40), day("2024-03-12"));
        history.record(completed(3, Zone::Espalda, 40), day("2024-03-12"));

        assert_eq!(history.recent_exercise_ids(3), vec![3, 2, 2]);
        assert_eq!(history.recent_exercise_ids(10), vec![3, 2, 2, 1]);
    }

    #[test]
    fn week_label_spans_months() {
        // Week of 2024-01-31 runs Jan 29 - Feb 4.
        assert_eq!(week_range_label(day("2024-01-31")), "Ene 29 - Feb 4");
    }

    #[test]
    fn seconds_to_minutes_rounds() {
        assert_eq!(format_seconds_to_minutes(110), "2min");
        assert_eq!(format_seconds_to_minutes(89), "1min");
    }
}
