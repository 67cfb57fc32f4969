//! JSON/CSV export and merge-by-date import.
//!
//! The JSON format is version "1.1.0" and byte-compatible with the original
//! app's export files, so histories can move between the two. Import is
//! all-or-nothing: the merged result is computed before anything is
//! returned, and a malformed file mutates nothing.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ImportError};
use crate::schedule::{NotificationScheduleConfig, WorkScheduleConfig};
use crate::stats::{DailyStats, StatsHistory};

pub const EXPORT_VERSION: &str = "1.1.0";

/// The settings subset that travels in an export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedSettings {
    pub enabled: bool,
    pub work_schedule: WorkScheduleConfig,
    pub notification_schedule: NotificationScheduleConfig,
}

/// Top-level export file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub version: String,
    pub exported_at: DateTime<Local>,
    pub exercise_history: Vec<DailyStats>,
    #[serde(default)]
    pub enabled_extra_exercises: Vec<u32>,
    #[serde(default)]
    pub advanced_settings: Option<ExportedSettings>,
}

/// What an import actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub exercises_imported: usize,
    pub extra_exercises_imported: usize,
    pub settings_imported: bool,
}

/// Merged state produced by an import, ready to persist.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub history: StatsHistory,
    pub enabled_extra_exercises: Vec<u32>,
    /// `Some` only when settings were absent locally and present in the file.
    pub settings: Option<ExportedSettings>,
    pub report: ImportReport,
}

/// Serialize the full export document.
pub fn export_json(
    history: &StatsHistory,
    enabled_extra_exercises: &[u32],
    settings: Option<ExportedSettings>,
    now: DateTime<Local>,
) -> Result<String, CoreError> {
    let data = ExportData {
        version: EXPORT_VERSION.into(),
        exported_at: now,
        exercise_history: history.days.clone(),
        enabled_extra_exercises: enabled_extra_exercises.to_vec(),
        advanced_settings: settings,
    };
    Ok(serde_json::to_string_pretty(&data)?)
}

/// One CSV row per completed exercise, 24-hour local time, names quoted
/// when they need it.
pub fn export_csv(history: &StatsHistory) -> Result<String, CoreError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Fecha", "Hora", "Ejercicio", "Zona", "Duración (segundos)"])?;

    for day in &history.days {
        for session in &day.sessions {
            writer.write_record([
                day.date.to_string(),
                session.completed_at.format("%H:%M").to_string(),
                session.name.clone(),
                session.zone.as_str().to_string(),
                session.duration_seconds.to_string(),
            ])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| CoreError::Custom(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CoreError::Custom(e.to_string()))
}

impl From<csv::Error> for CoreError {
    fn from(err: csv::Error) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Merge an export file into existing state.
///
/// Days already present in the history are never overwritten; only wholly
/// new dates are appended, then the list is re-sorted by date. Extra ids
/// are unioned. Settings are taken only when `has_local_settings` is false.
pub fn import_from_json(
    content: &str,
    history: &StatsHistory,
    enabled_extra_exercises: &[u32],
    has_local_settings: bool,
) -> Result<ImportOutcome, ImportError> {
    let data: ExportData =
        serde_json::from_str(content).map_err(|e| ImportError::InvalidFormat(e.to_string()))?;

    let existing_dates: Vec<NaiveDate> = history.days.iter().map(|d| d.date).collect();
    let new_days: Vec<DailyStats> = data
        .exercise_history
        .into_iter()
        .filter(|d| !existing_dates.contains(&d.date))
        .collect();
    let exercises_imported = new_days.iter().map(|d| d.sessions.len()).sum();

    let mut merged = history.clone();
    merged.days.extend(new_days);
    merged.days.sort_by_key(|d| d.date);

    let mut extra_ids = enabled_extra_exercises.to_vec();
    let mut extra_exercises_imported = 0;
    for id in data.enabled_extra_exercises {
        if !extra_ids.contains(&id) {
            extra_ids.push(id);
            extra_exercises_imported += 1;
        }
    }

    let settings = match (has_local_settings, data.advanced_settings) {
        (false, Some(settings)) => Some(settings),
        _ => None,
    };
    let settings_imported = settings.is_some();

    Ok(ImportOutcome {
        history: merged,
        enabled_extra_exercises: extra_ids,
        settings,
        report: ImportReport {
            exercises_imported,
            extra_exercises_imported,
            settings_imported,
        },
    })
}
