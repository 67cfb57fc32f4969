use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;
use pausa_core::export::{self, ExportedSettings};
use pausa_core::{Config, Database, ImportError};

#[derive(Subcommand)]
pub enum DataAction {
    /// Export history and settings as JSON
    ExportJson {
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Export history as CSV
    ExportCsv {
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Import a JSON export file (merge by date, never overwrites)
    Import { file: PathBuf },
}

fn write_out(content: &str, output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(&path, content)?;
            println!("written to {}", path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    let db = Database::open()?;
    let history = db.stats_history()?;

    match action {
        DataAction::ExportJson { output } => {
            let settings = ExportedSettings {
                enabled: config.advanced.enabled,
                work_schedule: config.advanced.work_schedule,
                notification_schedule: config.advanced.notification_schedule,
            };
            let json = export::export_json(
                &history,
                &config.advanced.enabled_extra_exercises,
                Some(settings),
                Local::now(),
            )?;
            write_out(&json, output)?;
        }
        DataAction::ExportCsv { output } => {
            let csv = export::export_csv(&history)?;
            write_out(&csv, output)?;
        }
        DataAction::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .map_err(|e| ImportError::Unreadable(e.to_string()))?;

            let outcome = export::import_from_json(
                &content,
                &history,
                &config.advanced.enabled_extra_exercises,
                config.has_custom_settings(),
            )?;

            db.save_stats_history(&outcome.history)?;
            config.advanced.enabled_extra_exercises = outcome.enabled_extra_exercises.clone();
            if let Some(settings) = outcome.settings {
                config.advanced.enabled = settings.enabled;
                config.advanced.work_schedule = settings.work_schedule;
                config.advanced.notification_schedule = settings.notification_schedule;
            }
            config.save()?;

            println!("{}", serde_json::to_string_pretty(&outcome.report)?);
        }
    }
    Ok(())
}
