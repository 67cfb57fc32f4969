use chrono::Local;
use clap::Subcommand;
use pausa_core::exercise::selector::{self, RECENT_LIMIT};
use pausa_core::exercise::catalog;
use pausa_core::{Config, Database};

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// List the active catalog (native + enabled extras + customs)
    List {
        #[arg(long)]
        json: bool,
    },
    /// Smart-pick the next exercise
    Pick {
        /// Exclude an exercise id (the one currently on screen)
        #[arg(long)]
        exclude: Option<u32>,
    },
}

pub fn run(action: ExerciseAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let catalog = catalog::all_exercises(
        config.preferences.postures,
        &config.advanced.enabled_extra_exercises,
        &config.advanced.custom_exercises,
    );

    match action {
        ExerciseAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&catalog)?);
            } else {
                for e in &catalog {
                    println!(
                        "{:>5}  {:<8} {:<9} {:>3}s  {}",
                        e.id,
                        e.zone.as_str(),
                        format!("{:?}", e.posture).to_lowercase(),
                        e.duration_seconds,
                        e.name
                    );
                }
                println!("{} exercises", catalog.len());
            }
        }
        ExerciseAction::Pick { exclude } => {
            let db = Database::open()?;
            let history = db.stats_history()?;
            let today = Local::now().date_naive();

            let least_worked = history.least_worked_zones(today);
            let recent = history.recent_exercise_ids(RECENT_LIMIT);

            match selector::pick_next(
                &catalog,
                exclude,
                &least_worked,
                &recent,
                &mut selector::thread_jitter(),
            ) {
                Some(exercise) => println!("{}", serde_json::to_string_pretty(&exercise)?),
                None => println!("no exercises match the current posture preferences"),
            }
        }
    }
    Ok(())
}
