use clap::Subcommand;
use pausa_core::exercise::custom::{self, CustomExercise};
use pausa_core::exercise::{Posture, Zone};
use pausa_core::Config;

#[derive(Subcommand)]
pub enum CustomAction {
    /// Create a custom exercise (validated before saving)
    Add {
        #[arg(long)]
        name: String,
        /// Body zone: cuello, hombros, espalda, cadera, piernas, de_pie
        #[arg(long)]
        zone: String,
        /// Posture: sitting or standing
        #[arg(long)]
        posture: String,
        /// Duration in seconds (15-45)
        #[arg(long)]
        duration: u32,
        #[arg(long)]
        movement: String,
        #[arg(long)]
        objective: String,
    },
    /// List custom exercises
    List,
    /// Remove a custom exercise by its string id
    Remove { id: String },
}

fn parse_zone(value: &str) -> Result<Zone, Box<dyn std::error::Error>> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown zone '{value}'").into())
}

fn parse_posture(value: &str) -> Result<Posture, Box<dyn std::error::Error>> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown posture '{value}'").into())
}

pub fn run(action: CustomAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();

    match action {
        CustomAction::Add {
            name,
            zone,
            posture,
            duration,
            movement,
            objective,
        } => {
            if !custom::can_add_more(&config.advanced.custom_exercises) {
                return Err(format!(
                    "cannot add more than {} custom exercises",
                    custom::MAX_CUSTOM_EXERCISES
                )
                .into());
            }
            let exercise = CustomExercise::new(
                &name,
                parse_zone(&zone)?,
                parse_posture(&posture)?,
                duration,
                &movement,
                &objective,
            )?;
            let id = exercise.id.clone();
            let numeric_id = exercise.numeric_id();
            config.advanced.custom_exercises.push(exercise);
            config.save()?;
            println!("custom exercise created: {id} (catalog id {numeric_id})");
        }
        CustomAction::List => {
            for c in &config.advanced.custom_exercises {
                println!(
                    "{}  {:<8} {:>3}s  {} (catalog id {})",
                    c.id,
                    c.zone.as_str(),
                    c.duration_seconds,
                    c.name,
                    c.numeric_id()
                );
            }
            println!(
                "{}/{} custom exercises",
                config.advanced.custom_exercises.len(),
                custom::MAX_CUSTOM_EXERCISES
            );
        }
        CustomAction::Remove { id } => {
            let before = config.advanced.custom_exercises.len();
            config.advanced.custom_exercises.retain(|c| c.id != id);
            if config.advanced.custom_exercises.len() == before {
                return Err(format!("no custom exercise with id: {id}").into());
            }
            config.save()?;
            println!("custom exercise removed: {id}");
        }
    }
    Ok(())
}
