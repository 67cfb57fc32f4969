use clap::Subcommand;
use pausa_core::exercise::catalog;
use pausa_core::Config;

#[derive(Subcommand)]
pub enum ExtraAction {
    /// List the extra catalog and which entries are enabled
    List,
    /// Enable an extra exercise by id
    Enable { id: u32 },
    /// Disable an extra exercise by id
    Disable { id: u32 },
}

pub fn run(action: ExtraAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();

    match action {
        ExtraAction::List => {
            for e in catalog::extra_exercises() {
                let enabled = config.advanced.enabled_extra_exercises.contains(&e.id);
                println!(
                    "{:>5}  [{}] {:<8} {}",
                    e.id,
                    if enabled { "x" } else { " " },
                    e.zone.as_str(),
                    e.name
                );
            }
        }
        ExtraAction::Enable { id } => {
            if !catalog::extra_exercises().iter().any(|e| e.id == id) {
                return Err(format!("unknown extra exercise id: {id}").into());
            }
            if !config.advanced.enabled_extra_exercises.contains(&id) {
                config.advanced.enabled_extra_exercises.push(id);
                config.save()?;
            }
            println!("extra exercise {id} enabled");
        }
        ExtraAction::Disable { id } => {
            config.advanced.enabled_extra_exercises.retain(|e| *e != id);
            config.save()?;
            println!("extra exercise {id} disabled");
        }
    }
    Ok(())
}
