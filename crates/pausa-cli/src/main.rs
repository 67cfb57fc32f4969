use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;

#[derive(Parser)]
#[command(name = "pausa", version, about = "Pausa CLI - active pause reminders")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Session schedule
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Exercise catalog and smart selection
    Exercise {
        #[command(subcommand)]
        action: commands::exercise::ExerciseAction,
    },
    /// Complete sessions and inspect today's progress
    Session {
        #[command(subcommand)]
        action: commands::session::SessionAction,
    },
    /// Weekly statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Extra exercise catalog management
    Extra {
        #[command(subcommand)]
        action: commands::extra::ExtraAction,
    },
    /// Custom exercise management
    Custom {
        #[command(subcommand)]
        action: commands::custom::CustomAction,
    },
    /// Import and export history
    Data {
        #[command(subcommand)]
        action: commands::data::DataAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Poll for due sessions and dispatch reminders
    Watch {
        /// Poll interval in seconds
        #[arg(long, default_value_t = 60)]
        interval: u64,
        /// Send desktop notifications via notify-send
        #[arg(long)]
        desktop: bool,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Exercise { action } => commands::exercise::run(action),
        Commands::Session { action } => commands::session::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Extra { action } => commands::extra::run(action),
        Commands::Custom { action } => commands::custom::run(action),
        Commands::Data { action } => commands::data::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Watch { interval, desktop } => commands::watch::run(interval, desktop),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "pausa", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
