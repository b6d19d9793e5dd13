//! CLI frontend for the fortune engine.

mod commands;
mod session;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fortune",
    about = "Daily fortune generator: personalized fortunes from a template bank",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single fortune
    Generate(commands::generate::GenerateArgs),

    /// Start an interactive session that keeps a fortune history
    Session {
        /// RNG seed for reproducible fortunes
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON template bank to use instead of the built-in tables
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// List fortune categories and how many templates each has
    Categories {
        /// JSON template bank to inspect instead of the built-in tables
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },

    /// List known moods and how many modifiers each has
    Moods {
        /// JSON template bank to inspect instead of the built-in tables
        #[arg(short, long)]
        templates: Option<PathBuf>,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate::run(&args),
        Commands::Session { seed, templates } => {
            commands::session::run(seed, templates.as_deref())
        }
        Commands::Categories { templates } => commands::list::categories(templates.as_deref()),
        Commands::Moods { templates } => commands::list::moods(templates.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
