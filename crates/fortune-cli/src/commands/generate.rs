use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use fortune_core::export::{fortune_file_name, fortune_text};
use fortune_core::{Category, FortuneRequest, Mood};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Name to personalize the fortune with
    pub name: String,

    /// Category: love, career, health, finance, general, adventure
    #[arg(short, long, default_value = "General")]
    pub category: String,

    /// Mood: happy, sad, excited, anxious, calm, adventurous (anything else is accepted)
    #[arg(short, long, default_value = "Happy")]
    pub mood: String,

    /// Upper bound for the lucky number (at least 1)
    #[arg(short, long, default_value = "50")]
    pub range: u32,

    /// Ring the terminal bell when the fortune is ready
    #[arg(long)]
    pub sound: bool,

    /// RNG seed for a reproducible fortune
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON template bank to use instead of the built-in tables
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Also save the fortune as text (file or directory)
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Output format: pretty, text, json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,
}

pub fn run(args: &GenerateArgs) -> Result<(), String> {
    if !matches!(args.format.as_str(), "pretty" | "text" | "json") {
        return Err(format!(
            "unsupported format: \"{}\". Use: pretty, text, json",
            args.format
        ));
    }

    let category = args
        .category
        .parse::<Category>()
        .map_err(|e| e.to_string())?;
    let request = FortuneRequest::new(&args.name, category, Mood::parse(&args.mood), args.range)
        .map_err(|e| e.to_string())?
        .with_sound(args.sound);

    let mut engine = super::build_engine(args.seed, args.templates.as_deref())?;
    let fortune = engine.generate(&request).map_err(|e| e.to_string())?;

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&fortune)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        "text" => print!("{}", fortune_text(&fortune)),
        _ => println!("{}", super::render_fortune(&fortune)),
    }

    if let Some(target) = &args.save {
        let path = super::resolve_output(Some(target), &fortune_file_name(Local::now()));
        super::write_output(&path, &fortune_text(&fortune))?;
        eprintln!("  Saved to {}", path.display());
    }

    if request.sound_enabled {
        print!("\x07");
        io::stdout().flush().map_err(|e| e.to_string())?;
    }

    Ok(())
}
