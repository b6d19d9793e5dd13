pub mod generate;
pub mod list;
pub mod session;

use std::path::{Path, PathBuf};

use colored::Colorize;

use fortune_core::{Fortune, FortuneConfig, FortuneEngine, TemplateBank};

/// Format of the "Generated on" line in the terminal view.
const GENERATED_ON_FORMAT: &str = "%b %d, %Y at %-I:%M %p";

/// Load the template bank from `path`, or the built-in tables when `None`.
pub fn load_bank(path: Option<&Path>) -> Result<TemplateBank, String> {
    match path {
        Some(p) => TemplateBank::from_path(p).map_err(|e| e.to_string()),
        None => Ok(TemplateBank::default()),
    }
}

/// Build an engine from CLI options.
pub fn build_engine(seed: Option<u64>, templates: Option<&Path>) -> Result<FortuneEngine, String> {
    let mut config = FortuneConfig::default().with_bank(load_bank(templates)?);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Ok(FortuneEngine::new(config))
}

/// Terminal view of a fortune.
pub fn render_fortune(fortune: &Fortune) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {} {}\n",
        "Fortune for".bold(),
        fortune.user_name.bold()
    ));
    out.push_str(&format!(
        "  Generated on: {}\n\n",
        fortune.local_timestamp().format(GENERATED_ON_FORMAT)
    ));
    out.push_str(&format!("  {}\n\n", fortune.message));
    out.push_str(&format!(
        "  Category: {} | Mood: {}\n",
        fortune.category, fortune.mood
    ));
    out.push_str(&format!(
        "  Lucky Number: {}\n",
        fortune.lucky_number.to_string().green()
    ));
    out.push_str(&format!("  Lucky Color: {}\n", fortune.lucky_color.green()));
    out.push_str(&format!(
        "  Confidence Level: {}%",
        fortune.confidence_level.to_string().green()
    ));
    out
}

/// Where to write an output file: the given file, a default-named file inside
/// the given directory, or a default-named file in the working directory.
pub fn resolve_output(path: Option<&Path>, default_name: &str) -> PathBuf {
    match path {
        Some(p) if p.is_dir() => p.join(default_name),
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(default_name),
    }
}

/// Write `content` to `path`.
pub fn write_output(path: &Path, content: &str) -> Result<(), String> {
    std::fs::write(path, content)
        .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
