//! Interactive fortune session.
//!
//! A `Session` drives one engine for its whole lifetime, so the history
//! accumulates across commands. Request settings (name, category, mood, range,
//! sound) persist between fortunes the way form fields do.

use std::path::Path;

use chrono::Local;
use comfy_table::{ContentArrangement, Table};

use fortune_core::export::{
    fortune_file_name, fortune_text, history_file_name, history_json, history_text,
};
use fortune_core::{Category, FortuneEngine, FortuneRequest, Mood};

use crate::commands::{render_fortune, resolve_output, write_output};

const HELP: &str = "\
Commands:
  fortune [name] [category [mood [range]]]
                       Generate a fortune; given fields become the new settings
                       (the name is everything before the category)
  name <text>          Set the name
  category <name>      Set the category (love, career, health, finance, general, adventure)
  mood <name>          Set the mood (happy, sad, excited, anxious, calm, adventurous, ...)
  range <n>            Set the lucky number range (at least 1)
  sound on|off         Ring the bell after each fortune
  settings             Show the current settings
  history              List every fortune generated this session, newest first
  show <n>             Show fortune number <n> from the history listing
  save [file]          Save the latest fortune as text
  export [file] [json] Export the whole history (JSON with 'json' or a .json file)
  clear                Clear the history
  categories | moods   List the available categories or moods
  quit                 Leave the session";

/// An interactive session over one engine.
pub struct Session {
    engine: FortuneEngine,
    name: Option<String>,
    category: Category,
    mood: Mood,
    range: u32,
    sound: bool,
}

impl Session {
    /// Start a session with the form defaults: General, Happy, range 50, sound on.
    pub fn new(engine: FortuneEngine) -> Self {
        Self {
            engine,
            name: None,
            category: Category::General,
            mood: Mood::Happy,
            range: 50,
            sound: true,
        }
    }

    /// Whether `input` ends the session.
    pub fn is_quit(input: &str) -> bool {
        let cmd = input.trim();
        cmd.eq_ignore_ascii_case("quit") || cmd.eq_ignore_ascii_case("q")
    }

    /// Process one line of input and return the text to show.
    pub fn process(&mut self, input: &str) -> Result<String, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "fortune" | "f" | "generate" => self.do_fortune(rest),
            "name" => self.do_name(rest),
            "category" => self.do_category(rest),
            "mood" => self.do_mood(rest),
            "range" => self.do_range(rest),
            "sound" => self.do_sound(rest),
            "settings" => Ok(self.settings()),
            "history" => Ok(self.do_history()),
            "show" => self.do_show(rest),
            "save" => self.do_save(rest),
            "export" => self.do_export(rest),
            "clear" => Ok(self.do_clear()),
            "categories" => Ok(Category::ALL
                .iter()
                .map(Category::to_string)
                .collect::<Vec<_>>()
                .join(", ")),
            "moods" => Ok(Mood::KNOWN
                .iter()
                .map(Mood::to_string)
                .collect::<Vec<_>>()
                .join(", ")),
            "help" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => Err(format!("unknown command: {cmd} (type 'help')")),
        }
    }

    fn do_fortune(&mut self, rest: &str) -> Result<String, String> {
        let args = FortuneArgs::parse(rest)?;
        if let Some(name) = args.name {
            self.name = Some(name);
        }
        if let Some(category) = args.category {
            self.category = category;
        }
        if let Some(mood) = args.mood {
            self.mood = mood;
        }
        if let Some(range) = args.range {
            self.range = range;
        }
        let Some(name) = self.name.as_deref() else {
            return Err("Please enter your name first! (fortune <name> or name <text>)".into());
        };

        let request = FortuneRequest::new(name, self.category, self.mood.clone(), self.range)
            .map_err(|e| e.to_string())?
            .with_sound(self.sound);
        let fortune = self.engine.generate(&request).map_err(|e| e.to_string())?;

        let mut output = render_fortune(&fortune);
        if request.sound_enabled {
            output.push('\x07');
        }
        Ok(output)
    }

    fn do_name(&mut self, rest: &str) -> Result<String, String> {
        if rest.is_empty() {
            return Err("usage: name <text>".into());
        }
        self.name = Some(rest.to_string());
        Ok(format!("Name: {rest}"))
    }

    fn do_category(&mut self, rest: &str) -> Result<String, String> {
        self.category = rest.parse::<Category>().map_err(|e| e.to_string())?;
        Ok(format!("Category: {}", self.category))
    }

    fn do_mood(&mut self, rest: &str) -> Result<String, String> {
        if rest.is_empty() {
            return Err("usage: mood <name>".into());
        }
        self.mood = Mood::parse(rest);
        if self.mood.is_known() {
            Ok(format!("Mood: {}", self.mood))
        } else {
            Ok(format!("Mood: {} (no modifier for this mood)", self.mood))
        }
    }

    fn do_range(&mut self, rest: &str) -> Result<String, String> {
        let range = parse_range(rest)?;
        self.range = range;
        Ok(format!("Lucky number range: 1-{range}"))
    }

    fn do_sound(&mut self, rest: &str) -> Result<String, String> {
        self.sound = match rest.to_lowercase().as_str() {
            "on" | "yes" | "true" => true,
            "off" | "no" | "false" => false,
            _ => return Err("usage: sound on|off".into()),
        };
        Ok(format!("Sound: {}", if self.sound { "on" } else { "off" }))
    }

    fn settings(&self) -> String {
        format!(
            "Name: {} | Category: {} | Mood: {} | Range: 1-{} | Sound: {}",
            self.name.as_deref().unwrap_or("(not set)"),
            self.category,
            self.mood,
            self.range,
            if self.sound { "on" } else { "off" }
        )
    }

    fn do_history(&self) -> String {
        let history = self.engine.history();
        if history.is_empty() {
            return "No fortunes generated yet.".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Fortune"]);
        for (i, fortune) in history.iter().enumerate() {
            table.add_row(vec![(i + 1).to_string(), fortune.summary_line()]);
        }
        format!("{table}\n  {} fortunes", history.len())
    }

    fn do_show(&self, rest: &str) -> Result<String, String> {
        let history = self.engine.history();
        let index: usize = rest
            .parse()
            .map_err(|_| "usage: show <n> (see 'history')".to_string())?;
        index
            .checked_sub(1)
            .and_then(|i| history.get(i))
            .map(ToString::to_string)
            .ok_or_else(|| format!("no fortune #{index} (history has {})", history.len()))
    }

    fn do_save(&self, rest: &str) -> Result<String, String> {
        let fortune = self
            .engine
            .latest()
            .ok_or_else(|| "No fortune to save yet.".to_string())?;
        let target = (!rest.is_empty()).then_some(Path::new(rest));
        let path = resolve_output(target, &fortune_file_name(Local::now()));
        write_output(&path, &fortune_text(fortune))?;
        Ok(format!("Fortune saved to {}", path.display()))
    }

    fn do_export(&self, rest: &str) -> Result<String, String> {
        let history = self.engine.history();
        if history.is_empty() {
            return Err("No fortunes to export!".into());
        }

        let (file, json_requested) = split_json_flag(rest);
        let now = Local::now();
        let default_name = history_file_name(now);
        let default_name = if json_requested {
            format!("{}.json", default_name.trim_end_matches(".txt"))
        } else {
            default_name
        };
        let target = (!file.is_empty()).then_some(Path::new(file));
        let path = resolve_output(target, &default_name);
        let content = if json_requested || path.extension().is_some_and(|ext| ext == "json") {
            history_json(&history).map_err(|e| e.to_string())?
        } else {
            history_text(&history, now)
        };
        write_output(&path, &content)?;
        Ok(format!(
            "Exported {} fortunes to {}",
            history.len(),
            path.display()
        ))
    }

    fn do_clear(&mut self) -> String {
        let removed = self.engine.clear_history();
        format!("Fortune history cleared ({removed} removed).")
    }
}

/// Fields given on a `fortune` line. `None` keeps the current setting.
#[derive(Debug, Default, PartialEq)]
struct FortuneArgs {
    name: Option<String>,
    category: Option<Category>,
    mood: Option<Mood>,
    range: Option<u32>,
}

impl FortuneArgs {
    /// Parse `[name] [category [mood [range]]]`. Names may contain spaces, so
    /// the first word naming a category ends the name.
    fn parse(rest: &str) -> Result<Self, String> {
        let words: Vec<&str> = rest.split_whitespace().collect();
        let Some(at) = words.iter().position(|w| w.parse::<Category>().is_ok()) else {
            return Ok(Self {
                name: (!words.is_empty()).then(|| words.join(" ")),
                ..Self::default()
            });
        };

        let trailing = &words[at + 1..];
        if trailing.len() > 2 {
            return Err(format!(
                "unexpected input after range: \"{}\" (usage: fortune [name] [category [mood [range]]])",
                trailing[2..].join(" ")
            ));
        }
        Ok(Self {
            name: (at > 0).then(|| words[..at].join(" ")),
            category: Some(words[at].parse::<Category>().map_err(|e| e.to_string())?),
            mood: trailing.first().map(|m| Mood::parse(m)),
            range: trailing.get(1).map(|r| parse_range(r)).transpose()?,
        })
    }
}

fn parse_range(text: &str) -> Result<u32, String> {
    let range: u32 = text
        .parse()
        .map_err(|_| format!("invalid range: \"{text}\" (expected a number of at least 1)"))?;
    if range == 0 {
        return Err(fortune_core::FortuneError::InvalidRange(range).to_string());
    }
    Ok(range)
}

/// Split a trailing `json` word off an export argument.
fn split_json_flag(rest: &str) -> (&str, bool) {
    if rest.eq_ignore_ascii_case("json") {
        return ("", true);
    }
    match rest.rsplit_once(char::is_whitespace) {
        Some((file, flag)) if flag.eq_ignore_ascii_case("json") => (file.trim_end(), true),
        _ => (rest, false),
    }
}
