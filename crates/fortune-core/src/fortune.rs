//! Fortune requests and generated fortune records.

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, Mood};
use crate::error::{FortuneError, FortuneResult};

/// Date format used in the fortune text header.
pub const DATE_FORMAT: &str = "%b %d, %Y";

/// Date-and-time format used in history list rows.
pub const SUMMARY_FORMAT: &str = "%b %d, %Y %-I:%M %p";

/// Width of the dashed line closing each fortune's text block.
pub const SEPARATOR_WIDTH: usize = 50;

/// What the caller asks the engine for. Built per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneRequest {
    /// Requester's name, substituted into the template.
    pub name: String,
    /// Template group to draw from.
    pub category: Category,
    /// Requester's mood.
    pub mood: Mood,
    /// Upper bound (inclusive) for the lucky number. Must be at least 1.
    pub lucky_number_range: u32,
    /// Whether the front end should play a sound. The engine ignores it.
    pub sound_enabled: bool,
}

impl FortuneRequest {
    /// Build a validated request. The name is trimmed and the mood normalized;
    /// blank names and a zero range are rejected.
    pub fn new(
        name: &str,
        category: Category,
        mood: Mood,
        lucky_number_range: u32,
    ) -> FortuneResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FortuneError::BlankName);
        }
        if lucky_number_range == 0 {
            return Err(FortuneError::InvalidRange(lucky_number_range));
        }
        Ok(Self {
            name: name.to_string(),
            category,
            mood: mood.normalized(),
            lucky_number_range,
            sound_enabled: false,
        })
    }

    /// Turn the sound flag on or off.
    pub fn with_sound(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }
}

/// A generated fortune. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fortune {
    /// Name the fortune was generated for.
    pub user_name: String,
    /// Category it was drawn from.
    pub category: Category,
    /// Mood stated at generation time.
    pub mood: Mood,
    /// Message text, name substituted and mood modifier appended.
    pub message: String,
    /// Lucky number in `1..=lucky_number_range`.
    pub lucky_number: u32,
    /// Lucky color from the palette.
    pub lucky_color: String,
    /// Confidence level in `50..=95`.
    pub confidence_level: u32,
    /// When it was generated.
    pub timestamp: DateTime<Utc>,
}

impl Fortune {
    /// When it was generated, in the local time zone.
    pub fn local_timestamp(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }

    /// One-line description for history listings, in local time.
    pub fn summary_line(&self) -> String {
        self.summary_line_in(&Local)
    }

    /// One-line description for history listings, with the time shown in `tz`.
    pub fn summary_line_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        format!(
            "{} - {} ({})",
            self.timestamp.with_timezone(tz).format(SUMMARY_FORMAT),
            self.category,
            self.user_name
        )
    }

    /// The text block for this fortune with the header date shown in `tz`.
    /// [`Display`](fmt::Display) renders the same block in local time.
    pub fn text_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        format!(
            "Fortune for {} - {}\n\
             Category: {} | Mood: {}\n\
             Message: {}\n\
             Lucky Number: {} | Lucky Color: {}\n\
             Confidence: {}%\n\
             {}",
            self.user_name,
            self.timestamp.with_timezone(tz).format(DATE_FORMAT),
            self.category,
            self.mood,
            self.message,
            self.lucky_number,
            self.lucky_color,
            self.confidence_level,
            "-".repeat(SEPARATOR_WIDTH)
        )
    }
}

impl fmt::Display for Fortune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text_in(&Local))
    }
}
