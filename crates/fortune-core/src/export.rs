//! Plain-text and JSON renderings of fortunes for saving to disk.

use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::error::{FortuneError, FortuneResult};
use crate::fortune::Fortune;

/// Title line of a history export.
pub const HISTORY_TITLE: &str = "DAILY FORTUNE GENERATOR - HISTORY EXPORT";

/// Format of the "Exported on" line.
pub const EXPORTED_ON_FORMAT: &str = "%B %d, %Y at %-I:%M %p";

const HEADER_RULE_WIDTH: usize = 60;

/// Render a single fortune as saved by the "save" action, dated in local time.
pub fn fortune_text(fortune: &Fortune) -> String {
    format!("{fortune}\n")
}

/// Render a history export: a header followed by every fortune, each
/// separated by a blank line. Every date is shown in `exported_at`'s time zone.
pub fn history_text<Tz: TimeZone>(fortunes: &[Fortune], exported_at: DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    let tz = exported_at.timezone();
    let mut out = format!("{HISTORY_TITLE}\n");
    out.push_str(&format!(
        "Exported on: {}\n",
        exported_at.format(EXPORTED_ON_FORMAT)
    ));
    out.push_str(&"=".repeat(HEADER_RULE_WIDTH));
    out.push_str("\n\n");
    for fortune in fortunes {
        out.push_str(&fortune.text_in(&tz));
        out.push_str("\n\n");
    }
    out
}

/// Render fortunes as a pretty-printed JSON array.
pub fn history_json(fortunes: &[Fortune]) -> FortuneResult<String> {
    serde_json::to_string_pretty(fortunes)
        .map_err(|e| FortuneError::Serialization(e.to_string()))
}

/// Default file name for a saved fortune, e.g. `Fortune_20260305_140700.txt`.
pub fn fortune_file_name<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("Fortune_{}.txt", at.format("%Y%m%d_%H%M%S"))
}

/// Default file name for a history export.
pub fn history_file_name<Tz: TimeZone>(at: DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("FortuneHistory_{}.txt", at.format("%Y%m%d_%H%M%S"))
}
