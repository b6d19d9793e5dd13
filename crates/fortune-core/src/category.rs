//! Fortune categories and requester moods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FortuneError;

/// Which template group a fortune is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Romance and relationships.
    Love,
    /// Work and professional life.
    Career,
    /// Body and mind.
    Health,
    /// Money matters.
    Finance,
    /// Anything at all.
    General,
    /// Travel, risk, and discovery.
    Adventure,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 6] = [
        Category::Love,
        Category::Career,
        Category::Health,
        Category::Finance,
        Category::General,
        Category::Adventure,
    ];

    /// The canonical name of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Love => "Love",
            Self::Career => "Career",
            Self::Health => "Health",
            Self::Finance => "Finance",
            Self::General => "General",
            Self::Adventure => "Adventure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FortuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FortuneError::UnknownCategory(trimmed.to_string()))
    }
}

/// The requester's stated mood.
///
/// Moods outside the known set are kept verbatim in [`Mood::Other`]. They are
/// echoed on the fortune but add no modifier sentence and no confidence bonus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    /// Cheerful.
    Happy,
    /// Down.
    Sad,
    /// Eager.
    Excited,
    /// Worried.
    Anxious,
    /// At peace.
    Calm,
    /// Up for anything.
    Adventurous,
    /// Any other mood text. Build moods with [`Mood::parse`] so that known
    /// names never end up here; the engine normalizes requests with
    /// [`Mood::normalized`] either way.
    Other(String),
}

impl Mood {
    /// The known moods, in display order.
    pub const KNOWN: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Excited,
        Mood::Anxious,
        Mood::Calm,
        Mood::Adventurous,
    ];

    /// Parse a mood name, case-insensitively. Never fails.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        Self::KNOWN
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Mood::Other(trimmed.to_string()))
    }

    /// Map an `Other` holding a known name (in any case) to that known mood.
    pub fn normalized(self) -> Self {
        match self {
            Self::Other(text) => Self::parse(&text),
            known => known,
        }
    }

    /// The name of this mood.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Excited => "Excited",
            Self::Anxious => "Anxious",
            Self::Calm => "Calm",
            Self::Adventurous => "Adventurous",
            Self::Other(s) => s,
        }
    }

    /// Whether this is one of the known moods.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Mood {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Mood> for String {
    fn from(m: Mood) -> Self {
        m.as_str().to_string()
    }
}
