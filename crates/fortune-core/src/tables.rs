//! Template bank: message templates, mood modifiers, and the lucky-color palette.
//!
//! The built-in tables are used unless a custom bank is loaded from JSON:
//!
//! ```text
//! {
//!   "templates": { "Love": ["Romance finds you, {name}."], ... },
//!   "moods": { "Happy": [" Smile!"], ... },
//!   "colors": ["Red", "Blue"]
//! }
//! ```
//!
//! Every template must contain exactly one `{name}` placeholder. Categories
//! missing from a custom bank cannot be generated; moods missing from it simply
//! get no modifier.

use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::category::{Category, Mood};
use crate::error::{FortuneError, FortuneResult};

/// Placeholder replaced by the requester's name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Built-in love templates.
pub const LOVE_TEMPLATES: &[&str] = &[
    "Love is in the air for you, {name}! A special someone may enter your life when you least expect it.",
    "Your heart will guide you to happiness, {name}. Trust your romantic instincts today.",
    "A meaningful connection awaits you, {name}. Be open to new relationships and deeper bonds.",
    "Romance blooms where kindness grows, {name}. Your compassionate nature will attract love.",
    "The stars align for matters of the heart, {name}. Love will find its way to you.",
];

/// Built-in career templates.
pub const CAREER_TEMPLATES: &[&str] = &[
    "Professional success is on the horizon, {name}! Your hard work will soon pay off.",
    "A new opportunity will present itself to you, {name}. Be ready to seize the moment.",
    "Your leadership qualities will shine bright today, {name}. Others will look to you for guidance.",
    "Innovation and creativity will be your keys to success, {name}. Think outside the box.",
    "A mentor or colleague will offer valuable advice, {name}. Listen carefully to their wisdom.",
];

/// Built-in health templates.
pub const HEALTH_TEMPLATES: &[&str] = &[
    "Your body and mind are in perfect harmony today, {name}. Embrace this positive energy.",
    "A healthy lifestyle choice you make today will benefit you greatly, {name}.",
    "Listen to your body's needs, {name}. Rest and rejuvenation are calling to you.",
    "Physical activity will bring you joy and vitality, {name}. Move your body with purpose.",
    "Mental clarity and emotional balance are yours to claim, {name}. Meditate on your goals.",
];

/// Built-in finance templates.
pub const FINANCE_TEMPLATES: &[&str] = &[
    "Financial abundance flows toward you, {name}! A wise investment decision awaits.",
    "Your practical approach to money will serve you well, {name}. Trust your financial instincts.",
    "An unexpected source of income may surprise you, {name}. Keep your eyes open for opportunities.",
    "Saving money today will lead to greater prosperity tomorrow, {name}. Be mindful of your spending.",
    "A financial goal you've been working toward is closer than you think, {name}.",
];

/// Built-in general templates.
pub const GENERAL_TEMPLATES: &[&str] = &[
    "Today brings new possibilities and fresh perspectives, {name}. Embrace the unknown with confidence.",
    "Your positive attitude will attract wonderful experiences, {name}. Smile and the world smiles with you.",
    "A pleasant surprise awaits you before the day ends, {name}. Stay alert for unexpected joys.",
    "Your intuition is particularly strong today, {name}. Trust your inner voice to guide you.",
    "Good fortune follows those who help others, {name}. Your kindness will be rewarded.",
    "The universe conspires to help you achieve your dreams, {name}. Take that first step forward.",
];

/// Built-in adventure templates.
pub const ADVENTURE_TEMPLATES: &[&str] = &[
    "An exciting journey begins with a single step, {name}. Adventure calls your name today!",
    "Explore new territories, both literal and metaphorical, {name}. Discovery awaits the brave.",
    "Your adventurous spirit will lead you to amazing experiences, {name}. Say yes to new opportunities.",
    "A thrilling challenge will test your courage, {name}. You have the strength to overcome it.",
    "The path less traveled holds special rewards for you, {name}. Dare to be different.",
];

/// Built-in mood modifiers. Each sentence is appended as-is, leading space included.
pub fn built_in_modifiers(mood: &Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &[
            " Your joyful energy amplifies this fortune!",
            " Happiness multiplies your blessings!",
        ],
        Mood::Sad => &[
            " Remember, after every storm comes sunshine.",
            " This fortune brings hope to brighten your day.",
        ],
        Mood::Excited => &[
            " Your enthusiasm will make this fortune even more powerful!",
            " Channel your excitement into positive action!",
        ],
        Mood::Anxious => &[
            " Take deep breaths and trust in this guidance.",
            " Let this fortune calm your worries.",
        ],
        Mood::Calm => &[
            " Your peaceful nature enhances this fortune's wisdom.",
            " Serenity will guide you to success.",
        ],
        Mood::Adventurous => &[
            " Your bold spirit will unlock hidden opportunities!",
            " Adventure awaits those who dare to dream!",
        ],
        Mood::Other(_) => &[],
    }
}

/// The built-in lucky-color palette.
pub const LUCKY_COLORS: &[&str] = &[
    "Red", "Blue", "Green", "Purple", "Gold", "Silver", "Orange", "Pink",
];

fn built_in_templates(category: Category) -> &'static [&'static str] {
    match category {
        Category::Love => LOVE_TEMPLATES,
        Category::Career => CAREER_TEMPLATES,
        Category::Health => HEALTH_TEMPLATES,
        Category::Finance => FINANCE_TEMPLATES,
        Category::General => GENERAL_TEMPLATES,
        Category::Adventure => ADVENTURE_TEMPLATES,
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Substitute `name` into a template's placeholder.
pub fn render_template(template: &str, name: &str) -> String {
    template.replacen(NAME_PLACEHOLDER, name, 1)
}

/// Immutable tables an engine draws from.
///
/// Every way of building one validates it, deserialization included, so the
/// palette is never empty and every template has exactly one placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBank")]
pub struct TemplateBank {
    templates: BTreeMap<Category, Vec<String>>,
    moods: BTreeMap<Mood, Vec<String>>,
    colors: Vec<String>,
}

/// Bank tables as they appear in JSON, before validation.
#[derive(Deserialize)]
struct RawBank {
    templates: BTreeMap<Category, Vec<String>>,
    #[serde(default)]
    moods: BTreeMap<Mood, Vec<String>>,
    colors: Vec<String>,
}

impl TryFrom<RawBank> for TemplateBank {
    type Error = FortuneError;

    fn try_from(raw: RawBank) -> FortuneResult<Self> {
        Self::new(raw.templates, raw.moods, raw.colors)
    }
}

impl Default for TemplateBank {
    fn default() -> Self {
        Self {
            templates: Category::ALL
                .into_iter()
                .map(|c| (c, to_owned_list(built_in_templates(c))))
                .collect(),
            moods: Mood::KNOWN
                .into_iter()
                .map(|m| {
                    let mods = to_owned_list(built_in_modifiers(&m));
                    (m, mods)
                })
                .collect(),
            colors: to_owned_list(LUCKY_COLORS),
        }
    }
}

impl TemplateBank {
    /// Build a bank from explicit tables, validating every template.
    pub fn new(
        templates: BTreeMap<Category, Vec<String>>,
        moods: BTreeMap<Mood, Vec<String>>,
        colors: Vec<String>,
    ) -> FortuneResult<Self> {
        let bank = Self {
            templates,
            moods,
            colors,
        };
        bank.validate()?;
        Ok(bank)
    }

    /// Parse and validate a bank from JSON text.
    pub fn from_json(text: &str) -> FortuneResult<Self> {
        let raw: RawBank =
            serde_json::from_str(text).map_err(|e| FortuneError::TemplateLoad(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Read, parse, and validate a bank from a JSON file.
    pub fn from_path(path: &Path) -> FortuneResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FortuneError::TemplateLoad(format!("{}: {e}", path.display())))?;
        let bank = Self::from_json(&text)?;
        tracing::info!(
            path = %path.display(),
            categories = bank.templates.len(),
            "loaded template bank"
        );
        Ok(bank)
    }

    /// Serialize the bank as pretty JSON, in the format [`from_json`](Self::from_json) reads.
    pub fn to_json(&self) -> FortuneResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FortuneError::Serialization(e.to_string()))
    }

    fn validate(&self) -> FortuneResult<()> {
        if self.colors.is_empty() {
            return Err(FortuneError::EmptyPalette);
        }
        for (category, templates) in &self.templates {
            if let Some(bad) = templates
                .iter()
                .find(|t| t.matches(NAME_PLACEHOLDER).count() != 1)
            {
                return Err(FortuneError::InvalidTemplate {
                    category: category.to_string(),
                    template: bad.clone(),
                });
            }
        }
        Ok(())
    }

    /// Templates for a category, if the bank has any.
    pub fn templates_for(&self, category: Category) -> Option<&[String]> {
        self.templates
            .get(&category)
            .map(Vec::as_slice)
            .filter(|t| !t.is_empty())
    }

    /// Modifier sentences for a mood, if the bank has any.
    pub fn modifiers_for(&self, mood: &Mood) -> Option<&[String]> {
        self.moods
            .get(mood)
            .map(Vec::as_slice)
            .filter(|m| !m.is_empty())
    }

    /// The lucky-color palette.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Pick a template for `category` uniformly at random.
    pub fn random_template<'a, R: Rng>(
        &'a self,
        category: Category,
        rng: &mut R,
    ) -> FortuneResult<&'a str> {
        let templates = self
            .templates_for(category)
            .ok_or_else(|| FortuneError::UnknownCategory(category.to_string()))?;
        Ok(&templates[rng.random_range(0..templates.len())])
    }

    /// Pick a modifier for `mood` uniformly at random, or `None` if it has none.
    pub fn random_modifier<'a, R: Rng>(&'a self, mood: &Mood, rng: &mut R) -> Option<&'a str> {
        self.modifiers_for(mood)
            .map(|mods| mods[rng.random_range(0..mods.len())].as_str())
    }

    /// Pick a lucky color uniformly at random.
    pub fn random_color<'a, R: Rng>(&'a self, rng: &mut R) -> &'a str {
        &self.colors[rng.random_range(0..self.colors.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn built_in_table_sizes() {
        let bank = TemplateBank::default();
        for c in Category::ALL {
            let expected = if c == Category::General { 6 } else { 5 };
            assert_eq!(bank.templates_for(c).unwrap().len(), expected, "{c}");
        }
        for m in Mood::KNOWN {
            assert_eq!(bank.modifiers_for(&m).unwrap().len(), 2, "{m}");
        }
        assert_eq!(bank.colors().len(), 8);
    }

    #[test]
    fn built_in_bank_is_valid() {
        assert!(TemplateBank::default().validate().is_ok());
    }

    #[test]
    fn render_substitutes_once() {
        assert_eq!(render_template("Hi {name}!", "Ada"), "Hi Ada!");
    }

    #[test]
    fn random_picks_are_valid() {
        let bank = TemplateBank::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let t = bank.random_template(Category::Finance, &mut rng).unwrap();
            assert!(FINANCE_TEMPLATES.contains(&t));
            let m = bank.random_modifier(&Mood::Sad, &mut rng).unwrap();
            assert!(m.starts_with(' '));
            assert!(LUCKY_COLORS.contains(&bank.random_color(&mut rng)));
        }
    }

    #[test]
    fn other_mood_has_no_modifier() {
        let bank = TemplateBank::default();
        let mut rng = StdRng::seed_from_u64(42);
        assert!(bank
            .random_modifier(&Mood::Other("Sleepy".to_string()), &mut rng)
            .is_none());
    }

    #[test]
    fn from_json_custom_bank() {
        let bank = TemplateBank::from_json(
            r#"{
                "templates": { "Love": ["Hearts for {name}."] },
                "moods": { "Happy": [" Yay!"] },
                "colors": ["Teal"]
            }"#,
        )
        .unwrap();
        assert_eq!(bank.templates_for(Category::Love).unwrap().len(), 1);
        assert!(bank.templates_for(Category::Career).is_none());
        assert_eq!(bank.modifiers_for(&Mood::Happy).unwrap()[0], " Yay!");
        assert!(bank.modifiers_for(&Mood::Calm).is_none());
        assert_eq!(bank.colors(), ["Teal".to_string()]);
    }

    #[test]
    fn from_json_missing_category_is_unknown() {
        let bank = TemplateBank::from_json(
            r#"{ "templates": { "Love": ["Hearts for {name}."] }, "colors": ["Teal"] }"#,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let err = bank.random_template(Category::Health, &mut rng).unwrap_err();
        assert!(matches!(err, FortuneError::UnknownCategory(ref c) if c == "Health"));
    }

    #[test]
    fn from_json_rejects_template_without_placeholder() {
        let err = TemplateBank::from_json(
            r#"{ "templates": { "General": ["No name here."] }, "colors": ["Red"] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, FortuneError::InvalidTemplate { .. }));
    }

    #[test]
    fn from_json_rejects_double_placeholder() {
        let err = TemplateBank::from_json(
            r#"{ "templates": { "General": ["{name} and {name}"] }, "colors": ["Red"] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, FortuneError::InvalidTemplate { .. }));
    }

    #[test]
    fn from_json_rejects_empty_palette() {
        let err = TemplateBank::from_json(
            r#"{ "templates": { "General": ["Hi {name}"] }, "colors": [] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, FortuneError::EmptyPalette));
    }

    #[test]
    fn deserialize_validates_bank() {
        let empty_palette = serde_json::from_str::<TemplateBank>(
            r#"{"templates":{"General":["Hi {name}"]},"colors":[]}"#,
        )
        .unwrap_err();
        assert!(empty_palette.to_string().contains("palette"));

        let no_placeholder = serde_json::from_str::<TemplateBank>(
            r#"{"templates":{"General":["Hi there"]},"colors":["Red"]}"#,
        );
        assert!(no_placeholder.is_err());

        let ok: TemplateBank =
            serde_json::from_str(r#"{"templates":{"General":["Hi {name}"]},"colors":["Red"]}"#)
                .unwrap();
        assert_eq!(ok.colors(), ["Red".to_string()]);
    }

    #[test]
    fn from_json_malformed() {
        let err = TemplateBank::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FortuneError::TemplateLoad(_)));
    }

    #[test]
    fn json_round_trip_of_default_bank() {
        let bank = TemplateBank::default();
        let json = bank.to_json().unwrap();
        assert_eq!(TemplateBank::from_json(&json).unwrap(), bank);
    }
}
