//! The fortune engine.
//!
//! `FortuneEngine` owns a template bank, a randomness source, a clock, and the
//! history of everything it has generated. It is single-threaded: callers that
//! share one engine across threads must wrap it in their own lock.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{Clock, SystemClock};
use crate::confidence::confidence_level;
use crate::config::FortuneConfig;
use crate::error::{FortuneError, FortuneResult};
use crate::fortune::{Fortune, FortuneRequest};
use crate::history::History;
use crate::tables::{TemplateBank, render_template};

/// Generates fortunes and remembers them.
pub struct FortuneEngine<R = StdRng, C = SystemClock> {
    bank: TemplateBank,
    history: History,
    rng: R,
    clock: C,
}

impl FortuneEngine {
    /// Create an engine from a configuration, seeding `StdRng` from
    /// `config.seed` or from the OS when no seed is set.
    pub fn new(config: FortuneConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_parts(config.bank, rng, SystemClock)
    }
}

impl Default for FortuneEngine {
    fn default() -> Self {
        Self::new(FortuneConfig::default())
    }
}

impl<R: Rng> FortuneEngine<R, SystemClock> {
    /// Create an engine drawing from the given randomness source.
    pub fn with_rng(bank: TemplateBank, rng: R) -> Self {
        Self::with_parts(bank, rng, SystemClock)
    }
}

impl<R: Rng, C: Clock> FortuneEngine<R, C> {
    /// Create an engine from explicit parts.
    pub fn with_parts(bank: TemplateBank, rng: R, clock: C) -> Self {
        Self {
            bank,
            history: History::new(),
            rng,
            clock,
        }
    }

    /// The tables this engine draws from.
    pub fn bank(&self) -> &TemplateBank {
        &self.bank
    }

    /// Generate a fortune for `request` and record it in the history.
    pub fn generate(&mut self, request: &FortuneRequest) -> FortuneResult<Fortune> {
        if request.lucky_number_range == 0 {
            return Err(FortuneError::InvalidRange(request.lucky_number_range));
        }

        let mood = request.mood.clone().normalized();
        let template = self.bank.random_template(request.category, &mut self.rng)?;
        let mut message = render_template(template, &request.name);
        if let Some(modifier) = self.bank.random_modifier(&mood, &mut self.rng) {
            message.push_str(modifier);
        }

        let lucky_number = self.rng.random_range(1..=request.lucky_number_range);
        let lucky_color = self.bank.random_color(&mut self.rng).to_string();
        let confidence_level =
            confidence_level(&mood, request.lucky_number_range, &mut self.rng);

        let fortune = Fortune {
            user_name: request.name.clone(),
            category: request.category,
            mood,
            message,
            lucky_number,
            lucky_color,
            confidence_level,
            timestamp: self.clock.now(),
        };

        tracing::debug!(
            user = %fortune.user_name,
            category = %fortune.category,
            mood = %fortune.mood,
            lucky_number,
            confidence = confidence_level,
            "generated fortune"
        );

        self.history.append(fortune.clone());
        Ok(fortune)
    }

    /// Every fortune generated so far, most recent first.
    pub fn history(&self) -> Vec<Fortune> {
        self.history.newest_first()
    }

    /// The fortune generated last, if any.
    pub fn latest(&self) -> Option<&Fortune> {
        self.history.last()
    }

    /// Forget every recorded fortune. Returns how many were removed.
    pub fn clear_history(&mut self) -> usize {
        let removed = self.history.clear();
        tracing::info!(removed, "cleared fortune history");
        removed
    }

    /// Number of fortunes generated since creation or the last clear.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
