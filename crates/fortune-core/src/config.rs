//! Configuration for a fortune engine.

use crate::tables::TemplateBank;

/// Configuration for a [`FortuneEngine`](crate::FortuneEngine).
#[derive(Debug, Clone, Default)]
pub struct FortuneConfig {
    /// RNG seed for reproducible fortunes. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Tables to draw from.
    pub bank: TemplateBank,
}

impl FortuneConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom template bank.
    pub fn with_bank(mut self, bank: TemplateBank) -> Self {
        self.bank = bank;
        self
    }
}
