//! Fortune generation engine.
//!
//! Turns a [`FortuneRequest`] (name, category, mood, lucky-number range) into a
//! [`Fortune`] by picking a template from a [`TemplateBank`], appending a mood
//! modifier, drawing a lucky number and color, and scoring a confidence level.
//! Every generated fortune is kept in an in-memory [`History`].

pub mod category;
pub mod clock;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod fortune;
pub mod history;
pub mod tables;

pub use category::{Category, Mood};
pub use clock::{Clock, SystemClock};
pub use config::FortuneConfig;
pub use engine::FortuneEngine;
pub use error::{FortuneError, FortuneResult};
pub use fortune::{Fortune, FortuneRequest};
pub use history::History;
pub use tables::TemplateBank;
