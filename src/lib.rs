//! Password generation with guaranteed class coverage, plus strength scoring.
//!
//! The two core operations are [`generate`] and [`score`]. Everything else in
//! the crate is the command line front end built around them.

pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod history;
pub mod logging;
pub mod models;
pub mod strength;

pub use generators::{generate, GenerationError, PasswordGenerator, RandomSource};
pub use models::{CharacterClass, GeneratedPassword, GenerationConfig, StrengthBand, StrengthResult};
pub use strength::score;
