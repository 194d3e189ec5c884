// src/generators/mod.rs
pub mod charset;
pub mod password;
pub mod random;

pub use password::{generate, GenerationError, PasswordGenerator};
pub use random::RandomSource;
