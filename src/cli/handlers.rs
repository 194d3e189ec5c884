// src/cli/handlers.rs
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_core::RngCore;

use crate::cli::display;
use crate::generators::{GenerationError, PasswordGenerator, RandomSource};
use crate::history::History;
use crate::models::{GeneratedPassword, GenerationConfig};
use crate::strength;

pub type CliGenerator = PasswordGenerator<Box<dyn RngCore>>;

/// Thread-local CSPRNG, or a seeded ChaCha stream when a seed is given.
pub fn make_generator(seed: Option<u64>) -> CliGenerator {
    let rng: Box<dyn RngCore> = match seed {
        Some(seed) => {
            log::warn!("Using a seeded generator; output is reproducible");
            Box::new(ChaCha20Rng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };
    PasswordGenerator::with_source(rng)
}

/// Generate `count` passwords, recording each one in `history`.
pub fn handle_generate<R: RandomSource>(
    generator: &mut PasswordGenerator<R>,
    config: &GenerationConfig,
    count: usize,
    history: &mut History,
) -> Result<Vec<GeneratedPassword>, GenerationError> {
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let password = generator.generate(config)?;
        history.record(&password);
        passwords.push(password);
    }
    log::info!("Generated {} password(s) of length {}", passwords.len(), config.length);
    Ok(passwords)
}

pub fn print_generated(passwords: &[GeneratedPassword]) {
    for password in passwords {
        display::print_password(password.as_str(), &strength::score(password.as_str()));
    }
}

pub fn handle_score(password: &str) {
    let result = strength::score(password);
    log::info!("Scored password: {} ({})", result.score, result.band);
    display::print_password(password, &result);
    display::print_feedback(&strength::feedback(password));
}
