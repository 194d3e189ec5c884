// src/generators/password.rs
use rand::rngs::ThreadRng;
use thiserror::Error;

use crate::generators::charset::{class_alphabets, working_charset};
use crate::generators::random::RandomSource;
use crate::models::{CharacterClass, GeneratedPassword, GenerationConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("No character class selected: enable at least one of uppercase, lowercase, digits or symbols")]
    NoCharacterClassSelected,

    #[error("Empty character set: excluding similar characters removed every usable character")]
    EmptyCharset,
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Generate a password with the thread-local CSPRNG.
pub fn generate(config: &GenerationConfig) -> Result<GeneratedPassword> {
    PasswordGenerator::new().generate(config)
}

pub struct PasswordGenerator<R = ThreadRng> {
    rng: R,
}

impl PasswordGenerator<ThreadRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: rand::thread_rng() }
    }
}

impl Default for PasswordGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    /// Use a caller-supplied randomness source, e.g. a seeded `ChaCha20Rng`.
    pub fn with_source(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate(&mut self, config: &GenerationConfig) -> Result<GeneratedPassword> {
        if !config.has_enabled_class() {
            log::warn!("Password generation requested with no character class selected");
            return Err(GenerationError::NoCharacterClassSelected);
        }

        let alphabets = class_alphabets(config);
        let password = assemble(&alphabets, config.length, &mut self.rng)?;

        log::debug!(
            "Generated password: length={}, classes={}, exclude_similar={}",
            password.len(),
            alphabets.len(),
            config.exclude_similar
        );

        Ok(password)
    }
}

// Required characters first, then uniform fill, then a full shuffle
fn assemble<R: RandomSource + ?Sized>(
    alphabets: &[(CharacterClass, Vec<char>)],
    length: usize,
    rng: &mut R,
) -> Result<GeneratedPassword> {
    let charset = working_charset(alphabets);
    if charset.is_empty() {
        log::warn!("Every enabled class is empty after filtering");
        return Err(GenerationError::EmptyCharset);
    }

    let required: Vec<char> = alphabets
        .iter()
        .filter(|(_, alphabet)| !alphabet.is_empty())
        .map(|(_, alphabet)| alphabet[rng.bounded(alphabet.len())])
        .collect();

    let mut buffer: Vec<char> = Vec::with_capacity(length);
    buffer.extend(required.into_iter().take(length));

    while buffer.len() < length {
        buffer.push(charset[rng.bounded(charset.len())]);
    }

    shuffle(&mut buffer, rng);

    Ok(GeneratedPassword::from_chars(buffer))
}

/// Fisher-Yates, walking from the last index down to 1.
fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.bounded(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::charset::{effective_alphabet, is_similar, DIGIT_CHARS};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::{HashSet, VecDeque};

    /// Replays a fixed list of draws.
    struct ScriptedSource {
        draws: VecDeque<usize>,
    }

    impl ScriptedSource {
        fn new(draws: &[usize]) -> Self {
            ScriptedSource { draws: draws.iter().copied().collect() }
        }
    }

    impl RandomSource for ScriptedSource {
        fn bounded(&mut self, n: usize) -> usize {
            let draw = self.draws.pop_front().expect("script exhausted");
            assert!(draw < n, "scripted draw {} out of range 0..{}", draw, n);
            draw
        }
    }

    fn config(upper: bool, lower: bool, digits: bool, symbols: bool, length: usize) -> GenerationConfig {
        GenerationConfig {
            length,
            include_uppercase: upper,
            include_lowercase: lower,
            include_digits: digits,
            include_symbols: symbols,
            exclude_similar: false,
        }
    }

    fn seeded(seed: u64) -> PasswordGenerator<ChaCha20Rng> {
        PasswordGenerator::with_source(ChaCha20Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_no_class_selected() {
        let result = generate(&config(false, false, false, false, 16));
        assert_eq!(result, Err(GenerationError::NoCharacterClassSelected));
    }

    #[test]
    fn test_empty_charset() {
        let alphabets = vec![
            (CharacterClass::Uppercase, Vec::new()),
            (CharacterClass::Digit, Vec::new()),
        ];
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        assert_eq!(assemble(&alphabets, 8, &mut rng), Err(GenerationError::EmptyCharset));
    }

    #[test]
    fn test_empty_class_is_skipped() {
        let alphabets = vec![
            (CharacterClass::Uppercase, Vec::new()),
            (CharacterClass::Digit, vec!['7']),
        ];
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let password = assemble(&alphabets, 6, &mut rng).unwrap();
        assert_eq!(password.as_str(), "777777");
    }

    #[test]
    fn test_scripted_draws_and_shuffle() {
        // required '3', fill '5' '7' '9', then swaps (3,0) (2,2) (1,0)
        let mut generator = PasswordGenerator::with_source(ScriptedSource::new(&[3, 5, 7, 9, 0, 2, 0]));
        let password = generator.generate(&config(false, false, true, false, 4)).unwrap();
        assert_eq!(password.as_str(), "5973");
    }

    #[test]
    fn test_shuffle_moves_required_characters() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        let mut source = ScriptedSource::new(&[0, 0, 0]);
        shuffle(&mut items, &mut source);
        assert_eq!(items, vec!['b', 'c', 'd', 'a']);
    }

    #[test]
    fn test_required_list_truncated_when_length_is_short() {
        let mut generator = seeded(5);
        for _ in 0..50 {
            let password = generator.generate(&config(true, true, true, true, 2)).unwrap();
            assert_eq!(password.len(), 2);
            assert_eq!(password.as_str().chars().filter(|c| c.is_ascii_uppercase()).count(), 1);
            assert_eq!(password.as_str().chars().filter(|c| c.is_ascii_lowercase()).count(), 1);
        }
    }

    #[test]
    fn test_exact_length_across_domain() {
        let mut generator = seeded(11);
        for length in 4..=128 {
            let password = generator.generate(&config(true, true, true, true, length)).unwrap();
            assert_eq!(password.len(), length);
        }
    }

    #[test]
    fn test_every_enabled_class_is_represented() {
        let mut generator = seeded(23);
        let selections = [
            (true, true, true, true),
            (true, false, true, false),
            (false, true, false, true),
            (false, false, true, false),
        ];
        for (upper, lower, digits, symbols) in selections {
            for exclude_similar in [false, true] {
                let mut cfg = config(upper, lower, digits, symbols, 4);
                cfg.exclude_similar = exclude_similar;
                for _ in 0..200 {
                    let password = generator.generate(&cfg).unwrap();
                    for class in cfg.enabled_classes() {
                        let alphabet = effective_alphabet(class, exclude_similar);
                        assert!(
                            password.as_str().chars().any(|c| alphabet.contains(&c)),
                            "{:?} missing from {}",
                            class,
                            password
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_foreign_characters() {
        let mut generator = seeded(31);
        let cfg = config(false, true, true, false, 64);
        let allowed = working_charset(&class_alphabets(&cfg));
        for _ in 0..100 {
            let password = generator.generate(&cfg).unwrap();
            assert!(password.as_str().chars().all(|c| allowed.contains(&c)));
        }
    }

    #[test]
    fn test_exclude_similar() {
        let mut generator = seeded(47);
        let mut cfg = config(true, true, true, true, 128);
        cfg.exclude_similar = true;
        for _ in 0..100 {
            let password = generator.generate(&cfg).unwrap();
            assert!(!password.as_str().chars().any(is_similar));
        }
    }

    #[test]
    fn test_digits_only_with_exclude_similar() {
        let mut cfg = config(false, false, true, false, 32);
        cfg.exclude_similar = true;
        let password = generate(&cfg).unwrap();
        assert!(password.as_str().chars().all(|c| DIGIT_CHARS.contains(c) && c != '0' && c != '1'));
    }

    #[test]
    fn test_consecutive_calls_differ() {
        let cfg = config(true, true, true, true, 16);
        let mut generator = PasswordGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(generator.generate(&cfg).unwrap().into_string());
        }
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_same_seed_reproduces_password() {
        let cfg = GenerationConfig::default();
        let first = seeded(2024).generate(&cfg).unwrap();
        let second = seeded(2024).generate(&cfg).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_required_characters_not_pinned_to_front() {
        // Without the shuffle, the first character would always be uppercase
        let mut generator = seeded(77);
        let cfg = config(true, true, false, false, 16);
        let leading_lower = (0..200)
            .filter(|_| {
                let password = generator.generate(&cfg).unwrap();
                password.as_str().starts_with(|c: char| c.is_ascii_lowercase())
            })
            .count();
        assert!(leading_lower > 50);
    }

    #[test]
    fn test_concurrent_generation() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    let cfg = GenerationConfig { length: 32, ..Default::default() };
                    (0..100)
                        .map(|_| generate(&cfg).map(|p| p.len()))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for length in handle.join().unwrap() {
                assert_eq!(length, Ok(32));
            }
        }
    }
}
