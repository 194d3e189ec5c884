// src/generators/charset.rs
//! Canonical alphabets and working charset assembly.

use crate::models::{CharacterClass, GenerationConfig};

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGIT_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to confuse with one another. Applied to every class.
pub const SIMILAR_CHARS: &str = "il1Lo0O";

pub fn canonical_alphabet(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Uppercase => UPPERCASE_CHARS,
        CharacterClass::Lowercase => LOWERCASE_CHARS,
        CharacterClass::Digit => DIGIT_CHARS,
        CharacterClass::Symbol => SYMBOL_CHARS,
    }
}

pub fn is_similar(c: char) -> bool {
    SIMILAR_CHARS.contains(c)
}

/// Alphabet of `class` after the optional similar-looking filter. May be empty.
pub fn effective_alphabet(class: CharacterClass, exclude_similar: bool) -> Vec<char> {
    canonical_alphabet(class)
        .chars()
        .filter(|c| !(exclude_similar && is_similar(*c)))
        .collect()
}

/// Effective alphabets of the enabled classes, in charset order.
pub fn class_alphabets(config: &GenerationConfig) -> Vec<(CharacterClass, Vec<char>)> {
    config
        .enabled_classes()
        .into_iter()
        .map(|class| (class, effective_alphabet(class, config.exclude_similar)))
        .collect()
}

/// Concatenation of the effective alphabets. No cross-class deduplication.
pub fn working_charset(alphabets: &[(CharacterClass, Vec<char>)]) -> Vec<char> {
    alphabets
        .iter()
        .flat_map(|(_, alphabet)| alphabet.iter().copied())
        .collect()
}
