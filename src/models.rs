// src/models.rs
use std::fmt;
use serde::{Serialize, Deserialize};

/// Shortest password the collaborator layer may request.
pub const MIN_PASSWORD_LENGTH: usize = 4;
/// Longest password the collaborator layer may request.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Clamp a requested length into the supported domain.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)
}

// Character categories a password can draw from, in charset order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order their alphabets are concatenated.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase letters (A-Z)",
            CharacterClass::Lowercase => "Lowercase letters (a-z)",
            CharacterClass::Digit => "Digits (0-9)",
            CharacterClass::Symbol => "Symbols (!@#$%^&*)",
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_digits: true,
            include_symbols: false,
            exclude_similar: false,
        }
    }
}

impl GenerationConfig {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.include_uppercase,
            CharacterClass::Lowercase => self.include_lowercase,
            CharacterClass::Digit => self.include_digits,
            CharacterClass::Symbol => self.include_symbols,
        }
    }

    pub fn set_enabled(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Uppercase => self.include_uppercase = enabled,
            CharacterClass::Lowercase => self.include_lowercase = enabled,
            CharacterClass::Digit => self.include_digits = enabled,
            CharacterClass::Symbol => self.include_symbols = enabled,
        }
    }

    /// Enabled classes in charset order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }

    pub fn has_enabled_class(&self) -> bool {
        CharacterClass::ALL.iter().any(|class| self.is_enabled(*class))
    }
}

/// A freshly generated password. The caller owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn from_chars(chars: Vec<char>) -> Self {
        GeneratedPassword(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthBand {
    VeryWeak,
    Weak,
    Medium,
    Good,
    Excellent,
}

impl StrengthBand {
    /// Map a 0-100 score onto its band. Lower bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=24 => StrengthBand::VeryWeak,
            25..=49 => StrengthBand::Weak,
            50..=74 => StrengthBand::Medium,
            75..=89 => StrengthBand::Good,
            _ => StrengthBand::Excellent,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthBand::VeryWeak => "Very weak",
            StrengthBand::Weak => "Weak",
            StrengthBand::Medium => "Medium",
            StrengthBand::Good => "Good",
            StrengthBand::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for StrengthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub score: u8,
    pub band: StrengthBand,
}
