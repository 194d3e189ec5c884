// src/api/types.rs
use serde::{Serialize, Deserialize};

use crate::models::{clamp_length, GenerationConfig, StrengthResult};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PasswordGenerationRequest {
    /// Password length, clamped to 4..=128 (default: configured length)
    pub length: Option<usize>,
    /// Include uppercase letters (default: configured)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: configured)
    pub include_lowercase: Option<bool>,
    /// Include digits (default: configured)
    pub include_digits: Option<bool>,
    /// Include symbols (default: configured)
    pub include_symbols: Option<bool>,
    /// Exclude similar-looking characters (default: configured)
    pub exclude_similar: Option<bool>,
}

impl PasswordGenerationRequest {
    /// Fill unset fields from `defaults` and clamp the length.
    pub fn resolve(&self, defaults: &GenerationConfig) -> GenerationConfig {
        GenerationConfig {
            length: clamp_length(self.length.unwrap_or(defaults.length)),
            include_uppercase: self.include_uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: self.include_lowercase.unwrap_or(defaults.include_lowercase),
            include_digits: self.include_digits.unwrap_or(defaults.include_digits),
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
            exclude_similar: self.exclude_similar.unwrap_or(defaults.exclude_similar),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Length in characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Strength of the generated password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthResult>,
    /// Error message (if operation failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Password strength score and band
    pub strength: StrengthResult,
    /// Suggestions for improvement
    pub feedback: Vec<String>,
}
