// src/strength.rs
//! Password strength scoring.
//!
//! The score is additive: cumulative length thresholds, one bonus per
//! character variety present, and a combination bonus for three or four
//! varieties. The total is capped at 100 and mapped onto a [`StrengthBand`].

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::models::{StrengthBand, StrengthResult};

const MAX_SCORE: u32 = 100;

// (minimum length, points)
const LENGTH_THRESHOLDS: [(usize, u32); 4] = [(8, 20), (12, 15), (16, 10), (20, 5)];

const UPPER_POINTS: u32 = 10;
const LOWER_POINTS: u32 = 10;
const DIGIT_POINTS: u32 = 10;
const SYMBOL_POINTS: u32 = 15;

const THREE_VARIETY_BONUS: u32 = 10;
const FOUR_VARIETY_BONUS: u32 = 10;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Varieties {
    upper: bool,
    lower: bool,
    digit: bool,
    symbol: bool,
}

impl Varieties {
    fn of(password: &str) -> Self {
        let mut varieties = Varieties::default();
        for c in password.chars() {
            // Lu, Ll and Nd only; letter-like symbols and other numerals are symbols
            match get_general_category(c) {
                GeneralCategory::UppercaseLetter => varieties.upper = true,
                GeneralCategory::LowercaseLetter => varieties.lower = true,
                GeneralCategory::DecimalNumber => varieties.digit = true,
                _ => varieties.symbol = true,
            }
        }
        varieties
    }

    fn count(&self) -> usize {
        [self.upper, self.lower, self.digit, self.symbol]
            .iter()
            .filter(|present| **present)
            .count()
    }
}

fn length_points(length: usize) -> u32 {
    LENGTH_THRESHOLDS
        .iter()
        .filter(|(min, _)| length >= *min)
        .map(|(_, points)| points)
        .sum()
}

fn variety_points(varieties: &Varieties) -> u32 {
    let mut points = 0;
    if varieties.upper {
        points += UPPER_POINTS;
    }
    if varieties.lower {
        points += LOWER_POINTS;
    }
    if varieties.digit {
        points += DIGIT_POINTS;
    }
    if varieties.symbol {
        points += SYMBOL_POINTS;
    }

    let count = varieties.count();
    if count >= 3 {
        points += THREE_VARIETY_BONUS;
    }
    if count == 4 {
        points += FOUR_VARIETY_BONUS;
    }
    points
}

/// Score a password from 0 to 100. The empty string scores 0.
pub fn score(password: &str) -> StrengthResult {
    let length = password.chars().count();
    let varieties = Varieties::of(password);

    let total = (length_points(length) + variety_points(&varieties)).min(MAX_SCORE);
    // Bounded by MAX_SCORE above
    let score = total as u8;

    StrengthResult {
        score,
        band: StrengthBand::from_score(score),
    }
}

/// Suggestions that would raise the score of `password`.
pub fn feedback(password: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let length = password.chars().count();
    let varieties = Varieties::of(password);

    if let Some((next, _)) = LENGTH_THRESHOLDS.iter().find(|(min, _)| length < *min) {
        suggestions.push(format!("Use at least {} characters", next));
    }
    if !varieties.upper {
        suggestions.push("Add uppercase letters".to_string());
    }
    if !varieties.lower {
        suggestions.push("Add lowercase letters".to_string());
    }
    if !varieties.digit {
        suggestions.push("Add digits".to_string());
    }
    if !varieties.symbol {
        suggestions.push("Add symbols".to_string());
    }

    suggestions
}
