// src/cli/display.rs
use console::{style, StyledObject};

use crate::history::History;
use crate::models::{GenerationConfig, StrengthBand, StrengthResult, CharacterClass};

const BAR_WIDTH: usize = 20;

fn band_style<D>(band: StrengthBand, value: D) -> StyledObject<D> {
    match band {
        StrengthBand::VeryWeak => style(value).red(),
        StrengthBand::Weak => style(value).color256(208),
        StrengthBand::Medium => style(value).yellow(),
        StrengthBand::Good => style(value).green(),
        StrengthBand::Excellent => style(value).green().bright().bold(),
    }
}

/// A fixed-width bar proportional to the score.
pub fn strength_bar(score: u8) -> String {
    let filled = (score as usize * BAR_WIDTH) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn format_strength(result: &StrengthResult) -> String {
    format!(
        "{} {:>3}/100 {}",
        band_style(result.band, strength_bar(result.score)),
        result.score,
        band_style(result.band, result.band.label())
    )
}

pub fn print_password(password: &str, result: &StrengthResult) {
    println!("\n🔑 {}", style(password).bold());
    println!("   Strength: {}", format_strength(result));
}

pub fn print_feedback(feedback: &[String]) {
    for line in feedback {
        println!("   • {}", line);
    }
}

pub fn print_settings(config: &GenerationConfig) {
    println!("\n⚙️  Current settings");
    println!("   Length: {}", config.length);
    for class in CharacterClass::ALL {
        let mark = if config.is_enabled(class) { style("✔").green() } else { style("✘").red() };
        println!("   {} {}", mark, class.label());
    }
    let mark = if config.exclude_similar { style("✔").green() } else { style("✘").red() };
    println!("   {} Exclude similar characters (i, l, 1, L, o, 0, O)", mark);
}

pub fn print_history(history: &History) {
    if history.is_empty() {
        println!("📭 History is empty.");
        return;
    }
    println!("\n📜 Password history");
    for entry in history.entries() {
        println!("   {}", entry);
    }
}
