// src/cli/menu.rs
use inquire::{CustomType, InquireError, MultiSelect, Password, Select};

use crate::cli::display;
use crate::cli::handlers::{self, CliGenerator};
use crate::core::Config;
use crate::history::History;
use crate::models::{clamp_length, CharacterClass, GenerationConfig, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

const GENERATE: &str = "🔄  Generate password";
const CHECK_STRENGTH: &str = "📊  Check password strength";
const CHANGE_LENGTH: &str = "📏  Change length";
const CHOOSE_CLASSES: &str = "🔤  Choose character types";
const TOGGLE_SIMILAR: &str = "👀  Toggle exclude similar characters";
const SHOW_SETTINGS: &str = "⚙️   Show settings";
const SHOW_HISTORY: &str = "📜  Show history";
const CLEAR_HISTORY: &str = "🧹  Clear history";
const EXIT: &str = "🚪  Exit";

// Esc and Ctrl+C inside a prompt end the session rather than erroring
fn is_cancel(e: &InquireError) -> bool {
    matches!(e, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

struct Session {
    settings: GenerationConfig,
    generator: CliGenerator,
    history: History,
}

impl Session {
    fn regenerate(&mut self) {
        match handlers::handle_generate(&mut self.generator, &self.settings, 1, &mut self.history) {
            Ok(passwords) => handlers::print_generated(&passwords),
            Err(e) => {
                log::warn!("Regeneration failed: {}", e);
                println!("❌ {}", e);
            }
        }
    }

    fn choose_classes(&mut self) -> Result<(), InquireError> {
        let labels: Vec<&str> = CharacterClass::ALL.iter().map(|c| c.label()).collect();
        let selected: Vec<usize> = CharacterClass::ALL
            .iter()
            .enumerate()
            .filter(|(_, class)| self.settings.is_enabled(**class))
            .map(|(i, _)| i)
            .collect();

        let chosen = MultiSelect::new("Character types to include:", labels)
            .with_default(&selected)
            .prompt()?;

        for class in CharacterClass::ALL {
            self.settings.set_enabled(class, chosen.contains(&class.label()));
        }
        Ok(())
    }

    fn change_length(&mut self) -> Result<(), InquireError> {
        let prompt = format!("Password length ({}-{}):", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
        let length = CustomType::<usize>::new(&prompt)
            .with_default(self.settings.length)
            .with_error_message("Please enter a whole number")
            .prompt()?;

        let clamped = clamp_length(length);
        if clamped != length {
            println!("ℹ️  Length adjusted to {}", clamped);
        }
        self.settings.length = clamped;
        Ok(())
    }

    fn check_strength(&self) -> Result<(), InquireError> {
        let password = Password::new("Password to check:")
            .with_display_mode(inquire::PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()?;
        handlers::handle_score(&password);
        Ok(())
    }
}

pub fn run_cli_menu(config: &Config, generator: CliGenerator) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║       🔐 QENQEY PASSWORD FORGE       ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = Session {
        settings: config.generation_config(),
        generator,
        history: History::new(config.history_limit),
    };

    session.regenerate();

    let options = vec![
        GENERATE,
        CHECK_STRENGTH,
        CHANGE_LENGTH,
        CHOOSE_CLASSES,
        TOGGLE_SIMILAR,
        SHOW_SETTINGS,
        SHOW_HISTORY,
        CLEAR_HISTORY,
        EXIT,
    ];

    loop {
        println!();
        let choice = match Select::new("What would you like to do?", options.clone()).prompt() {
            Ok(choice) => choice,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        let outcome = match choice {
            GENERATE => {
                session.regenerate();
                Ok(())
            }
            CHECK_STRENGTH => session.check_strength(),
            CHANGE_LENGTH => session.change_length().map(|_| session.regenerate()),
            CHOOSE_CLASSES => session.choose_classes().map(|_| session.regenerate()),
            TOGGLE_SIMILAR => {
                session.settings.exclude_similar = !session.settings.exclude_similar;
                println!(
                    "👀 Exclude similar characters: {}",
                    if session.settings.exclude_similar { "on" } else { "off" }
                );
                session.regenerate();
                Ok(())
            }
            SHOW_SETTINGS => {
                display::print_settings(&session.settings);
                Ok(())
            }
            SHOW_HISTORY => {
                display::print_history(&session.history);
                Ok(())
            }
            CLEAR_HISTORY => {
                session.history.clear();
                println!("🧹 History cleared.");
                Ok(())
            }
            _ => break,
        };

        match outcome {
            Ok(()) => {}
            // A cancelled sub-prompt returns to the menu
            Err(e) if is_cancel(&e) => continue,
            Err(e) => return Err(e.into()),
        }
    }

    log::info!("Menu closed after {} generated password(s) in history", session.history.len());
    println!("👋 Goodbye!");
    Ok(())
}
