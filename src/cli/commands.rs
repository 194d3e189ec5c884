// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::models::{clamp_length, GenerationConfig};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate one or more passwords
    Generate(GenerateArgs),

    /// Score the strength of a password
    Score {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },

    /// Open the interactive menu
    Menu,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Password length (clamped to 4..=128)
    #[arg(long, short)]
    pub length: Option<usize>,

    /// Include uppercase letters
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub uppercase: Option<bool>,

    /// Include lowercase letters
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub lowercase: Option<bool>,

    /// Include digits
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub digits: Option<bool>,

    /// Include symbols
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub symbols: Option<bool>,

    /// Exclude similar-looking characters (i, l, 1, L, o, 0, O)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub exclude_similar: Option<bool>,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1)]
    pub count: usize,
}

impl GenerateArgs {
    /// Apply the flags on top of the configured defaults.
    pub fn resolve(&self, defaults: &GenerationConfig) -> GenerationConfig {
        GenerationConfig {
            length: clamp_length(self.length.unwrap_or(defaults.length)),
            include_uppercase: self.uppercase.unwrap_or(defaults.include_uppercase),
            include_lowercase: self.lowercase.unwrap_or(defaults.include_lowercase),
            include_digits: self.digits.unwrap_or(defaults.include_digits),
            include_symbols: self.symbols.unwrap_or(defaults.include_symbols),
            exclude_similar: self.exclude_similar.unwrap_or(defaults.exclude_similar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args as CliArgs;
    use clap::Parser;

    fn parse(argv: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_generate_flags() {
        let args = parse(&["qenqey", "generate", "--length", "300", "--symbols", "--digits", "false"]);
        let Some(CliCommand::Generate(generate)) = args.command else {
            panic!("expected generate subcommand");
        };

        let config = generate.resolve(&GenerationConfig::default());
        assert_eq!(config.length, 128);
        assert!(config.include_symbols);
        assert!(!config.include_digits);
        assert!(config.include_uppercase);
        assert_eq!(generate.count, 1);
    }

    #[test]
    fn test_score_subcommand() {
        let args = parse(&["qenqey", "--json", "score", "Tr0ub4dor&3"]);
        assert!(args.json);
        match args.command {
            Some(CliCommand::Score { password }) => assert_eq!(password, "Tr0ub4dor&3"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_means_menu() {
        let args = parse(&["qenqey", "--seed", "9"]);
        assert!(args.command.is_none());
        assert_eq!(args.seed, Some(9));
    }
}
