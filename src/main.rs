use anyhow::Context;
use clap::Parser;
use std::path::Path;

use qenqey::api::json_api;
use qenqey::cli::{self, Args, CliCommand};
use qenqey::core::Config;
use qenqey::history::History;
use qenqey::logging;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().context("Failed to load .env file")?;
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();

    logging::init(&config).context("Failed to initialise logging")?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::info!("🔒 Starting QenQey password generator");
    log::debug!("Loaded config: {:?}", config);

    // Prompts turn Ctrl+C into OperationInterrupted; this covers the rest
    ctrlc::set_handler(|| {
        log::info!("🔴 Ctrl+C received. Shutting down...");
        println!("\n👋 Goodbye!");
        std::process::exit(130);
    })
    .context("Failed to set Ctrl+C handler")?;

    let mut generator = cli::handlers::make_generator(args.seed);
    let defaults = config.generation_config();

    match args.command {
        Some(CliCommand::Generate(generate)) => {
            let settings = generate.resolve(&defaults);
            if args.json {
                if !json_api::handle_generate(&mut generator, &settings, generate.count)? {
                    std::process::exit(1);
                }
            } else {
                let mut history = History::new(config.history_limit);
                match cli::handlers::handle_generate(&mut generator, &settings, generate.count, &mut history) {
                    Ok(passwords) => cli::handlers::print_generated(&passwords),
                    Err(e) => {
                        log::error!("Generation failed: {}", e);
                        eprintln!("❌ {}", e);
                        std::process::exit(1);
                    }
                }
            }
        }
        Some(CliCommand::Score { password }) => {
            if args.json {
                json_api::handle_score(&password)?;
            } else {
                cli::handlers::handle_score(&password);
            }
        }
        Some(CliCommand::Menu) | None if !args.json => {
            cli::menu::run_cli_menu(&config, generator)?;
        }
        Some(CliCommand::Menu) | None => {
            if !json_api::handle_stdin_request(&mut generator, &defaults)? {
                std::process::exit(1);
            }
        }
    }

    log::info!("✅ QenQey shutdown complete.");
    Ok(())
}
