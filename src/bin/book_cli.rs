use anyhow::Context;
use book_dispatch::utils::{logger, validation::Validate};
use book_dispatch::{Action, CliConfig, CommandFile, StrategyRegistry};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting book-cli");
    tracing::debug!("CLI config: {:?}", config);

    if config.list_methods {
        let registry = StrategyRegistry::global();
        for action in Action::ALL {
            println!("{}: {}", action, registry.methods(action).join(", "));
        }
        return Ok(());
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let command_file = match &config.config {
        Some(path) => {
            tracing::info!("Loading commands from: {}", path);
            let file = CommandFile::from_file(path)
                .with_context(|| format!("failed to load command file '{}'", path))?;
            if let Err(e) = file.validate() {
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
            Some(file)
        }
        None => None,
    };

    let book = config.book(command_file.as_ref());
    let commands = config.commands(command_file.as_ref());
    tracing::info!("Running {} command(s) on '{}'", commands.len(), book.title());

    if let Some(serialized) = book_dispatch::run(&book, &commands)? {
        println!("{}", serialized);
    }

    Ok(())
}
