pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::command_file::CommandFile;
pub use crate::core::{dispatcher::Dispatcher, registry::StrategyRegistry};
pub use domain::model::{Action, Book, Command};
pub use utils::error::{BookError, Result};

/// Runs `commands` against `book` with the process-wide registry, writing to stdout.
pub fn run(book: &Book, commands: &[Command]) -> Result<Option<String>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Dispatcher::new().run(book, commands, &mut out)
}
