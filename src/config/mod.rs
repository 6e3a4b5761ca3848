#[cfg(feature = "cli")]
pub mod cli;
pub mod command_file;

use crate::core::{Action, Command};

/// Builds a command from textual names. Unsupported actions are a no-op:
/// they are logged and dropped.
pub fn resolve_command(action: &str, method: &str) -> Option<Command> {
    match Action::from_name(action) {
        Some(action) => Some(Command::new(action, method)),
        None => {
            tracing::warn!("Skipping unsupported action '{}' (method '{}')", action, method);
            None
        }
    }
}
