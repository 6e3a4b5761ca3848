use crate::core::registry::StrategyRegistry;
use crate::core::{Action, Book, Command};
use crate::utils::error::{BookError, Result};
use std::io::Write;

/// Runs command sequences against a book, resolving variant keys through a
/// [`StrategyRegistry`].
pub struct Dispatcher<'r> {
    registry: &'r StrategyRegistry,
}

impl Dispatcher<'static> {
    pub fn new() -> Self {
        Self {
            registry: StrategyRegistry::global(),
        }
    }
}

impl Default for Dispatcher<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> Dispatcher<'r> {
    pub fn with_registry(registry: &'r StrategyRegistry) -> Self {
        Self { registry }
    }

    /// Processes `commands` in order, writing display/print output and
    /// unknown-key diagnostics to `out`.
    ///
    /// Returns at the first serialize command whose key resolves; commands
    /// after it are not processed. Returns `Ok(None)` if none resolved.
    /// Unknown keys never fail the run, only sink I/O does.
    pub fn run<W: Write>(
        &self,
        book: &Book,
        commands: &[Command],
        out: &mut W,
    ) -> Result<Option<String>> {
        tracing::debug!(commands = commands.len(), title = %book.title(), "Dispatching commands");

        for (index, command) in commands.iter().enumerate() {
            tracing::debug!(action = %command.action, method = %command.method, "Processing command");

            match command.action {
                Action::Display => match self.registry.display(&command.method) {
                    Ok(method) => book.display(method, out)?,
                    Err(e) => self.report_unknown(out, &e)?,
                },
                Action::Print => match self.registry.print(&command.method) {
                    Ok(method) => book.print_book(method, out)?,
                    Err(e) => self.report_unknown(out, &e)?,
                },
                Action::Serialize => match self.registry.serialization(&command.method) {
                    Ok(method) => {
                        let serialized = book.serialize(method)?;
                        let skipped = commands.len() - index - 1;
                        if skipped > 0 {
                            tracing::debug!(
                                skipped,
                                "Serialization matched, remaining commands not processed"
                            );
                        }
                        return Ok(Some(serialized));
                    }
                    Err(e) => self.report_unknown(out, &e)?,
                },
            }
        }

        Ok(None)
    }

    /// Writes the diagnostic line to `out`; the hint and known keys go to the log.
    fn report_unknown<W: Write>(&self, out: &mut W, error: &BookError) -> Result<()> {
        if let BookError::UnknownVariant { action, .. } = error {
            tracing::warn!(
                known = ?self.registry.methods(*action),
                hint = %error.recovery_suggestion(),
                "{}",
                error
            );
        }
        writeln!(out, "{}", error)?;
        Ok(())
    }
}
