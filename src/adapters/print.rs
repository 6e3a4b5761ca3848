use crate::adapters::reverse_chars;
use crate::domain::ports::PrintMethod;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePrint;

impl PrintMethod for ConsolePrint {
    fn print(&self, out: &mut dyn Write, title: &str, content: &str) -> Result<()> {
        writeln!(out, "Printing the book: {}...", title)?;
        writeln!(out, "{}", content)?;
        Ok(())
    }
}

/// Reverses the content only; the title line is always written as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReversePrint;

impl PrintMethod for ReversePrint {
    fn print(&self, out: &mut dyn Write, title: &str, content: &str) -> Result<()> {
        writeln!(out, "Printing the book in reverse: {}...", title)?;
        writeln!(out, "{}", reverse_chars(content))?;
        Ok(())
    }
}
