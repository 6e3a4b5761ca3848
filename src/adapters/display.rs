use crate::adapters::reverse_chars;
use crate::domain::ports::DisplayMethod;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDisplay;

impl DisplayMethod for ConsoleDisplay {
    fn display(&self, out: &mut dyn Write, content: &str) -> Result<()> {
        writeln!(out, "{}", content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseDisplay;

impl DisplayMethod for ReverseDisplay {
    fn display(&self, out: &mut dyn Write, content: &str) -> Result<()> {
        writeln!(out, "{}", reverse_chars(content))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(method: &dyn DisplayMethod, content: &str) -> String {
        let mut out = Vec::new();
        method.display(&mut out, content).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_console_display_is_verbatim() {
        assert_eq!(render(&ConsoleDisplay, "abc"), "abc\n");
        assert_eq!(render(&ConsoleDisplay, ""), "\n");
    }

    #[test]
    fn test_reverse_display() {
        assert_eq!(render(&ReverseDisplay, "abc"), "cba\n");
        assert_eq!(render(&ReverseDisplay, ""), "\n");
    }

    #[test]
    fn test_reverse_display_keeps_multibyte_chars_intact() {
        assert_eq!(render(&ReverseDisplay, "héllo wörld"), "dlröw olléh\n");
        assert_eq!(render(&ReverseDisplay, "日本語"), "語本日\n");
    }
}
