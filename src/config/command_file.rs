use crate::config::resolve_command;
use crate::core::{Book, Command};
use crate::utils::error::{BookError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::Deserialize;
use std::path::Path;

/// A TOML file describing a book and the commands to run against it.
///
/// ```toml
/// [book]
/// title = "Sample Book"
/// content = "This is some sample content."
///
/// [[commands]]
/// action = "display"
/// method = "reverse"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommandFile {
    pub book: Option<Book>,
    #[serde(default)]
    pub commands: Vec<CommandEntry>,
}

/// Action names stay as text here so an unsupported action can be skipped
/// instead of failing the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandEntry {
    pub action: String,
    pub method: String,
}

impl CommandFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| BookError::ConfigError {
            message: format!("Cannot read '{}': {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BookError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Commands with a recognised action, in file order.
    pub fn commands(&self) -> Vec<Command> {
        self.commands
            .iter()
            .filter_map(|entry| resolve_command(&entry.action, &entry.method))
            .collect()
    }
}

impl Validate for CommandFile {
    fn validate(&self) -> Result<()> {
        for (index, entry) in self.commands.iter().enumerate() {
            validate_non_empty_string(&format!("commands[{}].action", index), &entry.action)?;
            validate_non_empty_string(&format!("commands[{}].method", index), &entry.method)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_command_file() {
        let toml_content = r#"
[book]
title = "Dune"
content = "Fear is the mind-killer."

[[commands]]
action = "print"
method = "console"

[[commands]]
action = "serialize"
method = "json"
"#;

        let file = CommandFile::from_toml_str(toml_content).unwrap();
        assert!(file.validate().is_ok());
        assert_eq!(file.book, Some(Book::new("Dune", "Fear is the mind-killer.")));
        assert_eq!(
            file.commands(),
            vec![
                Command::new(Action::Print, "console"),
                Command::new(Action::Serialize, "json"),
            ]
        );
    }

    #[test]
    fn test_book_section_is_optional() {
        let toml_content = r#"
[[commands]]
action = "display"
method = "reverse"
"#;
        let file = CommandFile::from_toml_str(toml_content).unwrap();
        assert!(file.book.is_none());
        assert_eq!(file.commands().len(), 1);
    }

    #[test]
    fn test_unknown_action_is_skipped() {
        let toml_content = r#"
[[commands]]
action = "publish"
method = "press"

[[commands]]
action = "display"
method = "console"
"#;
        let file = CommandFile::from_toml_str(toml_content).unwrap();
        assert_eq!(file.commands(), vec![Command::new(Action::Display, "console")]);
    }

    #[test]
    fn test_empty_method_fails_validation() {
        let toml_content = r#"
[[commands]]
action = "display"
method = ""
"#;
        let file = CommandFile::from_toml_str(toml_content).unwrap();
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let result = CommandFile::from_toml_str("[[commands]\naction = ");
        assert!(matches!(result, Err(BookError::ConfigError { .. })));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[[commands]]\naction = \"serialize\"\nmethod = \"xml\"\n")
            .unwrap();

        let file = CommandFile::from_file(temp_file.path()).unwrap();
        assert_eq!(file.commands(), vec![Command::new(Action::Serialize, "xml")]);
    }

    #[test]
    fn test_missing_file() {
        let result = CommandFile::from_file("/nonexistent/commands.toml");
        assert!(matches!(result, Err(BookError::ConfigError { .. })));
    }
}
