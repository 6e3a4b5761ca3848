use crate::config::command_file::CommandFile;
use crate::config::resolve_command;
use crate::core::{Book, Command};
use crate::domain::model::{SAMPLE_CONTENT, SAMPLE_TITLE};
use crate::utils::error::Result;
use crate::utils::validation::{validate_command_arg, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-cli")]
#[command(about = "Display, print and serialize a book with pluggable strategies")]
pub struct CliConfig {
    /// Book title (overrides the command file)
    #[arg(long)]
    pub title: Option<String>,

    /// Book content (overrides the command file)
    #[arg(long)]
    pub content: Option<String>,

    /// Command as action:method, e.g. display:reverse or serialize:json
    #[arg(short = 'c', long = "command", value_delimiter = ',')]
    pub commands: Vec<String>,

    /// TOML command file; its commands run before --command entries
    #[arg(long)]
    pub config: Option<String>,

    /// List the known methods for each action and exit
    #[arg(long)]
    pub list_methods: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Flag values win over the command file's `[book]`, which wins over the sample book.
    pub fn book(&self, file: Option<&CommandFile>) -> Book {
        let file_book = file.and_then(|f| f.book.as_ref());
        let title = self
            .title
            .clone()
            .or_else(|| file_book.map(|b| b.title().to_string()))
            .unwrap_or_else(|| SAMPLE_TITLE.to_string());
        let content = self
            .content
            .clone()
            .or_else(|| file_book.map(|b| b.content().to_string()))
            .unwrap_or_else(|| SAMPLE_CONTENT.to_string());
        Book::new(title, content)
    }

    /// File commands first, then `--command` entries. Call after `validate`.
    pub fn commands(&self, file: Option<&CommandFile>) -> Vec<Command> {
        let mut commands = file.map(CommandFile::commands).unwrap_or_default();
        commands.extend(
            self.commands
                .iter()
                .filter_map(|arg| arg.split_once(':'))
                .filter_map(|(action, method)| resolve_command(action.trim(), method.trim())),
        );
        commands
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for arg in &self.commands {
            validate_command_arg("command", arg)?;
        }
        Ok(())
    }
}
