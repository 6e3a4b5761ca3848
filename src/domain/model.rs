use crate::domain::ports::{DisplayMethod, PrintMethod, SerializationMethod};
use crate::utils::error::Result;
use serde::Deserialize;
use std::fmt;
use std::io::Write;

pub const SAMPLE_TITLE: &str = "Sample Book";
pub const SAMPLE_CONTENT: &str = "This is some sample content.";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    title: String,
    content: String,
}

impl Book {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_TITLE, SAMPLE_CONTENT)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn display(&self, method: &dyn DisplayMethod, out: &mut dyn Write) -> Result<()> {
        method.display(out, &self.content)
    }

    pub fn print_book(&self, method: &dyn PrintMethod, out: &mut dyn Write) -> Result<()> {
        method.print(out, &self.title, &self.content)
    }

    pub fn serialize(&self, method: &dyn SerializationMethod) -> Result<String> {
        method.serialize(&self.title, &self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Display,
    Print,
    Serialize,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Display, Action::Print, Action::Serialize];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Display => "display",
            Action::Print => "print",
            Action::Serialize => "serialize",
        }
    }

    /// Returns `None` for names outside the closed action set.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a dispatch run: which capability to use and which variant of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub method: String,
}

impl Command {
    pub fn new(action: Action, method: impl Into<String>) -> Self {
        Self {
            action,
            method: method.into(),
        }
    }
}
