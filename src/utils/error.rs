use crate::domain::model::Action;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Unknown {action} type: {variant}")]
    UnknownVariant { action: Action, variant: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl BookError {
    pub fn recovery_suggestion(&self) -> String {
        match self {
            BookError::UnknownVariant { action, .. } => {
                format!("Run book-cli --list-methods to see the known {} types", action)
            }
            BookError::IoError(_) => "Check that standard output is writable".to_string(),
            BookError::SerializationError(_) => {
                "The book text could not be encoded; check for invalid input".to_string()
            }
            BookError::ConfigError { .. } => {
                "Make sure the command file exists and is valid TOML".to_string()
            }
            BookError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and retry", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_variant_message() {
        let e = BookError::UnknownVariant {
            action: Action::Display,
            variant: "bogus".to_string(),
        };
        assert_eq!(e.to_string(), "Unknown display type: bogus");
    }

    #[test]
    fn test_unknown_variant_suggestion_names_action() {
        let e = BookError::UnknownVariant {
            action: Action::Serialize,
            variant: "yaml".to_string(),
        };
        assert_eq!(
            e.recovery_suggestion(),
            "Run book-cli --list-methods to see the known serialize types"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let e: BookError = io_err.into();
        assert!(e.to_string().starts_with("IO error"));
    }
}
