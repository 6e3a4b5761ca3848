use crate::utils::error::{BookError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Checks the `action:method` form accepted on the command line.
pub fn validate_command_arg(field_name: &str, arg: &str) -> Result<()> {
    match arg.split_once(':') {
        Some((action, method)) => {
            validate_non_empty_string(field_name, action)?;
            validate_non_empty_string(field_name, method)
        }
        None => Err(BookError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: arg.to_string(),
            reason: "Expected the form action:method, e.g. display:reverse".to_string(),
        }),
    }
}
