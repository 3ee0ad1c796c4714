use crate::utils::error::{LaunchError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_port(field_name: &str, value: &str) -> Result<()> {
    // Only invariant: a port setting is a non-empty string. Values are passed
    // through to the compose file verbatim, so no numeric check here.
    if value.is_empty() {
        return Err(LaunchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Port value cannot be empty".to_string(),
        });
    }

    Ok(())
}
