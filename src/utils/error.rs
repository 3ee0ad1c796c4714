use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("docker compose {action} failed for both command variants")]
    ComposeFailed { action: String },
}

impl LaunchError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LaunchError::ComposeFailed { action } if action == "up" => {
                "Failed to start containers. Is Docker Desktop running?".to_string()
            }
            LaunchError::ComposeFailed { .. } => {
                "Failed to stop containers. Is Docker Desktop running?".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LaunchError>;
