pub mod system;

use crate::utils::error::Result;
use crate::utils::validation::{validate_port, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const BACKEND_PORT_VAR: &str = "CRM2_BACKEND_PORT";
pub const FRONTEND_PORT_VAR: &str = "CRM2_FRONTEND_PORT";
pub const POSTGRES_PORT_VAR: &str = "CRM2_POSTGRES_PORT";
pub const OLLAMA_PORT_VAR: &str = "CRM2_OLLAMA_PORT";

pub const DEFAULT_BACKEND_PORT: &str = "3002";
pub const DEFAULT_FRONTEND_PORT: &str = "5173";
pub const DEFAULT_POSTGRES_PORT: &str = "5434";
pub const DEFAULT_OLLAMA_PORT: &str = "11435";

#[derive(Debug, Parser)]
#[command(name = "crm-launcher")]
#[command(about = "Starts the Docker-based CRM stack and opens it in the browser")]
pub struct CliArgs {
    #[arg(long, help = "Stop the services instead of starting them")]
    pub down: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Port settings for the composed services, resolved once at startup.
/// A value set in the environment is kept as-is; unset (or empty) values
/// fall back to the fixed defaults the compose file was written for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ports {
    pub backend: String,
    pub frontend: String,
    pub postgres: String,
    pub ollama: String,
}

impl Ports {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let resolve = |name: &str, default: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            backend: resolve(BACKEND_PORT_VAR, DEFAULT_BACKEND_PORT),
            frontend: resolve(FRONTEND_PORT_VAR, DEFAULT_FRONTEND_PORT),
            postgres: resolve(POSTGRES_PORT_VAR, DEFAULT_POSTGRES_PORT),
            ollama: resolve(OLLAMA_PORT_VAR, DEFAULT_OLLAMA_PORT),
        }
    }

    /// URL the browser is pointed at once the services are up.
    pub fn frontend_url(&self) -> String {
        let port = if self.frontend.is_empty() {
            DEFAULT_FRONTEND_PORT
        } else {
            &self.frontend
        };
        format!("http://localhost:{}", port)
    }

    /// Environment pairs handed to the compose process; the compose file
    /// interpolates these into the published port mappings.
    pub fn compose_env(&self) -> Vec<(String, String)> {
        vec![
            (BACKEND_PORT_VAR.to_string(), self.backend.clone()),
            (FRONTEND_PORT_VAR.to_string(), self.frontend.clone()),
            (POSTGRES_PORT_VAR.to_string(), self.postgres.clone()),
            (OLLAMA_PORT_VAR.to_string(), self.ollama.clone()),
        ]
    }
}

impl Validate for Ports {
    fn validate(&self) -> Result<()> {
        validate_port(BACKEND_PORT_VAR, &self.backend)?;
        validate_port(FRONTEND_PORT_VAR, &self.frontend)?;
        validate_port(POSTGRES_PORT_VAR, &self.postgres)?;
        validate_port(OLLAMA_PORT_VAR, &self.ollama)?;
        Ok(())
    }
}

/// Directory the executable lives in, assumed to contain docker-compose.yml.
/// Resolution is best-effort: an empty path means "inherit the current
/// working directory" and is never an error.
pub fn project_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
}
