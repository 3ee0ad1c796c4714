pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::{system::SystemRunner, CliArgs, Ports};
pub use crate::core::browser::BrowserCommand;
pub use crate::core::compose::ComposeStarter;
pub use crate::core::launcher::LaunchEngine;
pub use crate::core::{CommandRunner, CommandSpec};
pub use crate::utils::error::{LaunchError, Result};
