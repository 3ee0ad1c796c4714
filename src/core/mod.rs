pub mod browser;
pub mod compose;
pub mod launcher;
pub mod ports;

pub use crate::utils::error::Result;
pub use ports::{CommandRunner, CommandSpec};
