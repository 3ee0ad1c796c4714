use crate::core::{CommandRunner, CommandSpec};

/// Browser-open strategy, picked once for the host OS instead of branching
/// at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserCommand {
    Windows,
    MacOs,
    Unix,
}

impl BrowserCommand {
    pub fn detect() -> Self {
        if cfg!(target_os = "windows") {
            BrowserCommand::Windows
        } else if cfg!(target_os = "macos") {
            BrowserCommand::MacOs
        } else {
            BrowserCommand::Unix
        }
    }

    pub fn open_spec(&self, url: &str) -> CommandSpec {
        match self {
            // "start" treats its first quoted argument as a window title, so
            // an empty one keeps the URL from being swallowed.
            BrowserCommand::Windows => CommandSpec::new("cmd", ["/c", "start", "", url]),
            BrowserCommand::MacOs => CommandSpec::new("open", [url]),
            BrowserCommand::Unix => CommandSpec::new("xdg-open", [url]),
        }
    }

    /// Dispatch the opener fire-and-forget; whether the browser actually
    /// comes up is never checked.
    pub fn open<R: CommandRunner>(&self, runner: &R, url: &str) {
        runner.spawn_detached(&self.open_spec(url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_opens_via_cmd_start() {
        let spec = BrowserCommand::Windows.open_spec("http://localhost:5173");
        assert_eq!(spec.program, "cmd");
        assert_eq!(spec.args, vec!["/c", "start", "", "http://localhost:5173"]);
    }

    #[test]
    fn macos_opens_via_open() {
        let spec = BrowserCommand::MacOs.open_spec("http://localhost:5173");
        assert_eq!(spec.program, "open");
        assert_eq!(spec.args, vec!["http://localhost:5173"]);
    }

    #[test]
    fn unix_opens_via_xdg_open() {
        let spec = BrowserCommand::Unix.open_spec("http://localhost:5173");
        assert_eq!(spec.program, "xdg-open");
        assert_eq!(spec.args, vec!["http://localhost:5173"]);
    }

    #[test]
    fn opener_runs_without_a_working_directory() {
        let spec = BrowserCommand::Unix.open_spec("http://localhost:5173");
        assert!(spec.current_dir.as_os_str().is_empty());
        assert!(spec.envs.is_empty());
    }
}
