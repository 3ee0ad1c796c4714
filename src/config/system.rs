use crate::core::{CommandRunner, CommandSpec};
use tokio::process::Command;

/// Production runner backed by real subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> bool {
        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .envs(spec.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        // An empty dir means resolution failed earlier; inherit the cwd then.
        if !spec.current_dir.as_os_str().is_empty() {
            command.current_dir(&spec.current_dir);
        }

        // stdio is inherited, so the command's output streams live to the
        // console while we block on it.
        match command.status().await {
            Ok(status) => status.success(),
            Err(e) => {
                tracing::debug!("failed to launch {}: {}", spec.program, e);
                false
            }
        }
    }

    fn spawn_detached(&self, spec: &CommandSpec) {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);

        // Fire-and-forget: the child is never awaited and launch errors are
        // discarded.
        let _ = command.spawn();
    }
}
