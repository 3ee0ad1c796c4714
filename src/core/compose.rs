use crate::config::Ports;
use crate::core::{CommandRunner, CommandSpec};
use crate::utils::error::{LaunchError, Result};
use std::path::PathBuf;

const COMPOSE_ARGS_UP: [&str; 3] = ["up", "-d", "--build"];
const COMPOSE_ARGS_DOWN: [&str; 1] = ["down"];

/// Runs the orchestration tool in the project directory. Prefers the
/// `docker compose` plugin and falls back once to the legacy standalone
/// `docker-compose` with identical arguments.
pub struct ComposeStarter {
    project_dir: PathBuf,
    port_env: Vec<(String, String)>,
}

impl ComposeStarter {
    pub fn new(project_dir: PathBuf, ports: &Ports) -> Self {
        Self {
            project_dir,
            port_env: ports.compose_env(),
        }
    }

    pub fn project_dir(&self) -> &PathBuf {
        &self.project_dir
    }

    pub fn up_primary(&self) -> CommandSpec {
        self.primary(&COMPOSE_ARGS_UP)
    }

    pub fn up_fallback(&self) -> CommandSpec {
        self.fallback(&COMPOSE_ARGS_UP)
    }

    pub fn down_primary(&self) -> CommandSpec {
        self.primary(&COMPOSE_ARGS_DOWN)
    }

    pub fn down_fallback(&self) -> CommandSpec {
        self.fallback(&COMPOSE_ARGS_DOWN)
    }

    pub async fn up<R: CommandRunner>(&self, runner: &R) -> Result<()> {
        self.run_with_fallback(runner, self.up_primary(), self.up_fallback(), "up")
            .await
    }

    pub async fn down<R: CommandRunner>(&self, runner: &R) -> Result<()> {
        self.run_with_fallback(runner, self.down_primary(), self.down_fallback(), "down")
            .await
    }

    fn primary(&self, action_args: &[&str]) -> CommandSpec {
        let args = std::iter::once("compose").chain(action_args.iter().copied());
        CommandSpec::new("docker", args)
            .in_dir(self.project_dir.clone())
            .with_envs(self.port_env.clone())
    }

    fn fallback(&self, action_args: &[&str]) -> CommandSpec {
        CommandSpec::new("docker-compose", action_args.iter().copied())
            .in_dir(self.project_dir.clone())
            .with_envs(self.port_env.clone())
    }

    async fn run_with_fallback<R: CommandRunner>(
        &self,
        runner: &R,
        primary: CommandSpec,
        fallback: CommandSpec,
        action: &str,
    ) -> Result<()> {
        tracing::debug!("running: {}", primary.display());
        if runner.run(&primary).await {
            return Ok(());
        }

        tracing::warn!(
            "'{}' failed, falling back to '{}'",
            primary.display(),
            fallback.display()
        );
        if runner.run(&fallback).await {
            return Ok(());
        }

        Err(LaunchError::ComposeFailed {
            action: action.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingRunner {
        calls: Arc<Mutex<Vec<CommandSpec>>>,
        failing: Arc<Mutex<HashSet<String>>>,
    }

    impl RecordingRunner {
        fn fail_program(&self, program: &str) {
            self.failing.lock().unwrap().insert(program.to_string());
        }

        fn calls(&self) -> Vec<CommandSpec> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&self, spec: &CommandSpec) -> bool {
            self.calls.lock().unwrap().push(spec.clone());
            !self.failing.lock().unwrap().contains(&spec.program)
        }

        fn spawn_detached(&self, _spec: &CommandSpec) {}
    }

    fn starter() -> ComposeStarter {
        let ports = Ports::from_lookup(|_| None);
        ComposeStarter::new(PathBuf::from("/opt/crm"), &ports)
    }

    #[tokio::test]
    async fn up_uses_primary_command_only_on_success() {
        let runner = RecordingRunner::default();
        starter().up(&runner).await.unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program, "docker");
        assert_eq!(calls[0].args, vec!["compose", "up", "-d", "--build"]);
        assert_eq!(calls[0].current_dir, Path::new("/opt/crm"));
    }

    #[tokio::test]
    async fn up_falls_back_exactly_once_with_identical_setup() {
        let runner = RecordingRunner::default();
        runner.fail_program("docker");

        starter().up(&runner).await.unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].program, "docker-compose");
        assert_eq!(calls[1].args, vec!["up", "-d", "--build"]);
        assert_eq!(calls[1].current_dir, calls[0].current_dir);
        assert_eq!(calls[1].envs, calls[0].envs);
    }

    #[tokio::test]
    async fn up_fails_when_both_variants_fail() {
        let runner = RecordingRunner::default();
        runner.fail_program("docker");
        runner.fail_program("docker-compose");

        let err = starter().up(&runner).await.unwrap_err();
        match err {
            LaunchError::ComposeFailed { action } => assert_eq!(action, "up"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(runner.calls().len(), 2);
    }

    #[tokio::test]
    async fn commands_carry_the_resolved_port_environment() {
        let ports = Ports::from_lookup(|name| match name {
            "CRM2_FRONTEND_PORT" => Some("8080".to_string()),
            _ => None,
        });
        let starter = ComposeStarter::new(PathBuf::from("/opt/crm"), &ports);

        let spec = starter.up_primary();
        assert!(spec
            .envs
            .contains(&("CRM2_FRONTEND_PORT".to_string(), "8080".to_string())));
        assert!(spec
            .envs
            .contains(&("CRM2_BACKEND_PORT".to_string(), "3002".to_string())));
        assert!(spec
            .envs
            .contains(&("CRM2_POSTGRES_PORT".to_string(), "5434".to_string())));
        assert!(spec
            .envs
            .contains(&("CRM2_OLLAMA_PORT".to_string(), "11435".to_string())));
    }

    #[tokio::test]
    async fn down_uses_the_same_fallback_machinery() {
        let runner = RecordingRunner::default();
        runner.fail_program("docker");

        starter().down(&runner).await.unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].args, vec!["compose", "down"]);
        assert_eq!(calls[1].program, "docker-compose");
        assert_eq!(calls[1].args, vec!["down"]);
    }
}
