use std::path::PathBuf;

/// One external command invocation: program, arguments, working directory
/// and extra environment pairs. An empty `current_dir` means the child
/// inherits the launcher's working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
    pub envs: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: PathBuf::new(),
            envs: Vec::new(),
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = dir.into();
        self
    }

    pub fn with_envs(mut self, envs: Vec<(String, String)>) -> Self {
        self.envs = envs;
        self
    }

    /// Command line as shown in log output.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

pub trait CommandRunner: Send + Sync {
    /// Run the command to completion with inherited stdio. Returns whether
    /// it exited successfully; a failure to launch counts the same as a
    /// non-zero exit.
    fn run(&self, spec: &CommandSpec) -> impl std::future::Future<Output = bool> + Send;

    /// Spawn the command without awaiting it; errors are discarded.
    fn spawn_detached(&self, spec: &CommandSpec);
}
