use crate::config::Ports;
use crate::core::browser::BrowserCommand;
use crate::core::compose::ComposeStarter;
use crate::core::CommandRunner;
use crate::utils::error::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Time the services get to come up before the browser is pointed at them.
/// A flat delay, not a readiness check.
const STARTUP_WAIT: Duration = Duration::from_secs(15);

pub struct LaunchEngine<R: CommandRunner> {
    runner: R,
    starter: ComposeStarter,
    browser: BrowserCommand,
    ports: Ports,
    wait: Duration,
}

impl<R: CommandRunner> LaunchEngine<R> {
    pub fn new(runner: R, ports: Ports, project_dir: PathBuf) -> Self {
        let starter = ComposeStarter::new(project_dir, &ports);
        Self {
            runner,
            starter,
            browser: BrowserCommand::detect(),
            ports,
            wait: STARTUP_WAIT,
        }
    }

    pub fn with_wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_browser(mut self, browser: BrowserCommand) -> Self {
        self.browser = browser;
        self
    }

    /// The full launch sequence: bring the services up, wait, open the
    /// browser. Returns the URL the browser was pointed at.
    pub async fn run(&self) -> Result<String> {
        println!("CRM Launcher - starting services...");
        println!("Project dir: {}", self.starter.project_dir().display());

        self.starter.up(&self.runner).await?;

        let url = self.ports.frontend_url();

        println!("Waiting for app to be ready...");
        tokio::time::sleep(self.wait).await;

        self.browser.open(&self.runner, &url);

        Ok(url)
    }

    /// Stop mode: tear the services down, nothing else.
    pub async fn shutdown(&self) -> Result<()> {
        println!("CRM Launcher - stopping services...");
        println!("Project dir: {}", self.starter.project_dir().display());

        self.starter.down(&self.runner).await
    }
}
