//! Side effects the bootstrap performs on the machine
//!
//! [`Host`] is the seam between the orchestration and the operating system.
//! [`LocalHost`] is the production implementation; tests substitute a
//! recording double that never spawns real processes.

use crate::runtime::command::program_command;
use crate::runtime::{self, CommandResult, InterruptSignal, ToolProbe};
use crate::tui::prompts;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Child;

/// A spawned long-running child owned by the launch phase
#[allow(async_fn_in_trait)]
pub trait ManagedProcess {
    /// OS process id, if still known
    fn id(&self) -> Option<u32>;

    /// Wait for the process to exit, returning its exit code when it has one
    async fn wait(&mut self) -> Result<Option<i32>>;

    /// Ask the process to stop without waiting for it
    fn terminate(&mut self) -> Result<()>;
}

/// Operating system access used by the bootstrap
#[allow(async_fn_in_trait)]
pub trait Host {
    type Process: ManagedProcess;

    /// Probe a tool; never fails
    async fn probe(&self, tool: &str) -> ToolProbe;

    /// Run a shell command to completion in `cwd`
    async fn run_command(&self, command_line: &str, cwd: &Path) -> CommandResult;

    /// Start `program args…` in `cwd` in the background
    fn spawn(&self, program: &str, args: &[&str], cwd: &Path) -> Result<Self::Process>;

    fn open_browser(&self, url: &str) -> Result<()>;

    /// Ask the operator a yes/no question
    fn confirm(&self, prompt: &str) -> Result<bool>;

    async fn sleep(&self, duration: Duration);

    /// Resolve when the operator interrupts (Ctrl+C)
    async fn interrupted(&self);
}

/// Production host backed by tokio processes and the real terminal
#[derive(Debug, Clone, Default)]
pub struct LocalHost {
    interrupt: InterruptSignal,
}

impl LocalHost {
    pub fn new(interrupt: InterruptSignal) -> Self {
        Self { interrupt }
    }
}

impl Host for LocalHost {
    type Process = LocalProcess;

    async fn probe(&self, tool: &str) -> ToolProbe {
        runtime::probe(tool).await
    }

    async fn run_command(&self, command_line: &str, cwd: &Path) -> CommandResult {
        runtime::run_command(command_line, cwd).await
    }

    fn spawn(&self, program: &str, args: &[&str], cwd: &Path) -> Result<LocalProcess> {
        let child = program_command(program, args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("Failed to run {} {} in {}", program, args.join(" "), cwd.display()))?;

        tracing::debug!(program, pid = child.id(), cwd = %cwd.display(), "spawned process");
        Ok(LocalProcess { child })
    }

    fn open_browser(&self, url: &str) -> Result<()> {
        open::that(url).with_context(|| format!("Failed to open {}", url))?;
        Ok(())
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        prompts::ask_yes_no(prompt)
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    async fn interrupted(&self) {
        let armed = self.interrupt.arm();
        armed.wait().await;
    }
}

/// Handle to a child spawned by [`LocalHost`]
#[derive(Debug)]
pub struct LocalProcess {
    child: Child,
}

impl ManagedProcess for LocalProcess {
    fn id(&self) -> Option<u32> {
        self.child.id()
    }

    async fn wait(&mut self) -> Result<Option<i32>> {
        let status = self.child.wait().await?;
        Ok(status.code())
    }

    fn terminate(&mut self) -> Result<()> {
        tracing::debug!(pid = self.child.id(), "terminating process");
        self.child.start_kill()?;
        Ok(())
    }
}
