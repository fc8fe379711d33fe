//! Shell command execution with a bounded wait

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Timeout for install-style commands (60 seconds)
pub const COMMAND_TIMEOUT: Duration = Duration::from_secs(60);

/// stderr reported when a command exceeds its timeout
pub const TIMEOUT_MESSAGE: &str = "Command timed out";

/// Captured result of a finished (or abandoned) command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn timed_out() -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: TIMEOUT_MESSAGE.to_string(),
        }
    }

    fn spawn_failed(err: &std::io::Error) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: err.to_string(),
        }
    }
}

/// Build a command that runs `command_line` through the platform shell
fn shell_command(command_line: &str) -> Command {
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C");
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c");
        c
    };
    cmd.arg(command_line);
    cmd
}

/// Build a command for an executable on PATH
///
/// On Windows package managers ship as `.cmd` shims that only the shell can
/// resolve, so the program is routed through `cmd /C` there.
pub fn program_command(program: &str, args: &[&str]) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(program).args(args);
        cmd
    } else {
        let mut cmd = Command::new(program);
        cmd.args(args);
        cmd
    }
}

/// Run a shell command in `cwd`, capturing both streams as text
pub async fn run_command(command_line: &str, cwd: &Path) -> CommandResult {
    run_command_with_timeout(command_line, cwd, COMMAND_TIMEOUT).await
}

/// Same as [`run_command`] with a custom bound
pub async fn run_command_with_timeout(
    command_line: &str,
    cwd: &Path,
    limit: Duration,
) -> CommandResult {
    let mut cmd = shell_command(command_line);
    cmd.current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    tracing::debug!(command = command_line, cwd = %cwd.display(), "running command");

    // Dropping the output future on timeout drops the child, which kills it
    match timeout(limit, cmd.output()).await {
        Ok(Ok(output)) => {
            tracing::debug!(command = command_line, status = %output.status, "command finished");
            CommandResult {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }
        }
        Ok(Err(e)) => {
            tracing::debug!(command = command_line, error = %e, "command failed to start");
            CommandResult::spawn_failed(&e)
        }
        Err(_) => {
            tracing::warn!(
                command = command_line,
                seconds = limit.as_secs(),
                "command timed out"
            );
            CommandResult::timed_out()
        }
    }
}
