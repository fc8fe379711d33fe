//! Tool detection via `<tool> --version`

use crate::runtime::command::program_command;
use std::process::Stdio;
use std::time::Duration;
use tokio::time::timeout;

/// Timeout for a single version probe (10 seconds)
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Tool detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolProbe {
    pub name: String,
    pub present: bool,
    pub version: Option<String>,
}

impl ToolProbe {
    pub fn found(name: &str, version: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            present: true,
            version,
        }
    }

    pub fn missing(name: &str) -> Self {
        Self {
            name: name.to_string(),
            present: false,
            version: None,
        }
    }
}

/// Check if a tool is available on PATH
pub async fn probe(tool: &str) -> ToolProbe {
    probe_with_timeout(tool, PROBE_TIMEOUT).await
}

/// Same as [`probe`] with a custom bound
pub async fn probe_with_timeout(tool: &str, limit: Duration) -> ToolProbe {
    let mut cmd = program_command(tool, &["--version"]);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let result = match timeout(limit, cmd.output()).await {
        Ok(Ok(out)) if out.status.success() => {
            ToolProbe::found(tool, first_line(&String::from_utf8_lossy(&out.stdout)))
        }
        _ => ToolProbe::missing(tool),
    };

    tracing::debug!(
        tool,
        present = result.present,
        version = result.version.as_deref().unwrap_or("-"),
        "probed tool"
    );
    result
}

/// First non-empty trimmed line of a `--version` output
fn first_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
