//! Interactive launch of both servers
//!
//! The root server is started first, then after a fixed settle delay the
//! client server. There is no readiness check. The phase blocks until both
//! children exit or the operator interrupts, in which case both are asked to
//! terminate.

use crate::error::BootstrapError;
use crate::host::{Host, ManagedProcess};
use crate::product::{capitalize, ProjectConfig};
use anyhow::Result;
use std::path::Path;
use std::time::Duration;

/// Pause between starting the root and the client server
pub const SETTLE_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The operator chose not to launch
    Declined,
    /// Both servers exited on their own
    Exited {
        root: Option<i32>,
        client: Option<i32>,
    },
    /// The operator interrupted and both servers were asked to stop
    Interrupted,
}

/// Start both servers and block until they exit or the operator interrupts
///
/// Interrupts are only handled during the final wait. A Ctrl+C while the
/// servers are still being started (including the settle delay) falls through
/// to the binary's default handler and exits the process.
pub async fn interactive_launch<C, H>(config: &C, host: &H, root_dir: &Path) -> Result<LaunchOutcome>
where
    C: ProjectConfig,
    H: Host,
{
    let program = config.package_manager();
    let args = config.start_args();
    let client_dir = root_dir.join(config.client_dir());

    cliclack::log::step(format!("Starting {} server...", config.root_label()))?;
    cliclack::log::info(format!(
        "{} will run on: {}\n{} will run on: {}\nPress Ctrl+C to stop both servers",
        capitalize(config.root_label()),
        config.backend_url(),
        capitalize(config.client_label()),
        config.frontend_url()
    ))?;

    let mut root = host
        .spawn(program, args, root_dir)
        .map_err(|e| spawn_error(config.root_label(), &e))?;

    host.sleep(SETTLE_DELAY).await;

    cliclack::log::step(format!("Starting {} server...", config.client_label()))?;
    let mut client = match host.spawn(program, args, &client_dir) {
        Ok(process) => process,
        Err(e) => {
            stop(&mut root, config.root_label())?;
            return Err(spawn_error(config.client_label(), &e).into());
        }
    };

    cliclack::log::step("Opening application in browser...")?;
    if let Err(e) = host.open_browser(config.frontend_url()) {
        cliclack::log::warning(format!("{:#}", e))?;
    }

    let exits = tokio::select! {
        exits = async { tokio::join!(root.wait(), client.wait()) } => Some(exits),
        () = host.interrupted() => None,
    };

    match exits {
        Some((root_exit, client_exit)) => {
            let root_code = exit_code(root_exit, config.root_label())?;
            let client_code = exit_code(client_exit, config.client_label())?;
            cliclack::log::info("Servers exited")?;
            Ok(LaunchOutcome::Exited {
                root: root_code,
                client: client_code,
            })
        }
        None => {
            cliclack::log::step("Stopping servers...")?;
            stop(&mut root, config.root_label())?;
            stop(&mut client, config.client_label())?;
            cliclack::log::success("Servers stopped")?;
            Ok(LaunchOutcome::Interrupted)
        }
    }
}

fn spawn_error(label: &str, err: &anyhow::Error) -> BootstrapError {
    BootstrapError::Spawn {
        label: label.to_string(),
        reason: format!("{:#}", err),
    }
}

/// Terminate a child, downgrading failures to a warning
fn stop<P: ManagedProcess>(process: &mut P, label: &str) -> Result<()> {
    if let Err(e) = process.terminate() {
        tracing::warn!(label, pid = process.id(), error = %e, "terminate failed");
        cliclack::log::warning(format!("Could not stop {} server: {:#}", label, e))?;
    }
    Ok(())
}

fn exit_code(result: Result<Option<i32>>, label: &str) -> Result<Option<i32>> {
    match result {
        Ok(code) => {
            tracing::debug!(label, code, "server exited");
            Ok(code)
        }
        Err(e) => {
            cliclack::log::warning(format!("Lost track of {} server: {:#}", label, e))?;
            Ok(None)
        }
    }
}
