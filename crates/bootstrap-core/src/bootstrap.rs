//! Bootstrap orchestration
//!
//! Steps run strictly in order and the first hard failure stops the run:
//!
//! 1. Probe each declared tool (required ones abort, optional ones warn)
//! 2. Install dependencies in the project root
//! 3. Install dependencies in the client directory
//! 4. Write the environment file if it is absent
//! 5. Print next steps
//! 6. Optionally launch both servers

use crate::config::{self, WriteOutcome};
use crate::error::BootstrapError;
use crate::host::Host;
use crate::launch::{self, LaunchOutcome};
use crate::product::{capitalize, ProjectConfig};
use crate::tui::{self, LAUNCH_PROMPT};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// How to decide on the interactive launch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LaunchChoice {
    /// Prompt the operator
    #[default]
    Ask,
    /// Launch without prompting
    Always,
    /// Never launch
    Never,
}

#[derive(Debug, Clone)]
pub struct BootstrapOptions {
    /// Project root; the client directory is resolved relative to it
    pub project_dir: PathBuf,
    pub launch: LaunchChoice,
}

impl BootstrapOptions {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            launch: LaunchChoice::Ask,
        }
    }

    pub fn with_launch(mut self, launch: LaunchChoice) -> Self {
        self.launch = launch;
        self
    }
}

/// How a bootstrap run ended
#[derive(Debug)]
pub enum Outcome {
    /// A hard prerequisite or install step failed; the diagnostic was printed
    Aborted(BootstrapError),
    /// Setup finished
    Ready {
        env_file: WriteOutcome,
        launch: LaunchOutcome,
    },
}

pub struct Bootstrapper<'a, C, H> {
    config: &'a C,
    host: &'a H,
    options: BootstrapOptions,
}

impl<'a, C: ProjectConfig, H: Host> Bootstrapper<'a, C, H> {
    pub fn new(config: &'a C, host: &'a H, options: BootstrapOptions) -> Self {
        Self {
            config,
            host,
            options,
        }
    }

    /// Run the whole procedure
    ///
    /// Hard failures are reported to the operator and returned as
    /// [`Outcome::Aborted`]; `Err` is reserved for terminal I/O failures.
    pub async fn run(&self) -> Result<Outcome> {
        cliclack::intro(format!("{} - Full Application Setup", self.config.display_name()))?;

        match self.setup().await {
            Ok((env_file, launch)) => Ok(Outcome::Ready { env_file, launch }),
            Err(err) => match err.downcast::<BootstrapError>() {
                Ok(failure) => {
                    cliclack::outro_cancel(format!("Setup stopped: {}", failure))?;
                    Ok(Outcome::Aborted(failure))
                }
                Err(other) => Err(other),
            },
        }
    }

    async fn setup(&self) -> Result<(WriteOutcome, LaunchOutcome)> {
        let root = self.options.project_dir.as_path();

        self.check_tools().await?;

        cliclack::log::step("Setting up the application...")?;
        self.install(self.config.root_label(), root).await?;

        let client_dir = root.join(self.config.client_dir());
        if !client_dir.is_dir() {
            cliclack::log::error(format!(
                "{} directory not found: {}",
                capitalize(self.config.client_label()),
                client_dir.display()
            ))?;
            return Err(BootstrapError::MissingDirectory(client_dir).into());
        }
        self.install(self.config.client_label(), &client_dir).await?;

        let env_file = self.write_env_file(root).await?;

        cliclack::log::success("Setup complete!")?;
        tui::print_next_steps(self.config)?;

        let launch = if self.should_launch()? {
            launch::interactive_launch(self.config, self.host, root).await?
        } else {
            LaunchOutcome::Declined
        };

        cliclack::outro("Happy coding!")?;
        Ok((env_file, launch))
    }

    async fn check_tools(&self) -> Result<()> {
        for tool in self.config.tools() {
            let probe = self.host.probe(tool.name).await;

            if probe.present {
                cliclack::log::success(format!(
                    "{} is installed ({})",
                    tool.display_name,
                    probe.version.as_deref().unwrap_or("unknown")
                ))?;
                if let Some(warning) = probe
                    .version
                    .as_deref()
                    .and_then(|v| tool.version_advisory(v))
                {
                    cliclack::log::warning(warning)?;
                }
                continue;
            }

            let mut guidance = format!("Please install {} from: {}", tool.display_name, tool.install_url);
            if let Some(hint) = tool.hint {
                guidance.push('\n');
                guidance.push_str(hint);
            }

            if tool.is_required() {
                cliclack::log::error(format!("{} is not installed\n{}", tool.display_name, guidance))?;
                return Err(BootstrapError::MissingTool {
                    tool: tool.display_name.to_string(),
                }
                .into());
            }

            cliclack::log::warning(format!("{} not found in PATH\n{}", tool.display_name, guidance))?;
        }

        Ok(())
    }

    async fn install(&self, label: &str, dir: &Path) -> Result<()> {
        let spinner = cliclack::spinner();
        spinner.start(format!("Installing {} dependencies...", label));

        let result = self
            .host
            .run_command(&self.config.install_command(), dir)
            .await;

        if result.success {
            spinner.stop(format!("{} dependencies installed", capitalize(label)));
            return Ok(());
        }

        spinner.stop(format!("Failed to install {} dependencies", label));
        cliclack::log::error(format!("Error: {}", result.stderr))?;
        Err(BootstrapError::InstallFailed {
            label: label.to_string(),
            stderr: result.stderr,
        }
        .into())
    }

    async fn write_env_file(&self, root: &Path) -> Result<WriteOutcome> {
        let name = self.config.env_file_name();
        let path = root.join(name);
        let contents = self.config.env_template().render();

        match config::write_if_absent(&path, &contents).await {
            Ok(WriteOutcome::Created) => {
                cliclack::log::success(format!("Environment file created ({})", name))?;
                Ok(WriteOutcome::Created)
            }
            Ok(WriteOutcome::AlreadyPresent) => {
                cliclack::log::info(format!("Keeping existing environment file ({})", name))?;
                Ok(WriteOutcome::AlreadyPresent)
            }
            Err(source) => {
                cliclack::log::error(format!("Could not write {}: {}", path.display(), source))?;
                Err(BootstrapError::EnvFile { path, source }.into())
            }
        }
    }

    fn should_launch(&self) -> Result<bool> {
        match self.options.launch {
            LaunchChoice::Always => Ok(true),
            LaunchChoice::Never => Ok(false),
            LaunchChoice::Ask => self.host.confirm(LAUNCH_PROMPT),
        }
    }
}
