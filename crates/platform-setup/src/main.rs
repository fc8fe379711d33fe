//! Financial Transparency Platform - full application setup
//!
//! Checks for Node.js, npm and MongoDB, installs backend and frontend
//! dependencies, writes a default `.env`, and optionally starts both servers.

mod logging;

use anyhow::Result;
use bootstrap_core::{
    BootstrapOptions, Bootstrapper, EnvTemplate, InterruptSignal, LaunchChoice, LocalHost,
    ProjectConfig, ToolConfig,
};
use clap::Parser;
use std::path::PathBuf;

/// Financial Transparency Platform project configuration
#[derive(Clone)]
pub struct PlatformConfig;

impl ProjectConfig for PlatformConfig {
    fn display_name(&self) -> &'static str {
        "Financial Transparency Platform"
    }

    fn tools(&self) -> Vec<ToolConfig> {
        vec![
            ToolConfig::required("node", "Node.js", "https://nodejs.org/")
                .with_hint("Choose the LTS version for best compatibility")
                .with_min_version("16.0.0"),
            ToolConfig::required("npm", "npm", "https://nodejs.org/"),
            ToolConfig::optional(
                "mongod",
                "MongoDB",
                "https://www.mongodb.com/try/download/community",
            )
            .with_hint("Make sure to add MongoDB to your system PATH"),
        ]
    }

    fn package_manager(&self) -> &'static str {
        "npm"
    }

    fn client_dir(&self) -> &'static str {
        "client"
    }

    fn env_template(&self) -> EnvTemplate {
        EnvTemplate::new()
            .section(
                "Database",
                &[(
                    "MONGODB_URI",
                    "mongodb://localhost:27017/financial-transparency",
                )],
            )
            .section(
                "Server",
                &[
                    ("PORT", "5000"),
                    ("NODE_ENV", "development"),
                    ("CLIENT_URL", "http://localhost:3000"),
                ],
            )
            .section(
                "JWT",
                &[
                    (
                        "JWT_SECRET",
                        "your-super-secret-jwt-key-change-this-in-production",
                    ),
                    ("JWT_EXPIRE", "7d"),
                ],
            )
            .section(
                "Blockchain (Local)",
                &[
                    ("ETHEREUM_RPC_URL", "http://localhost:8545"),
                    ("PRIVATE_KEY", "your-private-key-for-blockchain-operations"),
                    ("CONTRACT_ADDRESS", "your-smart-contract-address"),
                ],
            )
            .section(
                "File Upload",
                &[("MAX_FILE_SIZE", "10485760"), ("UPLOAD_PATH", "./uploads")],
            )
    }

    fn backend_url(&self) -> &'static str {
        "http://localhost:5000"
    }

    fn frontend_url(&self) -> &'static str {
        "http://localhost:3000"
    }

    fn next_steps(&self) -> Vec<String> {
        vec![
            "Make sure MongoDB is running".to_string(),
            "Start the backend server: npm start".to_string(),
            "In a new terminal, start the frontend: cd client && npm start".to_string(),
            format!("Open {} in your browser", self.frontend_url()),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "platform-setup")]
#[command(about = "Set up and run the Financial Transparency Platform locally")]
#[command(version)]
pub struct Args {
    /// Project root containing the backend package and the client directory (defaults to the current directory)
    #[arg(long = "project-dir")]
    pub project_dir: Option<PathBuf>,

    /// Start the servers without asking
    #[arg(short, long, conflicts_with = "no_launch")]
    pub yes: bool,

    /// Finish after setup without starting the servers
    #[arg(long = "no-launch")]
    pub no_launch: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    fn launch_choice(&self) -> LaunchChoice {
        if self.yes {
            LaunchChoice::Always
        } else if self.no_launch {
            LaunchChoice::Never
        } else {
            LaunchChoice::Ask
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    let args = Args::parse();
    logging::init_logging(args.debug)?;

    // Ctrl+C stops the servers while they run, and exits otherwise
    let interrupt = InterruptSignal::new();
    let handler_signal = interrupt.clone();
    ctrlc::set_handler(move || {
        if !handler_signal.trigger() {
            let _ = console::Term::stderr().show_cursor();
            std::process::exit(130);
        }
    })
    .ok();

    let project_dir = match &args.project_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let config = PlatformConfig;
    let host = LocalHost::new(interrupt);
    let options = BootstrapOptions::new(project_dir).with_launch(args.launch_choice());

    let result = Bootstrapper::new(&config, &host, options).run().await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    let outcome = result?;
    tracing::debug!(?outcome, "setup finished");
    Ok(())
}
