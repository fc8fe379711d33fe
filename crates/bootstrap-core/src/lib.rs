//! Bootstrap Core - Shared library for development environment setup CLIs
//!
//! This library prepares a two-package project (a root package plus a client
//! package in a subdirectory) for local development. Binaries describe their
//! project through [`ProjectConfig`] and hand it to a [`Bootstrapper`].
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Tool probing, command execution, env file writing
//! - **Layer 2: Workflow Orchestration** - `ProjectConfig` trait, `Bootstrapper`, launch phase
//! - **Layer 3: CLI Interface** - cliclack-based prompts and output
//!
//! All side effects go through the [`Host`] trait; [`LocalHost`] is the
//! implementation that talks to the real machine.
//!
//! # Example Usage
//!
//! ```ignore
//! use bootstrap_core::{BootstrapOptions, Bootstrapper, LocalHost};
//!
//! let host = LocalHost::default();
//! let options = BootstrapOptions::new(std::env::current_dir()?);
//! let outcome = Bootstrapper::new(&MyProject, &host, options).run().await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod host;
pub mod launch;
pub mod product;
pub mod runtime;
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use bootstrap::{BootstrapOptions, Bootstrapper, LaunchChoice, Outcome};
pub use config::{EnvTemplate, WriteOutcome};
pub use error::BootstrapError;
pub use host::{Host, LocalHost, ManagedProcess};
pub use launch::LaunchOutcome;
pub use product::ProjectConfig;
pub use runtime::{InterruptSignal, Requirement, ToolConfig, ToolProbe};
