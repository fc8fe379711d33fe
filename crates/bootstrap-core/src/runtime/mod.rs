//! Runtime detection and process plumbing
//!
//! This module provides:
//! - Tool declarations and version advisories
//! - Tool probing (`<tool> --version` with a timeout)
//! - Shell command execution with captured output
//! - Interrupt delivery for the launch phase

pub mod command;
pub mod interrupt;
pub mod probe;
pub mod tool;

pub use command::{run_command, CommandResult, COMMAND_TIMEOUT, TIMEOUT_MESSAGE};
pub use interrupt::InterruptSignal;
pub use probe::{probe, ToolProbe, PROBE_TIMEOUT};
pub use tool::{Requirement, ToolConfig};
