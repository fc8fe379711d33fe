//! Charm-style CLI prompts using cliclack

use crate::product::ProjectConfig;
use anyhow::Result;
use colored::Colorize;

/// Prompt shown before the interactive launch
///
/// No trailing ": " since cliclack draws its own input marker.
pub const LAUNCH_PROMPT: &str = "Would you like to start the servers now? (y/n)";

/// `y` / `yes`, trimmed and case-insensitive
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask a free-form yes/no question; anything but `y`/`yes` is a no
pub fn ask_yes_no(prompt: &str) -> Result<bool> {
    let answer: String = cliclack::input(prompt)
        .placeholder("n")
        .required(false)
        .interact()?;
    Ok(is_affirmative(&answer))
}

pub fn print_next_steps<C: ProjectConfig>(config: &C) -> Result<()> {
    let steps = config.next_steps();

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    println!();
    println!("  Quick start commands");
    println!();

    let quick_start = config.quick_start();
    let width = quick_start.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, command) in &quick_start {
        println!(
            "  {:width$}  {}",
            format!("{}:", label),
            command.yellow(),
            width = width + 1
        );
    }
    println!();

    Ok(())
}
