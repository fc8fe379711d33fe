//! CLI prompts using cliclack (Charm-style inline prompts)

pub mod prompts;

pub use prompts::{ask_yes_no, is_affirmative, print_next_steps, LAUNCH_PROMPT};
