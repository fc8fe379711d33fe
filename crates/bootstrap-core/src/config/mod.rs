//! Configuration file materialization

pub mod env_file;

pub use env_file::{write_if_absent, EnvSection, EnvTemplate, WriteOutcome};
