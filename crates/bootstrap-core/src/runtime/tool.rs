//! Tool declarations and version advisories
//!
//! A project declares the command-line tools it depends on as a list of
//! [`ToolConfig`] values. Required tools stop the bootstrap when absent,
//! optional tools only produce a warning.

use anyhow::Result;
use semver::Version;

/// Whether a tool's absence stops the bootstrap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Hard prerequisite: the whole procedure stops without it
    Required,
    /// Soft prerequisite: reported as a warning only
    Optional,
}

/// Configuration for a CLI tool the project depends on
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "node")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Where to download the tool from
    pub install_url: &'static str,
    /// Extra guidance printed under the install URL when the tool is missing
    pub hint: Option<&'static str>,
    pub requirement: Requirement,
    /// Oldest version that is known to work, if any
    pub min_version: Option<&'static str>,
}

impl ToolConfig {
    pub fn required(name: &'static str, display_name: &'static str, install_url: &'static str) -> Self {
        Self {
            name,
            display_name,
            install_url,
            hint: None,
            requirement: Requirement::Required,
            min_version: None,
        }
    }

    pub fn optional(name: &'static str, display_name: &'static str, install_url: &'static str) -> Self {
        Self {
            requirement: Requirement::Optional,
            ..Self::required(name, display_name, install_url)
        }
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn with_min_version(mut self, version: &'static str) -> Self {
        self.min_version = Some(version);
        self
    }

    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    /// Compare a probed version against `min_version`
    ///
    /// Returns a warning message if the installed version is older than the
    /// minimum. Unparseable versions never produce a warning.
    pub fn version_advisory(&self, installed: &str) -> Option<String> {
        let min = self.min_version?;
        let min_ver = parse_version(min).ok()?;
        let installed_ver = parse_version(installed).ok()?;

        if installed_ver < min_ver {
            Some(format!(
                "{} {} is older than the recommended {} or newer",
                self.display_name, installed, min
            ))
        } else {
            None
        }
    }
}

/// Parse a tool's version string, handling `v` prefixes and short forms
///
/// `v18.17.0`, `18.17` and `7` are all accepted; any leading text before the
/// first digit (e.g. `db version v7.0.2`) is skipped.
pub fn parse_version(version_str: &str) -> Result<Version> {
    let start = version_str
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| anyhow::anyhow!("Invalid version '{}': no digits", version_str))?;
    let cleaned: String = version_str[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut parts: Vec<&str> = cleaned.split('.').filter(|p| !p.is_empty()).collect();
    parts.truncate(3);
    while parts.len() < 3 {
        parts.push("0");
    }

    Version::parse(&parts.join("."))
        .map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
