//! Hard failures that stop the bootstrap

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("{tool} is not installed")]
    MissingTool { tool: String },

    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Failed to install {label} dependencies")]
    InstallFailed { label: String, stderr: String },

    #[error("Failed to write {}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start {label} server: {reason}")]
    Spawn { label: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = BootstrapError::MissingTool {
            tool: "Node.js".to_string(),
        };
        assert_eq!(err.to_string(), "Node.js is not installed");

        let err = BootstrapError::MissingDirectory(PathBuf::from("client"));
        assert_eq!(err.to_string(), "Directory not found: client");

        let err = BootstrapError::InstallFailed {
            label: "frontend".to_string(),
            stderr: "ERR!".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to install frontend dependencies");
    }
}
