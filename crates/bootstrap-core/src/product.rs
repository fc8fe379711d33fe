//! Project configuration trait for setup binaries
//!
//! Each project implements this trait to define what gets checked,
//! installed, written and launched.

use crate::config::EnvTemplate;
use crate::runtime::ToolConfig;

/// Configuration trait for different projects
///
/// A project is a root package plus one client package in a subdirectory,
/// both driven by the same package manager.
pub trait ProjectConfig: Clone + Send + Sync + 'static {
    /// Human-readable project name
    fn display_name(&self) -> &'static str;

    /// Tools to probe, in order
    fn tools(&self) -> Vec<ToolConfig>;

    /// Package manager binary used for install and start
    fn package_manager(&self) -> &'static str;

    /// Subdirectory holding the client package
    fn client_dir(&self) -> &'static str;

    /// Contents of the default environment file
    fn env_template(&self) -> EnvTemplate;

    /// URL the root server is expected to listen on
    fn backend_url(&self) -> &'static str;

    /// URL the client server is expected to listen on (opened in the browser)
    fn frontend_url(&self) -> &'static str;

    /// Manual steps printed after setup
    fn next_steps(&self) -> Vec<String>;

    /// Environment file name at the project root
    fn env_file_name(&self) -> &'static str {
        ".env"
    }

    /// Label for the root package in messages
    fn root_label(&self) -> &'static str {
        "backend"
    }

    /// Label for the client package in messages
    fn client_label(&self) -> &'static str {
        "frontend"
    }

    fn install_command(&self) -> String {
        format!("{} install", self.package_manager())
    }

    fn start_args(&self) -> &'static [&'static str] {
        &["start"]
    }

    /// (label, command) pairs shown as quick-start commands
    fn quick_start(&self) -> Vec<(String, String)> {
        let start = format!("{} {}", self.package_manager(), self.start_args().join(" "));
        vec![
            (capitalize(self.root_label()), start.clone()),
            (
                capitalize(self.client_label()),
                format!("cd {} && {}", self.client_dir(), start),
            ),
        ]
    }
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Minimal;

    impl ProjectConfig for Minimal {
        fn display_name(&self) -> &'static str {
            "Minimal"
        }
        fn tools(&self) -> Vec<ToolConfig> {
            Vec::new()
        }
        fn package_manager(&self) -> &'static str {
            "pnpm"
        }
        fn client_dir(&self) -> &'static str {
            "web"
        }
        fn env_template(&self) -> EnvTemplate {
            EnvTemplate::new()
        }
        fn backend_url(&self) -> &'static str {
            "http://localhost:8080"
        }
        fn frontend_url(&self) -> &'static str {
            "http://localhost:8081"
        }
        fn next_steps(&self) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_default_commands_follow_package_manager() {
        assert_eq!(Minimal.install_command(), "pnpm install");
        assert_eq!(
            Minimal.quick_start(),
            vec![
                ("Backend".to_string(), "pnpm start".to_string()),
                ("Frontend".to_string(), "cd web && pnpm start".to_string()),
            ]
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("backend"), "Backend");
        assert_eq!(capitalize(""), "");
    }
}
