//! Default `.env` generation
//!
//! The environment file is write-once: an existing file is never touched,
//! whatever it contains.

use std::io;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// A commented group of `KEY=VALUE` lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSection {
    pub title: &'static str,
    pub entries: Vec<(&'static str, &'static str)>,
}

/// Ordered environment file contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvTemplate {
    sections: Vec<EnvSection>,
}

impl EnvTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, title: &'static str, entries: &[(&'static str, &'static str)]) -> Self {
        self.sections.push(EnvSection {
            title,
            entries: entries.to_vec(),
        });
        self
    }

    /// Render as file text: sections separated by a blank line
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|section| {
                let mut block = format!("# {}\n", section.title);
                for (key, value) in &section.entries {
                    block.push_str(&format!("{}={}\n", key, value));
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// What [`write_if_absent`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    AlreadyPresent,
}

/// Write `contents` to `path` unless something already exists there
pub async fn write_if_absent(path: &Path, contents: &str) -> io::Result<WriteOutcome> {
    // create_new makes the existence check and the create a single step
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await;

    let mut file = match file {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "environment file already present");
            return Ok(WriteOutcome::AlreadyPresent);
        }
        Err(e) => return Err(e),
    };

    file.write_all(contents.as_bytes()).await?;
    file.flush().await?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "environment file written");
    Ok(WriteOutcome::Created)
}
