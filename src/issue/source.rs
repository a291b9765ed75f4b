use super::IssueFields;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where an issue record comes from.
#[derive(Debug, Clone)]
pub enum IssueSource {
    /// A JSON record on disk.
    File(PathBuf),
    /// A JSON record piped on stdin.
    Stdin,
    /// Fields already supplied by the caller (command-line flags).
    Fields(IssueFields),
}

impl IssueSource {
    /// `-` means stdin, anything else is a path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

pub fn load_issue(source: IssueSource) -> Result<IssueFields> {
    match source {
        IssueSource::File(path) => load_issue_file(&path),
        IssueSource::Stdin => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read issue JSON from stdin")?;
            IssueFields::from_json(&content)
        }
        IssueSource::Fields(issue) => {
            let issue = issue.normalized();
            issue.validate()?;
            Ok(issue)
        }
    }
}

fn load_issue_file(path: &Path) -> Result<IssueFields> {
    debug!(path = %path.display(), "Loading issue record");

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    IssueFields::from_json(&content)
        .with_context(|| format!("Invalid issue record in {}", path.display()))
}
