use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::card::Layout;
use crate::issue::{IssueFields, IssueSource};

#[derive(Parser, Debug)]
#[command(name = "backlog-cacoo")]
#[command(about = "Copy Backlog issues to the clipboard as Cacoo cards", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Card layout, overriding the config file
    #[arg(long, global = true, value_enum)]
    pub layout: Option<Layout>,

    /// Path to an alternative config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy the issue as a card (shape + plain text) to the clipboard
    Copy {
        #[command(flatten)]
        issue: IssueArgs,

        /// Use an in-memory clipboard and print what would be pasted
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the card document without touching the clipboard
    Build {
        #[command(flatten)]
        issue: IssueArgs,

        /// Print the plain-text fallback instead of the card JSON
        #[arg(long)]
        plain: bool,

        /// Pretty-print the card JSON
        #[arg(long, conflicts_with = "plain")]
        pretty: bool,
    },
    /// Print the accent color for an issue type and priority
    Color {
        #[arg(long = "type", default_value = "")]
        issue_type: String,

        #[arg(long, default_value = "")]
        priority: String,
    },
}

#[derive(Args, Debug, Clone)]
pub struct IssueArgs {
    /// Read the issue record as JSON from a file, or `-` for stdin
    #[arg(short, long, conflicts_with_all = ["key", "summary", "assignee", "due_date", "issue_type", "priority", "url"])]
    pub input: Option<String>,

    /// Issue key, e.g. PROJ-123
    #[arg(short, long, required_unless_present = "input")]
    pub key: Option<String>,

    #[arg(short, long, default_value = "")]
    pub summary: String,

    #[arg(short, long, default_value = "")]
    pub assignee: String,

    /// Due date as displayed by the tracker
    #[arg(short, long)]
    pub due_date: Option<String>,

    #[arg(long = "type", default_value = "")]
    pub issue_type: String,

    #[arg(short, long, default_value = "")]
    pub priority: String,

    /// Link target for the card
    #[arg(short, long, default_value = "")]
    pub url: String,
}

impl IssueArgs {
    pub fn into_source(self) -> IssueSource {
        match self.input {
            Some(input) => IssueSource::from_arg(&input),
            None => IssueSource::Fields(
                IssueFields::new(self.key.unwrap_or_default(), self.summary, self.url)
                    .with_assignee(self.assignee)
                    .with_due_date(self.due_date)
                    .with_classification(self.issue_type, self.priority),
            ),
        }
    }
}
