use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// One issue as read off the tracker page.
///
/// `assignee` uses the empty string for "unassigned" while `due_date` uses
/// `None` for "no due date"; the two are deliberately not the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFields {
    pub key: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub assignee: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(rename = "type", default)]
    pub issue_type: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub url: String,
}

impl IssueFields {
    pub fn new(key: impl Into<String>, summary: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            summary: summary.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = assignee.into();
        self
    }

    pub fn with_due_date(mut self, due_date: Option<String>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn with_classification(
        mut self,
        issue_type: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        self.issue_type = issue_type.into();
        self.priority = priority.into();
        self
    }

    /// Trims every text field and turns a blank due date into `None`.
    pub fn normalized(self) -> Self {
        let due_date = self
            .due_date
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Self {
            key: self.key.trim().to_string(),
            summary: self.summary.trim().to_string(),
            assignee: self.assignee.trim().to_string(),
            due_date,
            issue_type: self.issue_type.trim().to_string(),
            priority: self.priority.trim().to_string(),
            url: self.url.trim().to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let issue: IssueFields =
            serde_json::from_str(json).context("Failed to parse issue JSON")?;
        let issue = issue.normalized();
        issue.validate()?;
        Ok(issue)
    }

    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(anyhow!("Issue key must not be empty"));
        }
        Ok(())
    }

    /// Fallback text used for plain-text paste targets.
    pub fn plain_text(&self) -> String {
        format!("{} {}", self.key, self.summary)
    }
}
