use serde::{Deserialize, Serialize};
use std::fmt;

pub const COLOR_RED: &str = "#E65050";
pub const COLOR_GREEN: &str = "#69C955";
pub const COLOR_BLUE: &str = "#4B91FA";

/// Fixed background color of every card.
pub const SECONDARY_COLOR: &str = "#DCEBFF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Red,
    Green,
    Blue,
}

impl Accent {
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Red => COLOR_RED,
            Self::Green => COLOR_GREEN,
            Self::Blue => COLOR_BLUE,
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex())
    }
}

/// The tracker's labels that drive the accent color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default = "default_defect_type")]
    pub defect_type: String,

    #[serde(default = "default_high_priority")]
    pub high_priority: String,

    #[serde(default = "default_low_priority")]
    pub low_priority: String,
}

fn default_defect_type() -> String {
    "バグ".to_string()
}

fn default_high_priority() -> String {
    "高".to_string()
}

fn default_low_priority() -> String {
    "低".to_string()
}

impl Default for Classification {
    fn default() -> Self {
        Self {
            defect_type: default_defect_type(),
            high_priority: default_high_priority(),
            low_priority: default_low_priority(),
        }
    }
}

impl Classification {
    /// Defect or high priority beats low priority, which beats the default.
    pub fn resolve(&self, issue_type: &str, priority: &str) -> Accent {
        if issue_type == self.defect_type || priority == self.high_priority {
            Accent::Red
        } else if priority == self.low_priority {
            Accent::Green
        } else {
            Accent::Blue
        }
    }
}
