pub mod fields;
pub mod source;

pub use fields::IssueFields;
pub use source::{IssueSource, load_issue};
