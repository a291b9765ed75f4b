pub mod card;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod copy;
pub mod issue;
pub mod notify;
pub mod utils;
