use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tells the user how a copy went.
pub trait Notifier {
    fn notify(&self, message: &str, duration: Option<Duration>);
}

/// Prints notifications on stderr. A terminal line needs no dismissal, so
/// the duration is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, _duration: Option<Duration>) {
        eprintln!("{message}");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default = "default_success_message")]
    pub success_message: String,

    #[serde(default = "default_failure_message")]
    pub failure_message: String,

    /// How long a toast stays up, for notifiers that dismiss on a timer.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_success_message() -> String {
    "Cacoo カードをクリップボードにコピーしました".to_string()
}

fn default_failure_message() -> String {
    "クリップボードへのコピーに失敗しました".to_string()
}

fn default_duration_ms() -> u64 {
    2000
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            success_message: default_success_message(),
            failure_message: default_failure_message(),
            duration_ms: default_duration_ms(),
        }
    }
}

impl NotifyConfig {
    pub fn duration(&self) -> Option<Duration> {
        (self.duration_ms > 0).then(|| Duration::from_millis(self.duration_ms))
    }
}
