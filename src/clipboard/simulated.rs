use super::{ClipboardHost, CopyEvent, CopyHandler, DataTransfer, ListenerId, PLAIN_KIND};
use tracing::debug;

/// In-memory clipboard host.
///
/// Dispatches copy events synchronously like a real host, remembers what was
/// copied and counts listener registrations so callers can check that none
/// leak.
#[derive(Default)]
pub struct SimulatedClipboard {
    listeners: Vec<(ListenerId, CopyHandler)>,
    next_id: u64,
    add_calls: usize,
    remove_calls: usize,
    reject_copy: bool,
    selection: String,
    contents: Option<DataTransfer>,
}

impl SimulatedClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `exec_copy` fails, as a host without clipboard permission would.
    pub fn rejecting_copy(mut self) -> Self {
        self.reject_copy = true;
        self
    }

    /// Text copied when no listener takes over the copy.
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = selection.into();
        self
    }

    /// What a paste would see right now.
    pub fn paste(&self) -> Option<&DataTransfer> {
        self.contents.as_ref()
    }

    pub fn add_calls(&self) -> usize {
        self.add_calls
    }

    pub fn remove_calls(&self) -> usize {
        self.remove_calls
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl ClipboardHost for SimulatedClipboard {
    fn add_copy_listener(&mut self, handler: CopyHandler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.add_calls += 1;
        self.listeners.push((id, handler));
        id
    }

    fn remove_copy_listener(&mut self, id: ListenerId) {
        self.remove_calls += 1;
        self.listeners.retain(|(listener, _)| *listener != id);
    }

    fn exec_copy(&mut self) -> bool {
        if self.reject_copy {
            debug!("Simulated clipboard rejected copy");
            return false;
        }

        let mut event = CopyEvent::new();
        for (_, handler) in self.listeners.iter_mut() {
            handler(&mut event);
        }

        let data = if event.default_prevented() {
            event.into_clipboard_data()
        } else {
            let mut data = DataTransfer::new();
            data.set_data(PLAIN_KIND, &self.selection);
            data
        };

        self.contents = Some(data);
        true
    }
}
