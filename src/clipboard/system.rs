use super::{ClipboardHost, CopyEvent, CopyHandler, DataTransfer, HTML_KIND, ListenerId, PLAIN_KIND};
use anyhow::{Result, anyhow, bail};
use clipboard_rs::{Clipboard, ClipboardContent, ClipboardContext};
use std::time::Duration;
use tracing::{debug, warn};

/// The operating system clipboard, reached through `clipboard-rs`.
///
/// The copy event is dispatched in-process and every kind on the resulting
/// data carrier is committed in one `set` call: plain text and HTML map to
/// the native formats, any other kind is written as a custom format under
/// its own name. Either all kinds land or the copy fails.
#[derive(Default)]
pub struct SystemClipboard {
    listeners: Vec<(ListenerId, CopyHandler)>,
    next_id: u64,
    hold: Option<Duration>,
    owner: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// How long [`serve`](Self::serve) keeps the last copy available.
    pub fn with_hold(mut self, hold: Option<Duration>) -> Self {
        self.hold = hold.filter(|d| !d.is_zero());
        self
    }

    /// On Linux the clipboard is served by this process, so the contents
    /// vanish when it exits unless a clipboard manager picks them up. Blocks
    /// for the configured hold after a successful copy.
    pub fn serve(&mut self) {
        let Some(owner) = self.owner.take() else {
            return;
        };

        if let Some(hold) = self.hold.filter(|_| cfg!(target_os = "linux")) {
            debug!(hold_ms = hold.as_millis() as u64, "Serving clipboard before exit");
            std::thread::sleep(hold);
        }

        drop(owner);
    }

    fn commit(&mut self, data: &DataTransfer) -> Result<()> {
        let contents = native_contents(data);
        if contents.is_empty() {
            bail!("Copy event carried no clipboard data");
        }

        let clipboard = ClipboardContext::new()
            .map_err(|e| anyhow!("Failed to access system clipboard: {e}"))?;
        clipboard
            .set(contents)
            .map_err(|e| anyhow!("Failed to copy to clipboard: {e}"))?;

        self.owner = Some(clipboard);
        Ok(())
    }
}

/// One native clipboard entry per kind on the carrier, in carrier order.
fn native_contents(data: &DataTransfer) -> Vec<ClipboardContent> {
    data.entries()
        .map(|(kind, value)| match kind {
            PLAIN_KIND => ClipboardContent::Text(value.to_string()),
            HTML_KIND => ClipboardContent::Html(value.to_string()),
            custom => ClipboardContent::Other(custom.to_string(), value.as_bytes().to_vec()),
        })
        .collect()
}

impl ClipboardHost for SystemClipboard {
    fn add_copy_listener(&mut self, handler: CopyHandler) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, handler));
        id
    }

    fn remove_copy_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener, _)| *listener != id);
    }

    fn exec_copy(&mut self) -> bool {
        let mut event = CopyEvent::new();
        for (_, handler) in self.listeners.iter_mut() {
            handler(&mut event);
        }

        // Outside a page there is no selection for a default copy to take.
        if !event.default_prevented() {
            debug!("No copy listener supplied clipboard data");
            return false;
        }

        match self.commit(event.clipboard_data()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "System clipboard write failed");
                false
            }
        }
    }
}
