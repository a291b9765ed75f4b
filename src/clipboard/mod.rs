//! Dual-format clipboard writes.
//!
//! Clipboard APIs that take a whole value at once only accept a short
//! allow-list of kinds, so a custom shape kind cannot ride along with plain
//! text. Instead the writer hooks the next copy event, triggers a copy and
//! fills the event's data carrier with both kinds inside that one dispatch.
//! [`ClipboardHost`] is the seam that provides those primitives.

pub mod event;
pub mod guard;
pub mod simulated;
pub mod system;
pub mod writer;

pub use event::{CopyEvent, CopyHandler, DataTransfer, ListenerId};
pub use guard::CopyListenerGuard;
pub use simulated::SimulatedClipboard;
pub use system::SystemClipboard;
pub use writer::{ClipboardError, write_dual_format};

/// Kind understood by the diagramming tool when pasting shapes.
pub const SHAPE_KIND: &str = "cacoo/shape";
pub const PLAIN_KIND: &str = "text/plain";
pub const HTML_KIND: &str = "text/html";

/// The event-based copy mechanism of a clipboard host.
///
/// `exec_copy` must dispatch the copy event to every registered listener
/// before it returns.
pub trait ClipboardHost {
    fn add_copy_listener(&mut self, handler: CopyHandler) -> ListenerId;
    fn remove_copy_listener(&mut self, id: ListenerId);
    /// Returns `false` when the host refuses the copy.
    fn exec_copy(&mut self) -> bool;
}
