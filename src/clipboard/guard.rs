use super::{ClipboardHost, CopyHandler, ListenerId};
use tracing::trace;

/// A copy listener that is removed from its host when the guard drops.
pub struct CopyListenerGuard<'a, H: ClipboardHost + ?Sized> {
    host: &'a mut H,
    id: ListenerId,
}

impl<'a, H: ClipboardHost + ?Sized> CopyListenerGuard<'a, H> {
    pub fn acquire(host: &'a mut H, handler: CopyHandler) -> Self {
        let id = host.add_copy_listener(handler);
        trace!(listener = %id, "Copy listener registered");
        Self { host, id }
    }

    /// Runs the host's copy command while the listener is registered.
    pub fn exec_copy(&mut self) -> bool {
        self.host.exec_copy()
    }
}

impl<H: ClipboardHost + ?Sized> Drop for CopyListenerGuard<'_, H> {
    fn drop(&mut self) {
        self.host.remove_copy_listener(self.id);
        trace!(listener = %self.id, "Copy listener removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{CopyEvent, PLAIN_KIND, SimulatedClipboard};

    #[test]
    fn test_listener_removed_on_drop() {
        let mut host = SimulatedClipboard::new();

        {
            let _guard = CopyListenerGuard::acquire(&mut host, Box::new(|_| {}));
        }

        assert_eq!(host.add_calls(), 1);
        assert_eq!(host.remove_calls(), 1);
        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn test_listener_sees_copy_while_held() {
        let mut host = SimulatedClipboard::new();

        {
            let mut guard = CopyListenerGuard::acquire(
                &mut host,
                Box::new(|event: &mut CopyEvent| {
                    event.prevent_default();
                    event.clipboard_data_mut().set_data(PLAIN_KIND, "from guard");
                }),
            );
            assert!(guard.exec_copy());
        }

        let pasted = host.paste().unwrap();
        assert_eq!(pasted.get_data(PLAIN_KIND), Some("from guard"));
    }

    #[test]
    fn test_listener_removed_when_copy_rejected() {
        let mut host = SimulatedClipboard::new().rejecting_copy();

        {
            let mut guard = CopyListenerGuard::acquire(&mut host, Box::new(|_| {}));
            assert!(!guard.exec_copy());
        }

        assert_eq!(host.listener_count(), 0);
        assert_eq!(host.add_calls(), host.remove_calls());
    }
}
