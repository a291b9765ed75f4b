use super::{ClipboardHost, CopyEvent, CopyListenerGuard, PLAIN_KIND, SHAPE_KIND};
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard host rejected the copy command")]
    CopyRejected,
    #[error("copy command returned without dispatching the copy event")]
    NotDispatched,
}

/// Places `structured` under the shape kind and `plain` under the plain-text
/// kind in a single copy.
///
/// Both kinds are set inside one copy event, so a later paste sees either
/// both or neither. The listener is removed on every path out of this
/// function, including a rejected copy.
pub fn write_dual_format<H: ClipboardHost + ?Sized>(
    host: &mut H,
    structured: &str,
    plain: &str,
) -> Result<(), ClipboardError> {
    let dispatched = Rc::new(Cell::new(false));

    let handler = {
        let dispatched = Rc::clone(&dispatched);
        let structured = structured.to_string();
        let plain = plain.to_string();

        Box::new(move |event: &mut CopyEvent| {
            event.prevent_default();
            let data = event.clipboard_data_mut();
            data.set_data(SHAPE_KIND, &structured);
            data.set_data(PLAIN_KIND, &plain);
            dispatched.set(true);
        })
    };

    let copied = {
        let mut guard = CopyListenerGuard::acquire(host, handler);
        guard.exec_copy()
    };

    if !copied {
        warn!("Copy command was rejected by the clipboard host");
        return Err(ClipboardError::CopyRejected);
    }

    if !dispatched.get() {
        warn!("Copy command succeeded but no copy event reached the listener");
        return Err(ClipboardError::NotDispatched);
    }

    debug!(
        structured_len = structured.len(),
        plain_len = plain.len(),
        "Wrote shape and plain text to clipboard"
    );

    Ok(())
}
