use crate::card::{CardBuilder, CardPayload};
use crate::clipboard::{ClipboardHost, write_dual_format};
use crate::issue::IssueFields;
use crate::notify::{Notifier, NotifyConfig};
use anyhow::{Context, Result};
use tracing::info;

/// Builds the card for `issue`, writes it to `host` and tells the user how
/// it went.
pub fn copy_issue<H: ClipboardHost + ?Sized>(
    issue: &IssueFields,
    builder: &CardBuilder,
    host: &mut H,
    notifier: &dyn Notifier,
    messages: &NotifyConfig,
) -> Result<CardPayload> {
    let payload = builder.build(issue);

    match write_dual_format(host, &payload.structured, &payload.plain) {
        Ok(()) => {
            info!(key = %issue.key, layout = ?builder.layout(), "Copied issue card");
            notifier.notify(&messages.success_message, messages.duration());
            Ok(payload)
        }
        Err(e) => {
            notifier.notify(&messages.failure_message, messages.duration());
            Err(e).with_context(|| format!("Failed to copy card for {}", issue.key))
        }
    }
}
