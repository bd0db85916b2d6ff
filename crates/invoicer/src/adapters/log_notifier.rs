// Rust guideline compliant 2026-10-16

//! Demo adapter for the `Notifier` port.
//!
//! Logs persistence outcomes via `tracing` and always returns `Ok(())`.
//! `NotifyError::DeliveryFailed` is unreachable in this adapter.

use domain::{Notice, Notifier, NotifyError};

/// `Notifier` adapter that stands in for a snackbar: one log line per notice.
#[derive(Debug)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a new log notifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for LogNotifier {
    async fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
        match notice {
            Notice::Saved { id, invoice_number, grand_total } => {
                tracing::info!(
                    invoice_id = %id,
                    invoice_number = ?invoice_number,
                    grand_total,
                    "log_notifier.invoice_saved"
                );
            }
            Notice::SaveFailed { invoice_number, reason } => {
                tracing::warn!(
                    invoice_number = ?invoice_number,
                    reason = %reason,
                    "log_notifier.invoice_save_failed"
                );
            }
        }
        Ok(())
    }
}
