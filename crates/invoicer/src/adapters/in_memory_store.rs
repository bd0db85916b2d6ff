// Rust guideline compliant 2026-10-16

//! In-memory adapter for the `InvoiceStore` port.
//!
//! Intended for demo runs and unit tests. Keeps invoices in insertion order
//! and returns `StoreError::CapacityExceeded` once `capacity` records exist.
//! `StoreError::Unavailable` is never returned by this adapter.

use std::cell::RefCell;

use domain::{InvoiceId, InvoicePatch, InvoiceRecord, InvoiceStore, StoreError, StoredInvoice};

/// `InvoiceStore` adapter backed by an in-memory `Vec<StoredInvoice>`.
// #[allow] not #[expect]: dead_code fires in invoicer_sqlite but NOT in
// invoicer, so #[expect] would be unfulfilled in one of the two binaries.
#[allow(dead_code, reason = "used by invoicer binary; dead in invoicer_sqlite")]
#[derive(Debug)]
pub struct InMemoryStore {
    rows: RefCell<Vec<StoredInvoice>>,
    /// Maximum number of invoices the store can hold.
    capacity: usize,
}

impl InMemoryStore {
    /// Create an empty store holding at most `capacity` invoices.
    // See struct-level allow(dead_code) comment above.
    #[allow(dead_code, reason = "used by invoicer binary; dead in invoicer_sqlite")]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { rows: RefCell::new(vec![]), capacity }
    }

    /// Return the number of stored invoices.
    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }
}

impl InvoiceStore for InMemoryStore {
    /// Append `record` under a fresh random id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CapacityExceeded` when the store is full.
    async fn create(&self, record: InvoiceRecord) -> Result<InvoiceId, StoreError> {
        let mut rows = self.rows.borrow_mut();
        if rows.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded { capacity: self.capacity });
        }
        let id = InvoiceId::random();
        rows.push(StoredInvoice { id, record });
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<StoredInvoice>, StoreError> {
        Ok(self.rows.borrow().clone())
    }

    async fn get(&self, id: InvoiceId) -> Result<Option<StoredInvoice>, StoreError> {
        Ok(self.rows.borrow().iter().find(|row| row.id == id).cloned())
    }

    async fn update(&self, id: InvoiceId, patch: &InvoicePatch) -> Result<(), StoreError> {
        let mut rows = self.rows.borrow_mut();
        let row = rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound { id })?;
        row.record.apply(patch);
        Ok(())
    }

    async fn delete(&self, id: InvoiceId) -> Result<(), StoreError> {
        let mut rows = self.rows.borrow_mut();
        let idx = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(StoreError::NotFound { id })?;
        rows.remove(idx);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
