// Rust guideline compliant 2026-10-16

//! Shared domain types for the invoicing workspace.
//!
//! Defines the rate, trip and invoice types, the storage and notification
//! errors, and the hexagonal port traits `InvoiceStore` and `Notifier`.
//! Every other crate depends on this one; it depends on no workspace crate.

use chrono::NaiveDate;
use std::fmt;

/// Hours covered by the base rate when a rate definition does not say otherwise.
pub const DEFAULT_INCLUDED_HOURS: u32 = 8;

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

/// Pricing parameters for one vehicle in one city.
#[derive(Debug, Clone, PartialEq)]
pub struct RateDefinition {
    /// Vehicle name, unique within its city.
    pub vehicle: String,
    /// Flat amount covering the first `included_km` kilometers.
    pub base_rate: f64,
    /// Distance covered by `base_rate`.
    pub included_km: f64,
    /// Charge per kilometer beyond `included_km`.
    pub extra_km_rate: f64,
    /// Charge per hour beyond the included hours.
    pub extra_hour_rate: f64,
    /// Hours covered by `base_rate`. `None` means [`DEFAULT_INCLUDED_HOURS`].
    pub included_hours: Option<u32>,
}

impl RateDefinition {
    /// Create a rate definition without an explicit included-hours threshold.
    #[must_use]
    pub fn new(
        vehicle: impl Into<String>,
        base_rate: f64,
        included_km: f64,
        extra_km_rate: f64,
        extra_hour_rate: f64,
    ) -> Self {
        Self {
            vehicle: vehicle.into(),
            base_rate,
            included_km,
            extra_km_rate,
            extra_hour_rate,
            included_hours: None,
        }
    }

    /// Set an explicit included-hours threshold.
    #[must_use]
    pub fn with_included_hours(mut self, hours: u32) -> Self {
        self.included_hours = Some(hours);
        self
    }

    /// Included hours, falling back to [`DEFAULT_INCLUDED_HOURS`].
    #[must_use]
    pub fn effective_included_hours(&self) -> u32 {
        self.included_hours.unwrap_or(DEFAULT_INCLUDED_HOURS)
    }
}

// ---------------------------------------------------------------------------
// Trip input
// ---------------------------------------------------------------------------

/// Identifying and descriptive invoice fields.
///
/// Carried from [`TripRequest`] into [`InvoiceRecord`] untouched by pricing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceHeader {
    /// Business invoice number, if one was assigned on the form.
    pub invoice_number: Option<u32>,
    /// Date printed on the invoice.
    pub invoice_date: Option<NaiveDate>,
    pub driver_name: Option<String>,
    /// Registration plate of the vehicle.
    pub vehicle_number: String,
    pub customer_name: Option<String>,
    pub company_name: Option<String>,
    /// Free-text description of the trip.
    pub particulars: Option<String>,
}

/// One trip as submitted for pricing. Transient; built per submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripRequest {
    pub header: InvoiceHeader,
    /// Vehicle name, matched against [`RateDefinition::vehicle`].
    pub vehicle: String,
    /// City name, matched exactly against the catalog keys.
    pub city: String,
    pub start_odometer: f64,
    pub end_odometer: f64,
    pub parking_charge: f64,
    pub toll_charge: f64,
    /// Driver night allowance.
    pub night_allowance: f64,
    pub pickup_date: Option<NaiveDate>,
    /// Pickup hour of day, `0..=23`.
    pub pickup_hour: Option<u32>,
    pub drop_date: Option<NaiveDate>,
    /// Drop hour of day, `0..=23`.
    pub drop_hour: Option<u32>,
}

// ---------------------------------------------------------------------------
// Invoice output
// ---------------------------------------------------------------------------

/// Every quantity computed while pricing one trip.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CostBreakdown {
    /// Base rate of the matched vehicle, `0` when no rate matched.
    pub base_cost: f64,
    /// Included distance applied, `0` when no rate matched.
    pub included_km: f64,
    pub per_extra_km_rate: f64,
    pub per_extra_hour_rate: f64,
    /// Included hours applied (rate value or the default).
    pub included_hours: u32,
    /// `end_odometer - start_odometer`, unclamped.
    pub total_distance: f64,
    /// Distance beyond `included_km`, `0` when within the allowance.
    pub extra_distance: f64,
    pub extra_distance_charge: f64,
    /// Ceiling-rounded hours between pickup and drop.
    pub billable_hours: i64,
    /// Hours beyond `included_hours`, `0` when within the allowance.
    pub extra_hours: i64,
    pub extra_hour_charge: f64,
    /// Parking plus toll.
    pub total_extra_charges: f64,
    pub night_allowance: f64,
    pub grand_total: f64,
}

impl CostBreakdown {
    /// Base cost plus the extra-distance charge.
    #[must_use]
    pub fn distance_cost(&self) -> f64 {
        self.base_cost + self.extra_distance_charge
    }

    /// Sum of all declared components, in the order pricing accumulates them.
    ///
    /// Always equal to `grand_total` for a breakdown produced by pricing.
    #[must_use]
    pub fn component_sum(&self) -> f64 {
        self.distance_cost() + (self.total_extra_charges + self.night_allowance)
            + self.extra_hour_charge
    }
}

/// The fully computed invoice for one trip; the unit persisted by an
/// [`InvoiceStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceRecord {
    pub header: InvoiceHeader,
    pub vehicle: String,
    pub city: String,
    pub start_odometer: f64,
    pub end_odometer: f64,
    pub pickup_date: Option<NaiveDate>,
    pub pickup_hour: Option<u32>,
    pub drop_date: Option<NaiveDate>,
    pub drop_hour: Option<u32>,
    pub breakdown: CostBreakdown,
}

impl InvoiceRecord {
    /// Grand total of the invoice.
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.breakdown.grand_total
    }

    /// Overwrite the header fields set in `patch`; computed figures are untouched.
    pub fn apply(&mut self, patch: &InvoicePatch) {
        let header = &mut self.header;
        if let Some(n) = patch.invoice_number {
            header.invoice_number = Some(n);
        }
        if let Some(d) = patch.invoice_date {
            header.invoice_date = Some(d);
        }
        if let Some(v) = &patch.driver_name {
            header.driver_name = Some(v.clone());
        }
        if let Some(v) = &patch.vehicle_number {
            header.vehicle_number.clone_from(v);
        }
        if let Some(v) = &patch.customer_name {
            header.customer_name = Some(v.clone());
        }
        if let Some(v) = &patch.company_name {
            header.company_name = Some(v.clone());
        }
        if let Some(v) = &patch.particulars {
            header.particulars = Some(v.clone());
        }
    }
}

/// Partial update of an invoice's header fields. `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoicePatch {
    pub invoice_number: Option<u32>,
    pub invoice_date: Option<NaiveDate>,
    pub driver_name: Option<String>,
    pub vehicle_number: Option<String>,
    pub customer_name: Option<String>,
    pub company_name: Option<String>,
    pub particulars: Option<String>,
}

impl InvoicePatch {
    /// `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// ---------------------------------------------------------------------------
// Stored invoices
// ---------------------------------------------------------------------------

/// Store-assigned invoice identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InvoiceId(uuid::Uuid);

impl InvoiceId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(id: uuid::Uuid) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_uuid(&self) -> uuid::Uuid {
        self.0
    }
}

impl fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// An invoice together with the identifier its store assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredInvoice {
    pub id: InvoiceId,
    pub record: InvoiceRecord,
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// Persistence outcome reported to the presentation side.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// The invoice was stored under `id`.
    Saved {
        id: InvoiceId,
        invoice_number: Option<u32>,
        grand_total: f64,
    },
    /// The store rejected the invoice. The computed total still stands.
    SaveFailed {
        invoice_number: Option<u32>,
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors an [`InvoiceStore`] implementation may return.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// No invoice exists under this identifier.
    #[error("invoice {id} not found")]
    NotFound { id: InvoiceId },
    /// The store has reached its maximum capacity.
    #[error("store full (capacity: {capacity})")]
    CapacityExceeded { capacity: usize },
    /// The backend could not be reached or rejected the operation.
    #[error("store unavailable")]
    Unavailable,
    /// A persisted row could not be decoded.
    #[error("corrupt invoice row: {reason}")]
    Corrupt {
        /// Human-readable description.
        reason: String,
    },
}

/// Errors from the [`Notifier`] port.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The notice could not be delivered.
    #[error("delivery failed: {reason}")]
    DeliveryFailed {
        /// Human-readable description.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Hexagonal port: durable invoice storage.
///
/// Implementations assign identifiers on `create`; each call creates a new
/// record, there is no natural-key deduplication.
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait InvoiceStore {
    /// Persist `record` and return its new identifier.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CapacityExceeded` or `StoreError::Unavailable`
    /// when the record cannot be stored.
    async fn create(&self, record: InvoiceRecord) -> Result<InvoiceId, StoreError>;

    /// Return every stored invoice.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` or `StoreError::Corrupt`.
    async fn list(&self) -> Result<Vec<StoredInvoice>, StoreError>;

    /// Return the invoice stored under `id`, or `None`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` or `StoreError::Corrupt`.
    async fn get(&self, id: InvoiceId) -> Result<Option<StoredInvoice>, StoreError>;

    /// Apply `patch` to the invoice stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when `id` is unknown.
    async fn update(&self, id: InvoiceId, patch: &InvoicePatch) -> Result<(), StoreError>;

    /// Remove the invoice stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when `id` is unknown.
    async fn delete(&self, id: InvoiceId) -> Result<(), StoreError>;
}

/// Hexagonal port: user-facing notification of persistence outcomes.
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait Notifier {
    /// Deliver `notice`.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError::DeliveryFailed` when the notice cannot be shown.
    async fn notify(&self, notice: &Notice) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn sample_record() -> InvoiceRecord {
        InvoiceRecord {
            header: InvoiceHeader {
                invoice_number: Some(7),
                vehicle_number: "MH12AB1234".to_owned(),
                ..InvoiceHeader::default()
            },
            vehicle: "Innova".to_owned(),
            city: "Pune".to_owned(),
            start_odometer: 100.0,
            end_odometer: 250.0,
            ..InvoiceRecord::default()
        }
    }

    #[test]
    fn included_hours_default_to_eight() {
        let rate = RateDefinition::new("Innova", 3000.0, 100.0, 100.0, 200.0);
        assert_eq!(rate.included_hours, None);
        assert_eq!(rate.effective_included_hours(), DEFAULT_INCLUDED_HOURS);
        assert_eq!(rate.with_included_hours(10).effective_included_hours(), 10);
    }

    #[test]
    #[expect(clippy::float_cmp, reason = "exact integer-valued literals")]
    fn component_sum_matches_declared_parts() {
        let b = CostBreakdown {
            base_cost: 3000.0,
            extra_distance_charge: 1400.0,
            total_extra_charges: 150.0,
            night_allowance: 250.0,
            extra_hour_charge: 500.0,
            ..CostBreakdown::default()
        };
        assert_eq!(b.distance_cost(), 4400.0);
        assert_eq!(b.component_sum(), 5300.0);
    }

    #[test]
    fn patch_overwrites_only_set_fields() {
        let mut record = sample_record();
        let before = record.breakdown;
        let patch = InvoicePatch {
            customer_name: Some("A. Kulkarni".to_owned()),
            vehicle_number: Some("MH14ZZ0001".to_owned()),
            ..InvoicePatch::default()
        };
        assert!(!patch.is_empty());
        record.apply(&patch);
        assert_eq!(record.header.customer_name.as_deref(), Some("A. Kulkarni"));
        assert_eq!(record.header.vehicle_number, "MH14ZZ0001");
        assert_eq!(record.header.invoice_number, Some(7));
        assert_eq!(record.breakdown, before);
    }

    #[test]
    fn empty_patch_is_noop() {
        let mut record = sample_record();
        let patch = InvoicePatch::default();
        assert!(patch.is_empty());
        record.apply(&patch);
        assert_eq!(record, sample_record());
    }

    #[test]
    fn invoice_id_displays_as_uuid() {
        let raw = uuid::Uuid::new_v4();
        let id = InvoiceId::from_uuid(raw);
        assert_eq!(id.to_string(), raw.to_string());
        assert_eq!(id.as_uuid(), raw);
        assert_ne!(InvoiceId::random(), InvoiceId::random());
    }

    #[test]
    fn store_error_messages() {
        let id = InvoiceId::random();
        assert_eq!(
            StoreError::NotFound { id }.to_string(),
            format!("invoice {id} not found")
        );
        assert_eq!(
            StoreError::CapacityExceeded { capacity: 3 }.to_string(),
            "store full (capacity: 3)"
        );
        assert_eq!(StoreError::Unavailable.to_string(), "store unavailable");
        let e = NotifyError::DeliveryFailed { reason: "offline".to_owned() };
        assert_eq!(e.to_string(), "delivery failed: offline");
    }

    /// Verify that minimal port implementations compile and behave.
    #[tokio::test]
    async fn port_trait_struct_impl() {
        struct VecStore {
            rows: RefCell<Vec<StoredInvoice>>,
        }

        impl InvoiceStore for VecStore {
            async fn create(&self, record: InvoiceRecord) -> Result<InvoiceId, StoreError> {
                let id = InvoiceId::random();
                self.rows.borrow_mut().push(StoredInvoice { id, record });
                Ok(id)
            }

            async fn list(&self) -> Result<Vec<StoredInvoice>, StoreError> {
                Ok(self.rows.borrow().clone())
            }

            async fn get(&self, id: InvoiceId) -> Result<Option<StoredInvoice>, StoreError> {
                Ok(self.rows.borrow().iter().find(|r| r.id == id).cloned())
            }

            async fn update(&self, id: InvoiceId, patch: &InvoicePatch) -> Result<(), StoreError> {
                let mut rows = self.rows.borrow_mut();
                let row = rows
                    .iter_mut()
                    .find(|r| r.id == id)
                    .ok_or(StoreError::NotFound { id })?;
                row.record.apply(patch);
                Ok(())
            }

            async fn delete(&self, id: InvoiceId) -> Result<(), StoreError> {
                self.rows.borrow_mut().retain(|r| r.id != id);
                Ok(())
            }
        }

        struct Silent;

        impl Notifier for Silent {
            async fn notify(&self, _notice: &Notice) -> Result<(), NotifyError> {
                Ok(())
            }
        }

        let store = VecStore { rows: RefCell::new(vec![]) };
        let id = store.create(sample_record()).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
        assert!(store.get(id).await.unwrap().is_some());
        let missing = InvoiceId::random();
        let err = store.update(missing, &InvoicePatch::default()).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: missing });
        store.delete(id).await.unwrap();
        assert!(store.get(id).await.unwrap().is_none());

        let notice = Notice::Saved { id, invoice_number: Some(7), grand_total: 0.0 };
        Silent.notify(&notice).await.unwrap();
    }
}
