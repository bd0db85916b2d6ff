// Rust guideline compliant 2026-10-16

//! Invoice desk: the host-side workflow around the pricing engine.
//!
//! Validates a trip (advisory by default), prices it, hands the record to an
//! `InvoiceStore` port and reports the outcome through a `Notifier` port.
//!
//! Entry points: [`InvoiceDesk::submit`], [`InvoiceDesk::quote`], [`validate`].
//! Configuration via [`DeskConfig::builder`].

use chrono::NaiveDate;
use domain::{
    InvoiceId, InvoicePatch, InvoiceStore, Notice, Notifier, StoreError, StoredInvoice,
    TripRequest,
};
use pricing::{PricingEngine, Quote};

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A problem with a submitted trip. Each check runs independently.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationIssue {
    /// A required text field is blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },
    /// A charge or odometer reading is below zero.
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },
    /// A charge or odometer reading is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    /// Start odometer reads higher than end odometer.
    #[error("start odometer {start} is greater than end odometer {end}")]
    StartAfterEnd { start: f64, end: f64 },
    #[error("drop date {drop} is before pickup date {pickup}")]
    DropDateBeforePickup { pickup: NaiveDate, drop: NaiveDate },
    /// Drop hour of day is earlier than pickup hour of day, whatever the dates.
    #[error("drop hour {drop:02} is before pickup hour {pickup:02}")]
    DropHourBeforePickup { pickup: u32, drop: u32 },
}

/// Run every form check against `trip` and collect the issues found.
///
/// An empty vector means the trip passed.
#[must_use]
pub fn validate(trip: &TripRequest) -> Vec<ValidationIssue> {
    let mut issues = vec![];

    for (field, value) in [
        ("vehicle", trip.vehicle.as_str()),
        ("city", trip.city.as_str()),
        ("vehicle_number", trip.header.vehicle_number.as_str()),
    ] {
        if value.trim().is_empty() {
            issues.push(ValidationIssue::MissingField { field });
        }
    }

    for (field, value) in [
        ("start_odometer", trip.start_odometer),
        ("end_odometer", trip.end_odometer),
        ("parking_charge", trip.parking_charge),
        ("toll_charge", trip.toll_charge),
        ("night_allowance", trip.night_allowance),
    ] {
        if value.is_finite() {
            if value < 0.0 {
                issues.push(ValidationIssue::NegativeAmount { field, value });
            }
        } else {
            issues.push(ValidationIssue::NotFinite { field, value });
        }
    }

    if trip.start_odometer > trip.end_odometer {
        issues.push(ValidationIssue::StartAfterEnd {
            start: trip.start_odometer,
            end: trip.end_odometer,
        });
    }

    if let (Some(pickup), Some(drop)) = (trip.pickup_date, trip.drop_date)
        && drop < pickup
    {
        issues.push(ValidationIssue::DropDateBeforePickup { pickup, drop });
    }

    if let (Some(pickup), Some(drop)) = (trip.pickup_hour, trip.drop_hour)
        && drop < pickup
    {
        issues.push(ValidationIssue::DropHourBeforePickup { pickup, drop });
    }

    issues
}

// ---------------------------------------------------------------------------
// DeskError
// ---------------------------------------------------------------------------

/// Errors returned by [`InvoiceDesk`] operations.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    /// The supplied configuration is invalid.
    #[error("invalid desk configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// Strict validation rejected the trip before pricing.
    #[error("trip rejected: {} validation issue(s)", .issues.len())]
    Invalid { issues: Vec<ValidationIssue> },
    /// A store read, update or delete failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

// ---------------------------------------------------------------------------
// DeskConfig + builder
// ---------------------------------------------------------------------------

/// Runtime configuration for an [`InvoiceDesk`].
///
/// Construct via [`DeskConfig::builder`].
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Reject trips with validation issues instead of logging them.
    pub strict_validation: bool,
    /// Company name used when a trip's header has none.
    pub default_company: Option<String>,
}

/// Builder for [`DeskConfig`].
///
/// Obtain via [`DeskConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct DeskConfigBuilder {
    strict_validation: bool,
    default_company: Option<String>,
}

impl DeskConfig {
    /// Create a builder.
    ///
    /// Default values: `strict_validation = false`, `default_company = None`.
    #[must_use]
    pub fn builder() -> DeskConfigBuilder {
        DeskConfigBuilder { strict_validation: false, default_company: None }
    }
}

impl DeskConfigBuilder {
    /// Turn validation issues into a hard [`DeskError::Invalid`].
    #[must_use]
    pub fn strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    /// Fill this company name into headers that carry none.
    #[must_use]
    pub fn default_company(mut self, company: impl Into<String>) -> Self {
        self.default_company = Some(company.into());
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::InvalidConfig`] when `default_company` is blank.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<DeskConfig, DeskError> {
        if self.default_company.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(DeskError::InvalidConfig {
                reason: "default_company must not be blank".to_owned(),
            });
        }
        Ok(DeskConfig {
            strict_validation: self.strict_validation,
            default_company: self.default_company,
        })
    }
}

// ---------------------------------------------------------------------------
// InvoiceDesk
// ---------------------------------------------------------------------------

/// Outcome of [`InvoiceDesk::submit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub quote: Quote,
    /// Identifier assigned by the store; `None` when persistence failed.
    pub invoice_id: Option<InvoiceId>,
    /// Advisory issues found on the trip (always empty in strict mode).
    pub issues: Vec<ValidationIssue>,
}

impl Submission {
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.quote.grand_total
    }
}

/// Validates, prices, persists and notifies.
///
/// Generic over `S: InvoiceStore` and `N: Notifier` at each call. Holds no
/// concrete adapter references; dependencies are injected per call.
#[derive(Debug)]
pub struct InvoiceDesk {
    config: DeskConfig,
    engine: PricingEngine,
}

impl InvoiceDesk {
    #[must_use]
    pub fn new(config: DeskConfig, engine: PricingEngine) -> Self {
        Self { config, engine }
    }

    #[must_use]
    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Validate and price `trip` without persisting anything.
    ///
    /// Returns the quote and any advisory issues.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Invalid`] when strict validation is on and the
    /// trip has issues.
    pub fn quote(&self, trip: &TripRequest) -> Result<(Quote, Vec<ValidationIssue>), DeskError> {
        let issues = validate(trip);
        if !issues.is_empty() {
            if self.config.strict_validation {
                log::info!("desk.quote.rejected: issues={}", issues.len());
                return Err(DeskError::Invalid { issues });
            }
            for issue in &issues {
                log::warn!("desk.quote.issue: {issue}");
            }
        }

        let quote = match (&self.config.default_company, &trip.header.company_name) {
            (Some(company), None) => {
                let mut trip = trip.clone();
                trip.header.company_name = Some(company.clone());
                self.engine.quote(&trip)
            }
            _ => self.engine.quote(trip),
        };
        Ok((quote, issues))
    }

    /// Price `trip`, store the record and notify the outcome.
    ///
    /// A store failure does not fail the submission: the total stands,
    /// `invoice_id` is `None` and a [`Notice::SaveFailed`] is sent.
    /// Notification failures are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DeskError::Invalid`] when strict validation rejects the trip.
    pub async fn submit<S: InvoiceStore, N: Notifier>(
        &self,
        trip: &TripRequest,
        store: &S,
        notifier: &N,
    ) -> Result<Submission, DeskError> {
        let (quote, issues) = self.quote(trip)?;
        let invoice_number = quote.record.header.invoice_number;

        let (invoice_id, notice) = match store.create(quote.record.clone()).await {
            Ok(id) => {
                log::info!("desk.submit.saved: id={id} total={}", quote.grand_total);
                let notice =
                    Notice::Saved { id, invoice_number, grand_total: quote.grand_total };
                (Some(id), notice)
            }
            Err(e) => {
                log::warn!("desk.submit.save_failed: error={e}");
                (None, Notice::SaveFailed { invoice_number, reason: e.to_string() })
            }
        };

        if let Err(e) = notifier.notify(&notice).await {
            log::warn!("desk.notify.failed: error={e}");
        }

        Ok(Submission { quote, invoice_id, issues })
    }

    /// All stored invoices.
    ///
    /// # Errors
    ///
    /// Propagates the store's error as [`DeskError::Store`].
    pub async fn list<S: InvoiceStore>(&self, store: &S) -> Result<Vec<StoredInvoice>, DeskError> {
        Ok(store.list().await?)
    }

    /// The invoice stored under `id`, if any.
    ///
    /// # Errors
    ///
    /// Propagates the store's error as [`DeskError::Store`].
    pub async fn get<S: InvoiceStore>(
        &self,
        store: &S,
        id: InvoiceId,
    ) -> Result<Option<StoredInvoice>, DeskError> {
        Ok(store.get(id).await?)
    }

    /// Apply `patch` to the invoice under `id`. An empty patch is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates the store's error, e.g. `StoreError::NotFound`.
    pub async fn update<S: InvoiceStore>(
        &self,
        store: &S,
        id: InvoiceId,
        patch: &InvoicePatch,
    ) -> Result<(), DeskError> {
        if patch.is_empty() {
            log::debug!("desk.update.skipped: id={id} empty patch");
            return Ok(());
        }
        store.update(id, patch).await?;
        log::info!("desk.update.applied: id={id}");
        Ok(())
    }

    /// Remove the invoice under `id`.
    ///
    /// # Errors
    ///
    /// Propagates the store's error, e.g. `StoreError::NotFound`.
    pub async fn delete<S: InvoiceStore>(&self, store: &S, id: InvoiceId) -> Result<(), DeskError> {
        store.delete(id).await?;
        log::info!("desk.delete.done: id={id}");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[allow(clippy::float_cmp, reason = "all expected values are exact integer-valued f64")]
mod tests {
    use super::{DeskConfig, DeskError, InvoiceDesk, ValidationIssue, validate};
    use chrono::NaiveDate;
    use domain::{
        InvoiceHeader, InvoiceId, InvoicePatch, InvoiceRecord, InvoiceStore, Notice,
        NotifyError, Notifier, StoreError, StoredInvoice, TripRequest,
    };
    use pricing::PricingEngine;
    use rates::RateCatalog;
    use std::cell::{Cell, RefCell};

    // ------------------------------------------------------------------
    // Test helpers
    // ------------------------------------------------------------------

    /// Store that keeps rows in a vector, or fails every call when `broken`.
    struct MockStore {
        rows: RefCell<Vec<StoredInvoice>>,
        broken: bool,
        updates: Cell<usize>,
    }

    impl MockStore {
        fn new() -> Self {
            Self { rows: RefCell::new(vec![]), broken: false, updates: Cell::new(0) }
        }

        fn broken() -> Self {
            Self { broken: true, ..Self::new() }
        }

        fn check(&self) -> Result<(), StoreError> {
            if self.broken { Err(StoreError::Unavailable) } else { Ok(()) }
        }
    }

    impl InvoiceStore for MockStore {
        async fn create(&self, record: InvoiceRecord) -> Result<InvoiceId, StoreError> {
            self.check()?;
            let id = InvoiceId::random();
            self.rows.borrow_mut().push(StoredInvoice { id, record });
            Ok(id)
        }

        async fn list(&self) -> Result<Vec<StoredInvoice>, StoreError> {
            self.check()?;
            Ok(self.rows.borrow().clone())
        }

        async fn get(&self, id: InvoiceId) -> Result<Option<StoredInvoice>, StoreError> {
            self.check()?;
            Ok(self.rows.borrow().iter().find(|r| r.id == id).cloned())
        }

        async fn update(&self, id: InvoiceId, patch: &InvoicePatch) -> Result<(), StoreError> {
            self.check()?;
            self.updates.set(self.updates.get() + 1);
            let mut rows = self.rows.borrow_mut();
            let row = rows.iter_mut().find(|r| r.id == id).ok_or(StoreError::NotFound { id })?;
            row.record.apply(patch);
            Ok(())
        }

        async fn delete(&self, id: InvoiceId) -> Result<(), StoreError> {
            self.check()?;
            let mut rows = self.rows.borrow_mut();
            let before = rows.len();
            rows.retain(|r| r.id != id);
            if rows.len() == before {
                return Err(StoreError::NotFound { id });
            }
            Ok(())
        }
    }

    /// Notifier that records every notice it receives.
    struct MockNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl MockNotifier {
        fn new() -> Self {
            Self { notices: RefCell::new(vec![]) }
        }
    }

    impl Notifier for MockNotifier {
        async fn notify(&self, notice: &Notice) -> Result<(), NotifyError> {
            self.notices.borrow_mut().push(notice.clone());
            Ok(())
        }
    }

    /// Notifier that always fails.
    struct DeadNotifier;

    impl Notifier for DeadNotifier {
        async fn notify(&self, _notice: &Notice) -> Result<(), NotifyError> {
            Err(NotifyError::DeliveryFailed { reason: "no display".to_owned() })
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn desk(strict: bool) -> InvoiceDesk {
        let config = DeskConfig::builder().strict_validation(strict).build().unwrap();
        InvoiceDesk::new(config, PricingEngine::new(RateCatalog::builtin()))
    }

    /// Pune Innova, 150 km, 09:00 -> 19:00, parking 100, toll 300.
    fn trip() -> TripRequest {
        TripRequest {
            header: InvoiceHeader {
                invoice_number: Some(1001),
                vehicle_number: "MH12AB1234".to_owned(),
                ..InvoiceHeader::default()
            },
            vehicle: "Innova".to_owned(),
            city: "Pune".to_owned(),
            start_odometer: 200.0,
            end_odometer: 350.0,
            parking_charge: 100.0,
            toll_charge: 300.0,
            pickup_date: Some(day(1)),
            pickup_hour: Some(9),
            drop_date: Some(day(1)),
            drop_hour: Some(19),
            ..TripRequest::default()
        }
    }

    // 3000 + 50 km * 100 + 400 surcharges + 2 h * 200
    const TRIP_TOTAL: f64 = 3000.0 + 5000.0 + 400.0 + 400.0;

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    #[test]
    fn clean_trip_has_no_issues() {
        assert!(validate(&trip()).is_empty());
    }

    #[test]
    fn reversed_odometer_is_flagged() {
        let mut t = trip();
        t.start_odometer = 400.0;
        assert_eq!(
            validate(&t),
            [ValidationIssue::StartAfterEnd { start: 400.0, end: 350.0 }]
        );
    }

    #[test]
    fn date_and_hour_checks_are_independent() {
        let mut t = trip();
        t.drop_date = Some(day(2));
        t.drop_hour = Some(6);
        // Next-day drop at an earlier hour: only the hour check fires.
        assert_eq!(
            validate(&t),
            [ValidationIssue::DropHourBeforePickup { pickup: 9, drop: 6 }]
        );

        let mut t = trip();
        t.pickup_date = Some(day(3));
        assert_eq!(
            validate(&t),
            [ValidationIssue::DropDateBeforePickup { pickup: day(3), drop: day(1) }]
        );
    }

    #[test]
    fn missing_dates_skip_ordering_checks() {
        let mut t = trip();
        t.pickup_date = None;
        t.drop_hour = None;
        assert!(validate(&t).is_empty());
    }

    #[test]
    fn blank_fields_and_negative_charges_are_flagged() {
        let mut t = trip();
        t.city = "  ".to_owned();
        t.header.vehicle_number = String::new();
        t.toll_charge = -5.0;
        let issues = validate(&t);
        assert!(issues.contains(&ValidationIssue::MissingField { field: "city" }));
        assert!(issues.contains(&ValidationIssue::MissingField { field: "vehicle_number" }));
        assert!(issues.contains(&ValidationIssue::NegativeAmount {
            field: "toll_charge",
            value: -5.0
        }));
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn non_finite_amounts_are_flagged() {
        let mut t = trip();
        t.parking_charge = f64::NAN;
        t.night_allowance = f64::NEG_INFINITY;
        let issues = validate(&t);
        assert_eq!(issues.len(), 2, "{issues:?}");
        assert!(matches!(
            issues[0],
            ValidationIssue::NotFinite { field: "parking_charge", value } if value.is_nan()
        ));
        assert!(matches!(
            issues[1],
            ValidationIssue::NotFinite { field: "night_allowance", value } if value.is_infinite()
        ));
    }

    #[tokio::test]
    async fn strict_mode_rejects_nan_odometer() {
        let mut t = trip();
        t.end_odometer = f64::NAN;
        let store = MockStore::new();
        let result = desk(true).submit(&t, &store, &MockNotifier::new()).await;
        assert!(
            matches!(&result, Err(DeskError::Invalid { issues }) if issues.len() == 1),
            "{result:?}"
        );
        assert!(store.rows.borrow().is_empty());
    }

    #[test]
    fn issue_messages() {
        let issue = ValidationIssue::DropHourBeforePickup { pickup: 9, drop: 6 };
        assert_eq!(issue.to_string(), "drop hour 06 is before pickup hour 09");
        let issue = ValidationIssue::MissingField { field: "city" };
        assert_eq!(issue.to_string(), "city is required");
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    #[test]
    fn config_defaults() {
        let config = DeskConfig::builder().build().unwrap();
        assert!(!config.strict_validation);
        assert!(config.default_company.is_none());
    }

    #[test]
    fn config_rejects_blank_company() {
        let result = DeskConfig::builder().default_company(" ").build();
        assert!(matches!(result, Err(DeskError::InvalidConfig { .. })));
    }

    // ------------------------------------------------------------------
    // Quote + submit
    // ------------------------------------------------------------------

    #[test]
    fn quote_prices_without_persisting() {
        let (quote, issues) = desk(false).quote(&trip()).unwrap();
        assert!(issues.is_empty());
        assert_eq!(quote.grand_total, TRIP_TOTAL);
    }

    #[test]
    fn default_company_fills_missing_header_only() {
        let config = DeskConfig::builder().default_company("Valeo Ind Pvt Ltd.").build().unwrap();
        let desk = InvoiceDesk::new(config, PricingEngine::new(RateCatalog::builtin()));

        let (quote, _) = desk.quote(&trip()).unwrap();
        assert_eq!(quote.record.header.company_name.as_deref(), Some("Valeo Ind Pvt Ltd."));

        let mut t = trip();
        t.header.company_name = Some("Acme".to_owned());
        let (quote, _) = desk.quote(&t).unwrap();
        assert_eq!(quote.record.header.company_name.as_deref(), Some("Acme"));
    }

    #[tokio::test]
    async fn submit_stores_and_notifies() {
        let store = MockStore::new();
        let notifier = MockNotifier::new();
        let sub = desk(false).submit(&trip(), &store, &notifier).await.unwrap();

        assert_eq!(sub.grand_total(), TRIP_TOTAL);
        let id = sub.invoice_id.expect("store accepted the record");
        let stored = store.rows.borrow();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].record, sub.quote.record);
        assert_eq!(
            *notifier.notices.borrow(),
            [Notice::Saved { id, invoice_number: Some(1001), grand_total: TRIP_TOTAL }]
        );
    }

    #[tokio::test]
    async fn store_failure_keeps_total_and_notifies() {
        let store = MockStore::broken();
        let notifier = MockNotifier::new();
        let sub = desk(false).submit(&trip(), &store, &notifier).await.unwrap();

        assert_eq!(sub.grand_total(), TRIP_TOTAL);
        assert!(sub.invoice_id.is_none());
        let notices = notifier.notices.borrow();
        assert!(
            matches!(
                notices.as_slice(),
                [Notice::SaveFailed { invoice_number: Some(1001), reason }] if reason == "store unavailable"
            ),
            "unexpected notices: {notices:?}"
        );
    }

    #[tokio::test]
    async fn notifier_failure_is_swallowed() {
        let store = MockStore::new();
        let sub = desk(false).submit(&trip(), &store, &DeadNotifier).await.unwrap();
        assert!(sub.invoice_id.is_some());
    }

    #[tokio::test]
    async fn advisory_issues_do_not_block_persistence() {
        let mut t = trip();
        t.start_odometer = 500.0;
        let store = MockStore::new();
        let sub = desk(false).submit(&t, &store, &MockNotifier::new()).await.unwrap();
        assert_eq!(sub.issues.len(), 1);
        assert!(sub.invoice_id.is_some());
        assert_eq!(sub.quote.record.breakdown.total_distance, -150.0);
    }

    #[tokio::test]
    async fn strict_mode_rejects_before_pricing() {
        let mut t = trip();
        t.drop_date = Some(day(1));
        t.pickup_date = Some(day(5));
        let store = MockStore::new();
        let notifier = MockNotifier::new();
        let result = desk(true).submit(&t, &store, &notifier).await;
        assert!(
            matches!(&result, Err(DeskError::Invalid { issues }) if issues.len() == 1),
            "{result:?}"
        );
        assert!(store.rows.borrow().is_empty());
        assert!(notifier.notices.borrow().is_empty());
    }

    #[tokio::test]
    async fn each_submit_creates_a_new_record() {
        let store = MockStore::new();
        let notifier = MockNotifier::new();
        let desk = desk(false);
        let a = desk.submit(&trip(), &store, &notifier).await.unwrap();
        let b = desk.submit(&trip(), &store, &notifier).await.unwrap();
        assert_ne!(a.invoice_id, b.invoice_id);
        assert_eq!(desk.list(&store).await.unwrap().len(), 2);
    }

    // ------------------------------------------------------------------
    // Pass-through CRUD
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn get_update_delete_round_trip() {
        let store = MockStore::new();
        let desk = desk(false);
        let id = desk
            .submit(&trip(), &store, &MockNotifier::new())
            .await
            .unwrap()
            .invoice_id
            .unwrap();

        let patch = InvoicePatch {
            customer_name: Some("Meera".to_owned()),
            ..InvoicePatch::default()
        };
        desk.update(&store, id, &patch).await.unwrap();
        let got = desk.get(&store, id).await.unwrap().unwrap();
        assert_eq!(got.record.header.customer_name.as_deref(), Some("Meera"));
        assert_eq!(got.record.grand_total(), TRIP_TOTAL);

        desk.delete(&store, id).await.unwrap();
        assert!(desk.get(&store, id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn empty_patch_does_not_reach_store() {
        let store = MockStore::new();
        desk(false).update(&store, InvoiceId::random(), &InvoicePatch::default()).await.unwrap();
        assert_eq!(store.updates.get(), 0);
    }

    #[tokio::test]
    async fn missing_invoice_errors_propagate() {
        let store = MockStore::new();
        let desk = desk(false);
        let id = InvoiceId::random();
        let patch = InvoicePatch { particulars: Some("x".to_owned()), ..InvoicePatch::default() };
        let result = desk.update(&store, id, &patch).await;
        assert!(matches!(result, Err(DeskError::Store(StoreError::NotFound { .. }))));
        let result = desk.delete(&store, id).await;
        assert!(matches!(result, Err(DeskError::Store(StoreError::NotFound { .. }))));
    }

    #[tokio::test]
    async fn list_propagates_store_failure() {
        let result = desk(false).list(&MockStore::broken()).await;
        assert!(matches!(result, Err(DeskError::Store(StoreError::Unavailable))));
    }
}
