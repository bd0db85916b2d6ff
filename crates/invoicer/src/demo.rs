// Rust guideline compliant 2026-10-16

//! Demo session shared by both entry points.
//!
//! Generates trips, submits each through the desk, lists what the store holds
//! and patches the first invoice. Only the store differs between binaries.

use crate::adapters::log_notifier::LogNotifier;
use crate::adapters::trip_generator::TripGenerator;
use anyhow::Context as _;
use desk::{DeskConfig, InvoiceDesk};
use domain::{InvoicePatch, InvoiceStore};
use pricing::PricingEngine;
use rates::RateCatalog;

/// Company pre-filled on the booking form.
const DEFAULT_COMPANY: &str = "Valeo Ind Pvt Ltd.";

/// First invoice number handed out by the trip generator.
const FIRST_INVOICE: u32 = 1001;

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    /// Number of trips to submit (`INVOICER_TRIPS`, default 5).
    pub trips: usize,
    /// RNG seed for trip generation (`INVOICER_SEED`). `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl DemoSettings {
    /// Read `INVOICER_TRIPS` and `INVOICER_SEED`.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but not a valid number.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::parse(
            std::env::var("INVOICER_TRIPS").ok().as_deref(),
            std::env::var("INVOICER_SEED").ok().as_deref(),
        )
    }

    /// Parse raw setting values; `None` selects the default.
    ///
    /// # Errors
    ///
    /// Returns an error when a value is not a valid number.
    pub fn parse(trips: Option<&str>, seed: Option<&str>) -> anyhow::Result<Self> {
        let trips = trips
            .map(str::parse)
            .transpose()
            .context("INVOICER_TRIPS must be a non-negative integer")?
            .unwrap_or(5);
        let seed = seed
            .map(str::parse)
            .transpose()
            .context("INVOICER_SEED must be an unsigned 64-bit integer")?;
        Ok(Self { trips, seed })
    }
}

/// Run one demo session against `store`.
///
/// # Errors
///
/// Returns an error when the desk configuration is invalid or a store read
/// or update fails. Failed creates are reported by the notifier instead.
pub async fn run<S: InvoiceStore>(settings: &DemoSettings, store: &S) -> anyhow::Result<()> {
    let config = DeskConfig::builder()
        .default_company(DEFAULT_COMPANY)
        .build()
        .context("failed to build desk config")?;
    let desk = InvoiceDesk::new(config, PricingEngine::new(RateCatalog::builtin()));
    let notifier = LogNotifier::new();
    let generator = TripGenerator::new(
        settings.seed,
        chrono::Local::now().date_naive(),
        FIRST_INVOICE,
    );

    for _ in 0..settings.trips {
        let trip = generator.generate(desk.engine().catalog());
        let submission = desk
            .submit(&trip, store, &notifier)
            .await
            .context("failed to submit trip")?;
        let b = &submission.quote.record.breakdown;
        tracing::info!(
            city = %trip.city,
            vehicle = %trip.vehicle,
            distance = b.total_distance,
            hours = b.billable_hours,
            issues = submission.issues.len(),
            grand_total = submission.grand_total(),
            "demo.trip.priced"
        );
    }

    let invoices = desk.list(store).await.context("failed to list invoices")?;
    tracing::info!(count = invoices.len(), "demo.invoices.listed");
    for stored in &invoices {
        tracing::debug!(
            invoice_id = %stored.id,
            invoice_number = ?stored.record.header.invoice_number,
            grand_total = stored.record.grand_total(),
            "demo.invoice"
        );
    }

    if let Some(first) = invoices.first() {
        let patch = InvoicePatch {
            particulars: Some("Reviewed at desk".to_owned()),
            ..InvoicePatch::default()
        };
        desk.update(store, first.id, &patch)
            .await
            .context("failed to update first invoice")?;
    }

    Ok(())
}
