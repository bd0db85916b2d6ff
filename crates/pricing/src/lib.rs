// Rust guideline compliant 2026-10-16

//! Pricing engine: turns a [`TripRequest`] into a billed total and an
//! [`InvoiceRecord`].
//!
//! Entry points: [`PricingEngine::quote`], [`billable_hours`],
//! [`billable_hours_between`]. Everything here is pure: no I/O, no shared
//! mutable state. Persisting the resulting record is the caller's business.
//!
//! Malformed input is priced as given. A reversed odometer produces a
//! negative distance, an unknown `(city, vehicle)` pair prices the rate
//! portion at zero.

use chrono::{NaiveDate, NaiveDateTime};
use domain::{CostBreakdown, DEFAULT_INCLUDED_HOURS, InvoiceRecord, TripRequest};
use rates::{RateCatalog, RateLookup};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Added once to a negative hour count to cover drops past midnight.
pub const OVERNIGHT_WRAP_HOURS: i64 = 24;

// ---------------------------------------------------------------------------
// Duration
// ---------------------------------------------------------------------------

/// Billable hours between a pickup and a drop given as date plus hour of day.
///
/// Returns `0` when any input is missing or an hour is outside `0..=23`.
/// Otherwise delegates to [`billable_hours_between`] with minutes and
/// seconds set to zero.
#[must_use]
pub fn billable_hours(
    pickup_date: Option<NaiveDate>,
    pickup_hour: Option<u32>,
    drop_date: Option<NaiveDate>,
    drop_hour: Option<u32>,
) -> i64 {
    let (Some(pickup_date), Some(pickup_hour), Some(drop_date), Some(drop_hour)) =
        (pickup_date, pickup_hour, drop_date, drop_hour)
    else {
        return 0;
    };
    let (Some(start), Some(end)) = (
        pickup_date.and_hms_opt(pickup_hour, 0, 0),
        drop_date.and_hms_opt(drop_hour, 0, 0),
    ) else {
        log::debug!("pricing.hours.invalid_hour: pickup={pickup_hour} drop={drop_hour}");
        return 0;
    };
    billable_hours_between(start, end)
}

/// Billable hours between two instants.
///
/// Any partial hour counts as a full hour (ceiling). A negative result gets
/// [`OVERNIGHT_WRAP_HOURS`] added once; differences more than a day in the
/// past therefore stay negative.
#[must_use]
pub fn billable_hours_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let millis = (end - start).num_milliseconds();
    let whole = millis.div_euclid(MILLIS_PER_HOUR);
    let hours = if millis.rem_euclid(MILLIS_PER_HOUR) == 0 { whole } else { whole + 1 };
    if hours < 0 {
        log::debug!("pricing.hours.overnight_wrap: raw={hours}");
        hours + OVERNIGHT_WRAP_HOURS
    } else {
        hours
    }
}

// ---------------------------------------------------------------------------
// PricingEngine
// ---------------------------------------------------------------------------

/// Result of pricing one trip.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Same value as `record.breakdown.grand_total`.
    pub grand_total: f64,
    pub record: InvoiceRecord,
}

/// Prices trips against a rate catalog supplied at construction.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: RateCatalog,
}

impl PricingEngine {
    /// Create an engine that prices against `catalog`.
    #[must_use]
    pub fn new(catalog: RateCatalog) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &RateCatalog {
        &self.catalog
    }

    /// Price `trip`.
    ///
    /// Distance cost is the base rate, plus `extra_km_rate` per kilometer
    /// beyond the included distance. Parking, toll and night allowance are
    /// added as given. Hours beyond the included threshold (rate value, or
    /// [`DEFAULT_INCLUDED_HOURS`]) are billed at `extra_hour_rate`.
    ///
    /// When the catalog has no rate for the trip's city and vehicle, every
    /// rate-derived quantity is zero and only the surcharges remain.
    #[must_use]
    pub fn quote(&self, trip: &TripRequest) -> Quote {
        let total_distance = trip.end_odometer - trip.start_odometer;
        let mut b = CostBreakdown {
            total_distance,
            included_hours: DEFAULT_INCLUDED_HOURS,
            ..CostBreakdown::default()
        };

        match self.catalog.lookup(&trip.city, &trip.vehicle) {
            RateLookup::Found(rate) => {
                b.base_cost = rate.base_rate;
                b.included_km = rate.included_km;
                b.per_extra_km_rate = rate.extra_km_rate;
                b.per_extra_hour_rate = rate.extra_hour_rate;
                b.included_hours = rate.effective_included_hours();
                if total_distance > rate.included_km {
                    b.extra_distance = total_distance - rate.included_km;
                    b.extra_distance_charge = b.extra_distance * rate.extra_km_rate;
                }
            }
            RateLookup::NotFound => {
                log::debug!(
                    "pricing.quote.rate_not_found: city={:?} vehicle={:?}",
                    trip.city,
                    trip.vehicle
                );
            }
        }
        let mut cost = b.base_cost + b.extra_distance_charge;

        b.total_extra_charges = trip.parking_charge + trip.toll_charge;
        b.night_allowance = trip.night_allowance;
        cost += b.total_extra_charges + b.night_allowance;

        b.billable_hours =
            billable_hours(trip.pickup_date, trip.pickup_hour, trip.drop_date, trip.drop_hour);
        let threshold = i64::from(b.included_hours);
        if b.billable_hours > threshold {
            b.extra_hours = b.billable_hours - threshold;
            #[expect(
                clippy::cast_precision_loss,
                reason = "hour counts stay far below 2^52"
            )]
            let extra_hours = b.extra_hours as f64;
            b.extra_hour_charge = extra_hours * b.per_extra_hour_rate;
            cost += b.extra_hour_charge;
        }
        b.grand_total = cost;

        log::debug!(
            "pricing.quote: city={:?} vehicle={:?} distance={} hours={} total={}",
            trip.city,
            trip.vehicle,
            b.total_distance,
            b.billable_hours,
            b.grand_total
        );

        let record = InvoiceRecord {
            header: trip.header.clone(),
            vehicle: trip.vehicle.clone(),
            city: trip.city.clone(),
            start_odometer: trip.start_odometer,
            end_odometer: trip.end_odometer,
            pickup_date: trip.pickup_date,
            pickup_hour: trip.pickup_hour,
            drop_date: trip.drop_date,
            drop_hour: trip.drop_hour,
            breakdown: b,
        };
        Quote { grand_total: b.grand_total, record }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
