// Rust guideline compliant 2026-10-16

//! Demo input: generates plausible random trips for the invoicer binaries.
//!
//! Cities and vehicles come from the rate catalog, plus one city the catalog
//! does not price so the zero-rate path shows up in demo runs.

use chrono::{Days, NaiveDate};
use domain::{InvoiceHeader, TripRequest};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rates::RateCatalog;
use std::cell::{Cell, RefCell};

/// City offered on the booking form without any rates behind it.
const UNPRICED_CITY: &str = "Mumbai";

const DRIVERS: &[&str] = &["Ravi", "Suresh", "Anil", "Imran", "Deepak", "Manoj"];

const CUSTOMERS: &[&str] = &["Meera Joshi", "Rahul Nair", "Priya Shah", "Arjun Rao"];

const PARKING: &[f64] = &[0.0, 50.0, 100.0];
const TOLL: &[f64] = &[0.0, 100.0, 300.0];
const NIGHT_ALLOWANCE: &[f64] = &[0.0, 250.0];

/// Generates random [`TripRequest`]s with sequential invoice numbers.
#[derive(Debug)]
pub struct TripGenerator {
    /// Interior mutability required because `generate` takes `&self`.
    rng: RefCell<StdRng>,
    /// Earliest pickup date; pickups fall within 30 days after it.
    first_day: NaiveDate,
    next_invoice: Cell<u32>,
}

impl TripGenerator {
    /// Create a generator. Seeds from `seed` if set, otherwise from the OS.
    #[must_use]
    pub fn new(seed: Option<u64>, first_day: NaiveDate, first_invoice: u32) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng: RefCell::new(rng), first_day, next_invoice: Cell::new(first_invoice) }
    }

    /// Generate one trip against `catalog`.
    ///
    /// Pickups start between 05:00 and 12:00 and last 2 to 30 hours.
    /// Distances fall in `[20, 300]` km.
    #[must_use]
    pub fn generate(&self, catalog: &RateCatalog) -> TripRequest {
        let mut rng = self.rng.borrow_mut();

        let mut cities: Vec<&str> = catalog.cities().collect();
        cities.push(UNPRICED_CITY);
        let city = cities[rng.random_range(0..cities.len())];
        let vehicles = catalog.vehicles_for(city);
        let vehicle = if vehicles.is_empty() {
            "Innova"
        } else {
            vehicles[rng.random_range(0..vehicles.len())].vehicle.as_str()
        };

        let start_odometer = f64::from(rng.random_range(1_000_u32..=50_000));
        let distance = f64::from(rng.random_range(20_u32..=300));

        let pickup_date = self
            .first_day
            .checked_add_days(Days::new(rng.random_range(0..30)))
            .unwrap_or(self.first_day);
        let pickup_hour = rng.random_range(5_u32..=12);
        let end = pickup_hour + rng.random_range(2_u32..=30);
        let drop_date = pickup_date
            .checked_add_days(Days::new(u64::from(end / 24)))
            .unwrap_or(pickup_date);

        let invoice_number = self.next_invoice.get();
        self.next_invoice.set(invoice_number + 1);

        TripRequest {
            header: InvoiceHeader {
                invoice_number: Some(invoice_number),
                invoice_date: Some(drop_date),
                driver_name: Some(DRIVERS[rng.random_range(0..DRIVERS.len())].to_owned()),
                vehicle_number: format!(
                    "MH{:02}AB{:04}",
                    rng.random_range(1_u32..=50),
                    rng.random_range(0_u32..10_000)
                ),
                customer_name: Some(CUSTOMERS[rng.random_range(0..CUSTOMERS.len())].to_owned()),
                company_name: None,
                particulars: Some(format!("{vehicle} hire, {city}")),
            },
            vehicle: vehicle.to_owned(),
            city: city.to_owned(),
            start_odometer,
            end_odometer: start_odometer + distance,
            parking_charge: PARKING[rng.random_range(0..PARKING.len())],
            toll_charge: TOLL[rng.random_range(0..TOLL.len())],
            night_allowance: NIGHT_ALLOWANCE[rng.random_range(0..NIGHT_ALLOWANCE.len())],
            pickup_date: Some(pickup_date),
            pickup_hour: Some(pickup_hour),
            drop_date: Some(drop_date),
            drop_hour: Some(end % 24),
        }
    }
}
