// Rust guideline compliant 2026-10-16

//! Rate catalog: per-city lists of vehicle rate definitions.
//!
//! Entry points: [`RateCatalog::lookup`], [`RateCatalog::vehicles_for`],
//! [`RateCatalog::builtin`]. Custom catalogs via [`RateCatalog::builder`].
//!
//! A catalog is read-only once built. The only mutation is
//! [`RateCatalog::replace_with`], which swaps the whole table.

use domain::RateDefinition;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// CatalogError
// ---------------------------------------------------------------------------

/// Errors raised while building a [`RateCatalog`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The same vehicle name appears twice in one city.
    #[error("duplicate vehicle {vehicle:?} in city {city:?}")]
    DuplicateVehicle { city: String, vehicle: String },
    /// A rate field is negative or not finite, or a name is blank.
    #[error("invalid rate for {vehicle:?} in {city:?}: {reason}")]
    InvalidRate {
        city: String,
        vehicle: String,
        /// Human-readable description of the problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// RateLookup
// ---------------------------------------------------------------------------

/// Outcome of a `(city, vehicle)` lookup.
///
/// `NotFound` covers both an unknown city and an unknown vehicle; it is a
/// normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateLookup<'a> {
    Found(&'a RateDefinition),
    NotFound,
}

impl<'a> RateLookup<'a> {
    /// The matched definition, if any.
    #[must_use]
    pub fn found(self) -> Option<&'a RateDefinition> {
        match self {
            Self::Found(rate) => Some(rate),
            Self::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

// ---------------------------------------------------------------------------
// RateCatalog
// ---------------------------------------------------------------------------

/// Built-in table row: (vehicle, base rate, extra km rate).
type VehicleRow = (&'static str, f64, f64);

/// Mapping from city name to the ordered rate definitions offered there.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateCatalog {
    cities: BTreeMap<String, Vec<RateDefinition>>,
}

impl RateCatalog {
    /// Start building a custom catalog.
    #[must_use]
    pub fn builder() -> RateCatalogBuilder {
        RateCatalogBuilder { entries: vec![] }
    }

    /// The fixed table the invoicing application ships with.
    ///
    /// Every vehicle includes 100 km and bills extra hours at 200; none sets
    /// an explicit included-hours threshold.
    #[must_use]
    pub fn builtin() -> Self {
        const TABLE: &[(&str, &[VehicleRow])] = &[
            (
                "Pune",
                &[
                    ("Cresta", 2500.0, 80.0),
                    ("Innova", 3000.0, 100.0),
                    ("Swift Desire", 2000.0, 70.0),
                ],
            ),
            (
                "Delhi",
                &[
                    ("Cresta", 2700.0, 90.0),
                    ("Innova", 3200.0, 110.0),
                    ("Swift Desire", 2100.0, 75.0),
                ],
            ),
            (
                "Nashik",
                &[
                    ("Cresta", 2400.0, 85.0),
                    ("Innova", 3100.0, 105.0),
                    ("Swift Desire", 2050.0, 72.0),
                ],
            ),
        ];
        let cities = TABLE
            .iter()
            .map(|(city, vehicles)| {
                let rates = vehicles
                    .iter()
                    .map(|&(vehicle, base, extra_km)| {
                        RateDefinition::new(vehicle, base, 100.0, extra_km, 200.0)
                    })
                    .collect();
                ((*city).to_owned(), rates)
            })
            .collect();
        Self { cities }
    }

    /// Rate definitions offered in `city`, in catalog order.
    ///
    /// Unknown cities yield an empty slice.
    #[must_use]
    pub fn vehicles_for(&self, city: &str) -> &[RateDefinition] {
        self.cities.get(city).map(Vec::as_slice).unwrap_or_default()
    }

    /// Find the rate for `vehicle` in `city`. First match wins.
    #[must_use]
    pub fn lookup(&self, city: &str, vehicle: &str) -> RateLookup<'_> {
        self.vehicles_for(city)
            .iter()
            .find(|rate| rate.vehicle == vehicle)
            .map_or(RateLookup::NotFound, RateLookup::Found)
    }

    /// Known city names in sorted order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Total number of rate definitions across all cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the whole table with `other`.
    pub fn replace_with(&mut self, other: Self) {
        log::info!(
            "rates.catalog.replaced: cities={} rates={}",
            other.cities.len(),
            other.len()
        );
        *self = other;
    }
}

// ---------------------------------------------------------------------------
// RateCatalogBuilder
// ---------------------------------------------------------------------------

/// Builder for [`RateCatalog`].
///
/// Obtain via [`RateCatalog::builder`]; finalize with [`build`](Self::build).
/// Insertion order within a city is preserved.
#[derive(Debug)]
pub struct RateCatalogBuilder {
    entries: Vec<(String, RateDefinition)>,
}

impl RateCatalogBuilder {
    /// Add one rate definition to `city`.
    #[must_use]
    pub fn rate(mut self, city: impl Into<String>, rate: RateDefinition) -> Self {
        self.entries.push((city.into(), rate));
        self
    }

    /// Add several rate definitions to `city`.
    #[must_use]
    pub fn city(
        mut self,
        city: impl Into<String>,
        rates: impl IntoIterator<Item = RateDefinition>,
    ) -> Self {
        let city = city.into();
        self.entries
            .extend(rates.into_iter().map(|rate| (city.clone(), rate)));
        self
    }

    /// Validate and build the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateVehicle`] when a vehicle name repeats
    /// within a city, or [`CatalogError::InvalidRate`] when a name is blank or
    /// a rate field is negative or not finite.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<RateCatalog, CatalogError> {
        let mut cities: BTreeMap<String, Vec<RateDefinition>> = BTreeMap::new();
        for (city, rate) in self.entries {
            validate(&city, &rate)?;
            let rates = cities.entry(city.clone()).or_default();
            if rates.iter().any(|r| r.vehicle == rate.vehicle) {
                return Err(CatalogError::DuplicateVehicle {
                    city,
                    vehicle: rate.vehicle,
                });
            }
            rates.push(rate);
        }
        let catalog = RateCatalog { cities };
        log::debug!(
            "rates.catalog.built: cities={} rates={}",
            catalog.cities.len(),
            catalog.len()
        );
        Ok(catalog)
    }
}

fn validate(city: &str, rate: &RateDefinition) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidRate {
        city: city.to_owned(),
        vehicle: rate.vehicle.clone(),
        reason,
    };
    if city.trim().is_empty() {
        return Err(invalid("city name is blank".to_owned()));
    }
    if rate.vehicle.trim().is_empty() {
        return Err(invalid("vehicle name is blank".to_owned()));
    }
    let fields = [
        ("base_rate", rate.base_rate),
        ("included_km", rate.included_km),
        ("extra_km_rate", rate.extra_km_rate),
        ("extra_hour_rate", rate.extra_hour_rate),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(format!("{name} must be finite and >= 0, got {value}")));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
