// Rust guideline compliant 2026-10-16

//! `SQLite` adapter for the `InvoiceStore` port.
//!
//! Persists one row per invoice to a `SQLite` file via `sqlx`. Dates are stored
//! as ISO-8601 text, hours and invoice numbers as INTEGER, amounts as REAL.
//! `list` returns rows in insertion order (`rowid`).
//!
//! Every `sqlx` failure is logged and mapped to `StoreError::Unavailable`;
//! rows that cannot be decoded map to `StoreError::Corrupt`.

use chrono::NaiveDate;
use domain::{
    CostBreakdown, InvoiceHeader, InvoiceId, InvoicePatch, InvoiceRecord, InvoiceStore,
    StoreError, StoredInvoice,
};
use sqlx::Row as _;
use sqlx::sqlite::SqliteRow;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS invoices (
    id                    TEXT    PRIMARY KEY,
    invoice_number        INTEGER,
    invoice_date          TEXT,
    driver_name           TEXT,
    vehicle_number        TEXT    NOT NULL,
    customer_name         TEXT,
    company_name          TEXT,
    particulars           TEXT,
    vehicle               TEXT    NOT NULL,
    city                  TEXT    NOT NULL,
    start_odometer        REAL    NOT NULL,
    end_odometer          REAL    NOT NULL,
    pickup_date           TEXT,
    pickup_hour           INTEGER,
    drop_date             TEXT,
    drop_hour             INTEGER,
    base_cost             REAL    NOT NULL,
    included_km           REAL    NOT NULL,
    per_extra_km_rate     REAL    NOT NULL,
    per_extra_hour_rate   REAL    NOT NULL,
    included_hours        INTEGER NOT NULL,
    total_distance        REAL    NOT NULL,
    extra_distance        REAL    NOT NULL,
    extra_distance_charge REAL    NOT NULL,
    billable_hours        INTEGER NOT NULL,
    extra_hours           INTEGER NOT NULL,
    extra_hour_charge     REAL    NOT NULL,
    total_extra_charges   REAL    NOT NULL,
    night_allowance       REAL    NOT NULL,
    grand_total           REAL    NOT NULL
)";

const INSERT: &str = "INSERT INTO invoices
    (id, invoice_number, invoice_date, driver_name, vehicle_number, customer_name,
     company_name, particulars, vehicle, city, start_odometer, end_odometer,
     pickup_date, pickup_hour, drop_date, drop_hour, base_cost, included_km,
     per_extra_km_rate, per_extra_hour_rate, included_hours, total_distance,
     extra_distance, extra_distance_charge, billable_hours, extra_hours,
     extra_hour_charge, total_extra_charges, night_allowance, grand_total)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
            ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

const SELECT_ALL: &str = "SELECT * FROM invoices ORDER BY rowid";

const SELECT_ONE: &str = "SELECT * FROM invoices WHERE id = ?";

const UPDATE_HEADER: &str = "UPDATE invoices SET
    invoice_number = COALESCE(?, invoice_number),
    invoice_date   = COALESCE(?, invoice_date),
    driver_name    = COALESCE(?, driver_name),
    vehicle_number = COALESCE(?, vehicle_number),
    customer_name  = COALESCE(?, customer_name),
    company_name   = COALESCE(?, company_name),
    particulars    = COALESCE(?, particulars)
    WHERE id = ?";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// `InvoiceStore` adapter backed by a `SQLite` database via `sqlx`.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: sqlx::SqlitePool,
}

impl SqliteStore {
    /// Open or create a `SQLite` database and initialize the schema.
    ///
    /// The file is created on first use; the `invoices` table is created with
    /// `CREATE TABLE IF NOT EXISTS`, so repeated calls are safe.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` when the connection or schema creation fails.
    pub async fn new(db_url: &str) -> Result<Self, sqlx::Error> {
        // sqlx 0.8 defaults create_if_missing to false for file databases.
        let opts = db_url
            .parse::<sqlx::sqlite::SqliteConnectOptions>()?
            .create_if_missing(true);
        let pool = sqlx::SqlitePool::connect_with(opts).await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }
}

/// Log a `sqlx` failure for `op` and map it to `StoreError::Unavailable`.
fn unavailable(op: &'static str) -> impl Fn(sqlx::Error) -> StoreError {
    move |e| {
        tracing::error!(op, error = %e, "sqlite_store.failed");
        StoreError::Unavailable
    }
}

fn corrupt(e: impl std::fmt::Display) -> StoreError {
    StoreError::Corrupt { reason: e.to_string() }
}

fn encode_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

fn decode_date(row: &SqliteRow, column: &str) -> Result<Option<NaiveDate>, StoreError> {
    let raw: Option<String> = row.try_get(column).map_err(corrupt)?;
    raw.map(|s| {
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|e| corrupt(format!("{column} {s:?}: {e}")))
    })
    .transpose()
}

fn decode_u32(row: &SqliteRow, column: &str) -> Result<Option<u32>, StoreError> {
    let raw: Option<i64> = row.try_get(column).map_err(corrupt)?;
    raw.map(|v| u32::try_from(v).map_err(|e| corrupt(format!("{column} {v}: {e}"))))
        .transpose()
}

fn decode(row: &SqliteRow) -> Result<StoredInvoice, StoreError> {
    let id: String = row.try_get("id").map_err(corrupt)?;
    let id = uuid::Uuid::parse_str(&id).map_err(|e| corrupt(format!("id {id:?}: {e}")))?;
    let f = |column: &str| row.try_get::<f64, _>(column).map_err(corrupt);
    let i = |column: &str| row.try_get::<i64, _>(column).map_err(corrupt);

    let header = InvoiceHeader {
        invoice_number: decode_u32(row, "invoice_number")?,
        invoice_date: decode_date(row, "invoice_date")?,
        driver_name: row.try_get("driver_name").map_err(corrupt)?,
        vehicle_number: row.try_get("vehicle_number").map_err(corrupt)?,
        customer_name: row.try_get("customer_name").map_err(corrupt)?,
        company_name: row.try_get("company_name").map_err(corrupt)?,
        particulars: row.try_get("particulars").map_err(corrupt)?,
    };
    let breakdown = CostBreakdown {
        base_cost: f("base_cost")?,
        included_km: f("included_km")?,
        per_extra_km_rate: f("per_extra_km_rate")?,
        per_extra_hour_rate: f("per_extra_hour_rate")?,
        included_hours: decode_u32(row, "included_hours")?.unwrap_or_default(),
        total_distance: f("total_distance")?,
        extra_distance: f("extra_distance")?,
        extra_distance_charge: f("extra_distance_charge")?,
        billable_hours: i("billable_hours")?,
        extra_hours: i("extra_hours")?,
        extra_hour_charge: f("extra_hour_charge")?,
        total_extra_charges: f("total_extra_charges")?,
        night_allowance: f("night_allowance")?,
        grand_total: f("grand_total")?,
    };
    let record = InvoiceRecord {
        header,
        vehicle: row.try_get("vehicle").map_err(corrupt)?,
        city: row.try_get("city").map_err(corrupt)?,
        start_odometer: f("start_odometer")?,
        end_odometer: f("end_odometer")?,
        pickup_date: decode_date(row, "pickup_date")?,
        pickup_hour: decode_u32(row, "pickup_hour")?,
        drop_date: decode_date(row, "drop_date")?,
        drop_hour: decode_u32(row, "drop_hour")?,
        breakdown,
    };
    Ok(StoredInvoice { id: InvoiceId::from_uuid(id), record })
}

impl InvoiceStore for SqliteStore {
    /// Insert `record` as a new row under a fresh random id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` on any `sqlx` error.
    async fn create(&self, record: InvoiceRecord) -> Result<InvoiceId, StoreError> {
        let id = InvoiceId::random();
        let h = &record.header;
        let b = &record.breakdown;
        sqlx::query(INSERT)
            .bind(id.to_string())
            .bind(h.invoice_number.map(i64::from))
            .bind(encode_date(h.invoice_date))
            .bind(&h.driver_name)
            .bind(&h.vehicle_number)
            .bind(&h.customer_name)
            .bind(&h.company_name)
            .bind(&h.particulars)
            .bind(&record.vehicle)
            .bind(&record.city)
            .bind(record.start_odometer)
            .bind(record.end_odometer)
            .bind(encode_date(record.pickup_date))
            .bind(record.pickup_hour.map(i64::from))
            .bind(encode_date(record.drop_date))
            .bind(record.drop_hour.map(i64::from))
            .bind(b.base_cost)
            .bind(b.included_km)
            .bind(b.per_extra_km_rate)
            .bind(b.per_extra_hour_rate)
            .bind(i64::from(b.included_hours))
            .bind(b.total_distance)
            .bind(b.extra_distance)
            .bind(b.extra_distance_charge)
            .bind(b.billable_hours)
            .bind(b.extra_hours)
            .bind(b.extra_hour_charge)
            .bind(b.total_extra_charges)
            .bind(b.night_allowance)
            .bind(b.grand_total)
            .execute(&self.pool)
            .await
            .map_err(unavailable("create"))?;
        tracing::debug!(invoice_id = %id, "sqlite_store.created");
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<StoredInvoice>, StoreError> {
        let rows = sqlx::query(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable("list"))?;
        rows.iter().map(decode).collect()
    }

    async fn get(&self, id: InvoiceId) -> Result<Option<StoredInvoice>, StoreError> {
        let row = sqlx::query(SELECT_ONE)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable("get"))?;
        row.as_ref().map(decode).transpose()
    }

    /// Overwrite the header columns set in `patch` in one statement.
    ///
    /// Unset fields bind as NULL and `COALESCE` keeps the stored value, so
    /// overlapping updates touching different fields never undo each other.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, or
    /// `StoreError::Unavailable` on any `sqlx` error.
    async fn update(&self, id: InvoiceId, patch: &InvoicePatch) -> Result<(), StoreError> {
        let done = sqlx::query(UPDATE_HEADER)
            .bind(patch.invoice_number.map(i64::from))
            .bind(encode_date(patch.invoice_date))
            .bind(&patch.driver_name)
            .bind(&patch.vehicle_number)
            .bind(&patch.customer_name)
            .bind(&patch.company_name)
            .bind(&patch.particulars)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(unavailable("update"))?;
        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    async fn delete(&self, id: InvoiceId) -> Result<(), StoreError> {
        let done = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(unavailable("delete"))?;
        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
