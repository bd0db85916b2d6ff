// Rust guideline compliant 2026-10-16

//! Invoicer entry point -- `SQLite` storage.
//!
//! Identical to the `invoicer` binary except that invoices are persisted to a
//! `SQLite` database instead of an in-memory vector. Only this entry point and
//! the adapter change; the domain, rates, pricing and desk crates are untouched.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --bin invoicer_sqlite
//!
//! # Custom database location
//! INVOICER_DB_URL=sqlite:/tmp/invoices.db cargo run --bin invoicer_sqlite
//! ```
//!
//! Invoices accumulate across runs; inspect them with any `SQLite` browser.

mod adapters;
mod demo;

// Load sqlite_store directly so it only enters this binary's module tree,
// avoiding dead_code warnings in the `invoicer` binary.
#[path = "adapters/sqlite_store.rs"]
mod sqlite_store;

use anyhow::Context as _;
use sqlite_store::SqliteStore;

/// Database used when `INVOICER_DB_URL` is unset, relative to the working directory.
const DEFAULT_DB_URL: &str = "sqlite:invoices.db";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize the tracing subscriber before any async work.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = demo::DemoSettings::from_env().context("invalid settings")?;
    let db_url = std::env::var("INVOICER_DB_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_owned());
    let store = SqliteStore::new(&db_url)
        .await
        .with_context(|| format!("failed to open SQLite store at {db_url}"))?;
    tracing::info!(db_url = %db_url, "main.store.opened");

    // Race the session against CTRL+C.
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("main.shutdown: ctrl_c received");
        }
        result = demo::run(&settings, &store) => {
            result?;
        }
    }

    Ok(())
}
