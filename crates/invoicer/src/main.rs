// Rust guideline compliant 2026-10-16

//! Invoicer entry point -- in-memory storage.
//!
//! Prices a batch of generated trips with the built-in rate catalog, stores
//! the invoices in memory and logs every step.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --bin invoicer
//!
//! # More trips, reproducible input, per-invoice debug output
//! RUST_LOG=debug INVOICER_TRIPS=20 INVOICER_SEED=42 cargo run --bin invoicer
//! ```

mod adapters;
mod demo;

use adapters::in_memory_store::InMemoryStore;
use anyhow::Context as _;

/// Generous capacity: far more than any demo session submits.
const STORE_CAPACITY: usize = 10_000;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize the tracing subscriber before any async work.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = demo::DemoSettings::from_env().context("invalid settings")?;
    let store = InMemoryStore::new(STORE_CAPACITY);

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
