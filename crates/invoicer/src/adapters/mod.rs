// Rust guideline compliant 2026-10-16

//! Adapters (secondary ports) for the invoicer binaries.
//!
//! Each sub-module implements a port trait from the `domain` crate, or feeds
//! the desk with demo input. The `SQLite` store is loaded separately by the
//! `invoicer_sqlite` entry point.

pub mod in_memory_store;
pub mod log_notifier;
pub mod trip_generator;
