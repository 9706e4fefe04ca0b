//! Core traits for the DNS sync client
//!
//! - [`RecordProvider`]: list zones and records, update records via a provider API
//! - [`RecordProviderFactory`]: build a provider from configuration

pub mod record_provider;

pub use record_provider::{RecordProvider, RecordProviderFactory};
