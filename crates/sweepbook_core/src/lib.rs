//! Core domain logic for SweepBook, a small-business book for house-cleaning
//! providers.
//! This crate is the single source of truth for business rules; front ends
//! only read state and call its mutation methods.

pub mod config;
pub mod db;
pub mod links;
pub mod logging;
pub mod model;
pub mod rules;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::appointment::{
    parse_services, Appointment, AppointmentStatus, BillingType, NewAppointment,
};
pub use model::business::BusinessInfo;
pub use model::customer::{Contact, Customer, Kid, Location, NewCustomer, Pet};
pub use model::inventory::{InventoryItem, NewInventoryItem};
pub use model::invoice::{Invoice, InvoiceStatus, NewInvoice};
pub use model::EntityId;
pub use rules::earnings::EarningsSummary;
pub use seed::SeedData;
pub use service::app_state::AppState;
pub use service::invoice_document::InvoiceDocument;
pub use store::{
    KeyValueStore, MemoryKeyValueStore, PersistentStore, SqliteKeyValueStore, StoreError,
    StoreResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
