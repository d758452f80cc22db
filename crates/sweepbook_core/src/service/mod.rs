//! Use-case layer over the store.
//!
//! # Responsibility
//! - Own application state and its mutation paths.
//! - Assemble read models (invoice export) from that state.

pub mod app_state;
pub mod invoice_document;
