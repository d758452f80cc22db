//! Derived values computed from state snapshots.
//!
//! # Responsibility
//! - Price jobs, total earnings windows and flag low stock.
//! - Order and partition appointments for summary views.
//! - Lay out month calendars and flag past-due invoices.
//!
//! # Invariants
//! - Every function here is pure: inputs are borrowed, nothing is persisted.
//! - "Today" is always passed in; no rule reads the system clock.

pub mod billing;
pub mod calendar;
pub mod dashboard;
pub mod earnings;
pub mod pricing;
pub mod schedule;
pub mod stock;
