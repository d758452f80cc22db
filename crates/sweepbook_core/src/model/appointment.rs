//! Scheduled cleaning jobs.
//!
//! # Invariants
//! - `amount` is the total price for `Fixed` billing and the hourly rate for
//!   `Hourly` billing.
//! - `estimated_hours` is meaningful only for `Hourly` billing.
//! - `time` is a display string and never used for ordering.

use super::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Job lifecycle: `Scheduled -> Completed` or `Scheduled -> Cancelled`.
///
/// Updates may still assign any value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BillingType {
    /// Flat total regardless of hours.
    Fixed,
    /// `amount` is a rate per hour.
    Hourly,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: EntityId,
    /// Not checked against the customer list.
    pub customer_id: EntityId,
    /// Expected to name a location of `customer_id`; not enforced.
    pub location_id: EntityId,
    pub date: NaiveDate,
    /// Display string, e.g. "09:00 AM".
    pub time: String,
    #[serde(default)]
    pub services: Vec<String>,
    pub status: AppointmentStatus,
    pub billing_type: BillingType,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Appointment input before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub customer_id: EntityId,
    pub location_id: EntityId,
    pub date: NaiveDate,
    pub time: String,
    pub services: Vec<String>,
    pub status: AppointmentStatus,
    pub billing_type: BillingType,
    pub amount: f64,
    pub estimated_hours: Option<f64>,
    pub notes: Option<String>,
}

impl NewAppointment {
    /// Starts a `Scheduled`, fixed-price job with no services listed.
    pub fn fixed(
        customer_id: impl Into<EntityId>,
        location_id: impl Into<EntityId>,
        date: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            location_id: location_id.into(),
            date,
            time: String::new(),
            services: Vec::new(),
            status: AppointmentStatus::Scheduled,
            billing_type: BillingType::Fixed,
            amount,
            estimated_hours: None,
            notes: None,
        }
    }

    /// Starts a `Scheduled`, hourly job at `rate` per hour.
    pub fn hourly(
        customer_id: impl Into<EntityId>,
        location_id: impl Into<EntityId>,
        date: NaiveDate,
        rate: f64,
        estimated_hours: Option<f64>,
    ) -> Self {
        Self {
            billing_type: BillingType::Hourly,
            estimated_hours,
            ..Self::fixed(customer_id, location_id, date, rate)
        }
    }

    pub fn into_appointment(self, id: EntityId) -> Appointment {
        Appointment {
            id,
            customer_id: self.customer_id,
            location_id: self.location_id,
            date: self.date,
            time: self.time,
            services: self.services,
            status: self.status,
            billing_type: self.billing_type,
            amount: self.amount,
            estimated_hours: self.estimated_hours,
            notes: self.notes,
        }
    }
}

impl Appointment {
    /// Services joined for single-line display.
    pub fn services_label(&self) -> String {
        self.services.join(", ")
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// Splits comma-separated service input into trimmed, non-empty names.
pub fn parse_services(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|service| !service.is_empty())
        .map(str::to_string)
        .collect()
}
