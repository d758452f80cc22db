//! Invoices issued against completed appointments.
//!
//! # Invariants
//! - `amount` is a snapshot taken at creation; later appointment edits do not
//!   change it.
//! - Status moves `Draft -> Sent -> Paid`, or to `Overdue` from anywhere, by
//!   direct assignment only.

use super::EntityId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 4] = [Self::Draft, Self::Sent, Self::Paid, Self::Overdue];

    pub fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Sent => "Sent",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }
}

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognized invoice status text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownInvoiceStatus(pub String);

impl Display for UnknownInvoiceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown invoice status `{}`; expected draft|sent|paid|overdue",
            self.0
        )
    }
}

impl Error for UnknownInvoiceStatus {}

impl FromStr for InvoiceStatus {
    type Err = UnknownInvoiceStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownInvoiceStatus(value.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub appointment_id: EntityId,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: f64,
    pub status: InvoiceStatus,
}

/// Invoice input before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: EntityId,
    pub appointment_id: EntityId,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub amount: f64,
    pub status: InvoiceStatus,
}

impl NewInvoice {
    pub fn into_invoice(self, id: EntityId) -> Invoice {
        Invoice {
            id,
            customer_id: self.customer_id,
            appointment_id: self.appointment_id,
            issue_date: self.issue_date,
            due_date: self.due_date,
            amount: self.amount,
            status: self.status,
        }
    }
}
