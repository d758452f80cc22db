//! Invoice export snapshot.
//!
//! # Responsibility
//! - Gather everything a printed invoice shows into one value.
//! - Render that value as plain text; rasterizing to PDF is left to callers.
//!
//! # Invariants
//! - The only line item and the total both equal the invoice's stored
//!   `amount`, never a recomputed price.
//! - Stale customer/appointment references degrade to empty fields, not
//!   errors.

use crate::model::business::BusinessInfo;
use crate::model::invoice::{Invoice, InvoiceStatus};
use crate::rules::pricing::format_money;
use crate::service::app_state::AppState;
use crate::store::KeyValueStore;
use chrono::NaiveDate;
use std::fmt::Write as _;

const FALLBACK_SERVICE_DESCRIPTION: &str = "Cleaning Service";
const DATE_FORMAT: &str = "%b %-d, %Y";

#[derive(Debug, Clone, PartialEq)]
pub struct BillTo {
    pub household_name: Option<String>,
    pub contact_name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub description: String,
    pub service_date: Option<NaiveDate>,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    pub business: BusinessInfo,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub bill_to: BillTo,
    pub line_item: LineItem,
    pub total: f64,
}

impl InvoiceDocument {
    /// Builds the snapshot for `invoice_id`; `None` when the invoice is gone.
    pub fn build<S: KeyValueStore>(state: &AppState<S>, invoice_id: &str) -> Option<Self> {
        let invoice = state.invoice(invoice_id)?;
        Some(Self::from_parts(state, invoice))
    }

    fn from_parts<S: KeyValueStore>(state: &AppState<S>, invoice: &Invoice) -> Self {
        let customer = state.customer(&invoice.customer_id);
        let appointment = state.appointment(&invoice.appointment_id);

        let description = appointment
            .map(|appt| appt.services_label())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| FALLBACK_SERVICE_DESCRIPTION.to_string());

        Self {
            business: state.business_info().clone(),
            invoice_number: invoice.id.clone(),
            issue_date: invoice.issue_date,
            due_date: invoice.due_date,
            status: invoice.status,
            bill_to: BillTo {
                household_name: customer.map(|c| c.household_name.clone()),
                contact_name: customer
                    .and_then(|c| c.primary_contact())
                    .map(|contact| contact.name.clone()),
                address: customer
                    .and_then(|c| c.primary_location())
                    .map(|location| location.address.clone()),
            },
            line_item: LineItem {
                description,
                service_date: appointment.map(|appt| appt.date),
                amount: invoice.amount,
            },
            total: invoice.amount,
        }
    }

    /// Download name, e.g. `Invoice-inv2.pdf`.
    pub fn file_name(&self) -> String {
        format!("Invoice-{}.pdf", self.invoice_number)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out);
        out
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", self.business.name)?;
        for line in self.business.address_lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        writeln!(out, "INVOICE")?;
        writeln!(out, "Invoice #: {}", self.invoice_number)?;
        writeln!(out, "Date Issued: {}", self.issue_date.format(DATE_FORMAT))?;
        writeln!(out, "Date Due: {}", self.due_date.format(DATE_FORMAT))?;
        writeln!(out, "Status: {}", self.status)?;
        writeln!(out)?;
        writeln!(out, "Bill To")?;
        for field in [
            &self.bill_to.household_name,
            &self.bill_to.contact_name,
            &self.bill_to.address,
        ]
        .into_iter()
        .flatten()
        {
            writeln!(out, "{field}")?;
        }
        writeln!(out)?;
        let service_date = self
            .line_item
            .service_date
            .map(|date| date.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "N/A".to_string());
        writeln!(
            out,
            "{} | {} | {}",
            self.line_item.description,
            service_date,
            format_money(self.line_item.amount)
        )?;
        writeln!(out, "Total: {}", format_money(self.total))?;
        writeln!(out)?;
        writeln!(out, "Thank you for your business!")
    }
}
