//! Invoice due-date checks.
//!
//! Nothing flips an invoice to `Overdue` automatically; these helpers only
//! report which invoices a user may want to mark.

use crate::model::invoice::{Invoice, InvoiceStatus};
use chrono::{Days, NaiveDate};

/// Days between issue and due date for generated invoices.
pub const PAYMENT_TERM_DAYS: u64 = 30;

pub fn due_date_for(issue_date: NaiveDate) -> NaiveDate {
    issue_date + Days::new(PAYMENT_TERM_DAYS)
}

/// Unpaid and due strictly before `today`.
pub fn is_past_due(invoice: &Invoice, today: NaiveDate) -> bool {
    invoice.status != InvoiceStatus::Paid && invoice.due_date < today
}

pub fn past_due_invoices(invoices: &[Invoice], today: NaiveDate) -> Vec<&Invoice> {
    invoices
        .iter()
        .filter(|invoice| is_past_due(invoice, today))
        .collect()
}

/// Sum of invoice amounts not yet paid.
pub fn outstanding_total(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|invoice| invoice.status != InvoiceStatus::Paid)
        .map(|invoice| invoice.amount)
        .sum()
}
