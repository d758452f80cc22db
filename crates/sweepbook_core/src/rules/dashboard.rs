//! Dashboard headline numbers.

use super::earnings::{earnings_summary, EarningsSummary};
use super::schedule::upcoming_count;
use super::stock::is_low_stock;
use crate::model::appointment::Appointment;
use crate::model::customer::Customer;
use crate::model::inventory::InventoryItem;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSummary {
    /// Scheduled jobs dated today or later (uncapped).
    pub upcoming_jobs: usize,
    pub active_clients: usize,
    pub low_stock_items: usize,
    pub earnings: EarningsSummary,
}

pub fn dashboard_summary(
    today: NaiveDate,
    customers: &[Customer],
    appointments: &[Appointment],
    inventory: &[InventoryItem],
) -> DashboardSummary {
    DashboardSummary {
        upcoming_jobs: upcoming_count(today, appointments),
        active_clients: customers.len(),
        low_stock_items: inventory.iter().filter(|item| is_low_stock(item)).count(),
        earnings: earnings_summary(today, appointments),
    }
}
