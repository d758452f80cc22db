//! Earnings windows for the dashboard snapshot.
//!
//! Weeks start on Monday. "Potential" covers the Monday-Friday working week
//! and counts scheduled jobs as well as completed ones.

use super::pricing::total_price;
use crate::model::appointment::{Appointment, AppointmentStatus};
use chrono::{Datelike, Days, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarningsSummary {
    /// Completed jobs dated today.
    pub today: f64,
    /// Completed jobs from this week's Monday through today.
    pub week_to_date: f64,
    /// Completed or scheduled jobs from Monday through Friday.
    pub week_potential: f64,
}

/// Monday on or before `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let offset = u64::from(today.weekday().num_days_from_monday());
    today - Days::new(offset)
}

/// Friday of the week containing `today` (may precede `today` on weekends).
pub fn week_friday(today: NaiveDate) -> NaiveDate {
    week_start(today) + Days::new(4)
}

pub fn earnings_summary(today: NaiveDate, appointments: &[Appointment]) -> EarningsSummary {
    let monday = week_start(today);
    let friday = week_friday(today);

    EarningsSummary {
        today: sum_where(appointments, |appt| {
            appt.date == today && appt.status == AppointmentStatus::Completed
        }),
        week_to_date: sum_where(appointments, |appt| {
            (monday..=today).contains(&appt.date) && appt.status == AppointmentStatus::Completed
        }),
        week_potential: sum_where(appointments, |appt| {
            (monday..=friday).contains(&appt.date)
                && matches!(
                    appt.status,
                    AppointmentStatus::Completed | AppointmentStatus::Scheduled
                )
        }),
    }
}

fn sum_where(appointments: &[Appointment], keep: impl Fn(&Appointment) -> bool) -> f64 {
    total_price(appointments.iter().filter(|appt| keep(appt)))
}
