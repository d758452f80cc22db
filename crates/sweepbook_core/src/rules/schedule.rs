//! Appointment ordering and partitioning for list views.
//!
//! Sorts are stable: jobs on the same date keep their stored order.

use crate::model::appointment::{Appointment, AppointmentStatus};
use crate::model::invoice::Invoice;
use chrono::NaiveDate;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Jobs shown in the dashboard's upcoming list.
pub const UPCOMING_LIMIT: usize = 5;

fn is_upcoming(appointment: &Appointment, today: NaiveDate) -> bool {
    appointment.date >= today && appointment.status == AppointmentStatus::Scheduled
}

/// Scheduled jobs dated today or later, soonest first, at most `limit`.
pub fn upcoming_appointments(
    today: NaiveDate,
    appointments: &[Appointment],
    limit: usize,
) -> Vec<&Appointment> {
    let mut upcoming: Vec<&Appointment> = appointments
        .iter()
        .filter(|appt| is_upcoming(appt, today))
        .collect();
    upcoming.sort_by_key(|appt| appt.date);
    upcoming.truncate(limit);
    upcoming
}

pub fn upcoming_count(today: NaiveDate, appointments: &[Appointment]) -> usize {
    appointments
        .iter()
        .filter(|appt| is_upcoming(appt, today))
        .count()
}

/// One household's jobs split for the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerAppointments<'a> {
    /// Scheduled and not yet past, ascending by date.
    pub upcoming: Vec<&'a Appointment>,
    /// Everything else (including cancelled and stale scheduled jobs),
    /// descending by date.
    pub past: Vec<&'a Appointment>,
}

pub fn partition_customer_appointments<'a>(
    customer_id: &str,
    today: NaiveDate,
    appointments: &'a [Appointment],
) -> CustomerAppointments<'a> {
    let (mut upcoming, mut past): (Vec<&Appointment>, Vec<&Appointment>) = appointments
        .iter()
        .filter(|appt| appt.customer_id == customer_id)
        .partition(|appt| is_upcoming(appt, today));
    upcoming.sort_by_key(|appt| appt.date);
    past.sort_by_key(|appt| Reverse(appt.date));
    CustomerAppointments { upcoming, past }
}

/// All jobs, newest date first.
pub fn appointments_by_date_desc(appointments: &[Appointment]) -> Vec<&Appointment> {
    let mut sorted: Vec<&Appointment> = appointments.iter().collect();
    sorted.sort_by_key(|appt| Reverse(appt.date));
    sorted
}

/// Completed jobs not yet referenced by any invoice.
///
/// This is the caller-side filter that keeps one invoice per appointment.
pub fn invoiceable_appointments<'a>(
    appointments: &'a [Appointment],
    invoices: &[Invoice],
) -> Vec<&'a Appointment> {
    let invoiced: HashSet<&str> = invoices
        .iter()
        .map(|invoice| invoice.appointment_id.as_str())
        .collect();
    appointments
        .iter()
        .filter(|appt| appt.status == AppointmentStatus::Completed)
        .filter(|appt| !invoiced.contains(appt.id.as_str()))
        .collect()
}
