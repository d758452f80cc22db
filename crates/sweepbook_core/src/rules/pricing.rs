//! Job and invoice amount rules.
//!
//! The two hourly fallbacks differ: a job with no hour estimate is worth 0 on
//! dashboards but invoices as one hour. Keep them separate until the intended
//! behavior is confirmed.

use crate::model::appointment::{Appointment, BillingType};

/// Hours assumed for an hourly job without an estimate, for display totals.
pub const PRICE_FALLBACK_HOURS: f64 = 0.0;
/// Hours billed for an hourly job without an estimate.
pub const INVOICE_FALLBACK_HOURS: f64 = 1.0;

/// Price shown for a job.
pub fn appointment_price(appointment: &Appointment) -> f64 {
    match appointment.billing_type {
        BillingType::Fixed => appointment.amount,
        BillingType::Hourly => {
            appointment.amount * appointment.estimated_hours.unwrap_or(PRICE_FALLBACK_HOURS)
        }
    }
}

/// Amount snapshotted onto an invoice generated from `appointment`.
pub fn invoice_amount(appointment: &Appointment) -> f64 {
    match appointment.billing_type {
        BillingType::Fixed => appointment.amount,
        BillingType::Hourly => {
            appointment.amount * appointment.estimated_hours.unwrap_or(INVOICE_FALLBACK_HOURS)
        }
    }
}

/// Sums [`appointment_price`] over `appointments`.
pub fn total_price<'a>(appointments: impl IntoIterator<Item = &'a Appointment>) -> f64 {
    appointments.into_iter().map(appointment_price).sum()
}

/// Formats an amount as dollars with two decimals, e.g. `$150.00`.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::{appointment_price, format_money, invoice_amount};
    use crate::model::appointment::{BillingType, NewAppointment};
    use chrono::NaiveDate;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
    }

    #[test]
    fn fixed_price_ignores_estimated_hours() {
        let mut appt = NewAppointment::fixed("c", "l", day(), 150.0).into_appointment("a".into());
        assert_eq!(appointment_price(&appt), 150.0);

        appt.estimated_hours = Some(3.0);
        assert_eq!(appointment_price(&appt), 150.0);
        assert_eq!(invoice_amount(&appt), 150.0);
    }

    #[test]
    fn hourly_price_multiplies_rate_by_hours() {
        let appt =
            NewAppointment::hourly("c", "l", day(), 50.0, Some(4.0)).into_appointment("a".into());
        assert_eq!(appt.billing_type, BillingType::Hourly);
        assert_eq!(appointment_price(&appt), 200.0);
        assert_eq!(invoice_amount(&appt), 200.0);
    }

    #[test]
    fn hourly_without_hours_prices_zero_but_invoices_one_hour() {
        let appt = NewAppointment::hourly("c", "l", day(), 45.0, None).into_appointment("a".into());
        assert_eq!(appointment_price(&appt), 0.0);
        assert_eq!(invoice_amount(&appt), 45.0);
    }

    #[test]
    fn money_uses_two_decimals() {
        assert_eq!(format_money(150.0), "$150.00");
        assert_eq!(format_money(12.5), "$12.50");
    }
}
