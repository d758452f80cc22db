//! Month grid layout for the appointment calendar.
//!
//! # Invariants
//! - Rows are Sunday-first and always hold exactly seven days.
//! - The grid spans the Sunday on/before the 1st through the Saturday
//!   on/after the last day of the month.

use crate::model::appointment::Appointment;
use chrono::{Datelike, Days, NaiveDate};
use std::collections::HashMap;

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    /// False for leading/trailing padding days.
    pub in_current_month: bool,
    pub is_today: bool,
    /// Jobs dated on this day, in stored order.
    pub appointments: Vec<&'a Appointment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth<'a> {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<CalendarDay<'a>>>,
}

impl<'a> CalendarMonth<'a> {
    /// Header text such as `March 2024`.
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_default()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay<'a>> {
        self.weeks.iter().flatten()
    }
}

/// Builds the grid for `year`/`month` (1-based).
///
/// Returns `None` for an out-of-range month.
pub fn month_grid<'a>(
    year: i32,
    month: u32,
    today: NaiveDate,
    appointments: &'a [Appointment],
) -> Option<CalendarMonth<'a>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;

    let start = first - Days::new(u64::from(first.weekday().num_days_from_sunday()));
    let end = last + Days::new(u64::from(6 - last.weekday().num_days_from_sunday()));

    let mut by_date: HashMap<NaiveDate, Vec<&'a Appointment>> = HashMap::new();
    for appointment in appointments {
        if (start..=end).contains(&appointment.date) {
            by_date.entry(appointment.date).or_default().push(appointment);
        }
    }

    let days: Vec<CalendarDay<'a>> = start
        .iter_days()
        .take_while(|date| *date <= end)
        .map(|date| CalendarDay {
            date,
            in_current_month: date.month() == month && date.year() == year,
            is_today: date == today,
            appointments: by_date.remove(&date).unwrap_or_default(),
        })
        .collect();

    let weeks = days
        .chunks(DAYS_PER_WEEK)
        .map(<[CalendarDay<'a>]>::to_vec)
        .collect();

    Some(CalendarMonth { year, month, weeks })
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{month_grid, next_month, previous_month};
    use crate::model::appointment::NewAppointment;
    use chrono::{Datelike, NaiveDate, Weekday};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_starting_on_wednesday_pads_to_full_weeks() {
        // May 2024 starts on a Wednesday and ends on a Friday.
        let today = ymd(2024, 5, 15);
        let grid = month_grid(2024, 5, today, &[]).unwrap();

        assert_eq!(grid.weeks.len(), 5);
        assert!(grid.weeks.iter().all(|week| week.len() == 7));

        let first = &grid.weeks[0][0];
        assert_eq!(first.date, ymd(2024, 4, 28));
        assert_eq!(first.date.weekday(), Weekday::Sun);
        assert!(!first.in_current_month);
        assert!(grid.weeks[0][3].in_current_month);

        let last = grid.weeks.last().unwrap().last().unwrap();
        assert_eq!(last.date, ymd(2024, 6, 1));
        assert_eq!(last.date.weekday(), Weekday::Sat);

        assert_eq!(grid.days().filter(|day| day.is_today).count(), 1);
        assert_eq!(grid.title(), "May 2024");
    }

    #[test]
    fn month_already_aligned_has_no_padding() {
        // September 2024 starts on Sunday and ends on Monday.
        let grid = month_grid(2024, 9, ymd(2024, 1, 1), &[]).unwrap();
        assert_eq!(grid.weeks[0][0].date, ymd(2024, 9, 1));
        assert_eq!(grid.weeks.len(), 5);
    }

    #[test]
    fn days_collect_matching_appointments_including_padding() {
        let appointments = vec![
            NewAppointment::fixed("c", "l", ymd(2024, 5, 10), 100.0).into_appointment("a".into()),
            NewAppointment::fixed("c", "l", ymd(2024, 5, 10), 80.0).into_appointment("b".into()),
            NewAppointment::fixed("c", "l", ymd(2024, 4, 29), 60.0).into_appointment("pad".into()),
            NewAppointment::fixed("c", "l", ymd(2024, 7, 1), 60.0).into_appointment("out".into()),
        ];

        let grid = month_grid(2024, 5, ymd(2024, 5, 1), &appointments).unwrap();
        let tenth = grid.days().find(|day| day.date == ymd(2024, 5, 10)).unwrap();
        let ids: Vec<&str> = tenth.appointments.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let padded = grid.days().find(|day| day.date == ymd(2024, 4, 29)).unwrap();
        assert_eq!(padded.appointments.len(), 1);

        let total: usize = grid.days().map(|day| day.appointments.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn invalid_month_yields_none() {
        assert!(month_grid(2024, 13, ymd(2024, 1, 1), &[]).is_none());
        assert!(month_grid(2024, 0, ymd(2024, 1, 1), &[]).is_none());
    }

    #[test]
    fn month_navigation_wraps_years() {
        assert_eq!(previous_month(2024, 1), (2023, 12));
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(next_month(2024, 5), (2024, 6));
    }
}
