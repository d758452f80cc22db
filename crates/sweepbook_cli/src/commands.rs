//! Subcommand definitions and handlers.

use crate::error::CliError;
use chrono::{Datelike, NaiveDate};
use clap::Subcommand;
use log::info;
use std::io::Write;
use sweepbook_core::links::{map_search_url, mailto_uri, tel_uri};
use sweepbook_core::rules::billing::{is_past_due, outstanding_total};
use sweepbook_core::rules::calendar::{month_grid, CalendarMonth, WEEKDAY_LABELS};
use sweepbook_core::rules::pricing::{appointment_price, format_money};
use sweepbook_core::rules::schedule::{
    appointments_by_date_desc, invoiceable_appointments, partition_customer_appointments,
    upcoming_appointments, UPCOMING_LIMIT,
};
use sweepbook_core::rules::stock::is_low_stock;
use sweepbook_core::{Appointment, AppState, InvoiceDocument, InvoiceStatus, KeyValueStore};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Headline counts, earnings and the next upcoming jobs
    Dashboard,
    /// Month grid with jobs per day
    Calendar {
        /// Month to show; defaults to the current month
        #[arg(value_name = "YYYY-MM")]
        month: Option<String>,
    },
    /// List households
    Customers,
    /// Household detail with upcoming and past jobs
    Customer { id: String },
    /// Delete a household
    CustomerDelete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// List jobs, newest first
    Appointments,
    /// Delete a job
    AppointmentDelete { id: String },
    /// List supplies with low-stock flags
    Inventory,
    /// Add or remove units of a supply
    InventoryAdjust {
        id: String,
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    /// Delete a supply
    InventoryDelete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// List invoices and completed jobs awaiting one
    Invoices,
    /// Print an invoice
    Invoice { id: String },
    /// Issue a draft invoice for a job
    InvoiceCreate { appointment_id: String },
    /// Set an invoice's status (draft, sent, paid, overdue)
    InvoiceStatus { id: String, status: InvoiceStatus },
}

pub fn run<S: KeyValueStore>(
    state: &mut AppState<S>,
    command: Command,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Dashboard => dashboard(state, today, out),
        Command::Calendar { month } => {
            let (year, month) = match month {
                Some(raw) => parse_month(&raw)?,
                None => (today.year(), today.month()),
            };
            let grid = month_grid(year, month, today, state.appointments())
                .ok_or_else(|| CliError::InvalidMonth(format!("{year:04}-{month:02}")))?;
            write_calendar(&grid, out)
        }
        Command::Customers => customers(state, out),
        Command::Customer { id } => customer(state, &id, today, out),
        Command::CustomerDelete { id, yes } => {
            confirm("delete customer", &id, yes)?;
            if !state.delete_customer(&id) {
                return Err(not_found("customer", id));
            }
            writeln!(out, "deleted customer {id}")?;
            Ok(())
        }
        Command::Appointments => appointments(state, out),
        Command::AppointmentDelete { id } => {
            if !state.delete_appointment(&id) {
                return Err(not_found("appointment", id));
            }
            writeln!(out, "deleted appointment {id}")?;
            Ok(())
        }
        Command::Inventory => inventory(state, out),
        Command::InventoryAdjust { id, delta } => {
            if !state.adjust_inventory_quantity(&id, delta) {
                return Err(not_found("inventory item", id));
            }
            if let Some(item) = state.inventory_item(&id) {
                writeln!(out, "{}: {}", item.name, item.quantity)?;
            }
            Ok(())
        }
        Command::InventoryDelete { id, yes } => {
            confirm("delete inventory item", &id, yes)?;
            if !state.delete_inventory_item(&id) {
                return Err(not_found("inventory item", id));
            }
            writeln!(out, "deleted inventory item {id}")?;
            Ok(())
        }
        Command::Invoices => invoices(state, today, out),
        Command::Invoice { id } => {
            let document =
                InvoiceDocument::build(state, &id).ok_or_else(|| not_found("invoice", id))?;
            write!(out, "{}", document.render_text())?;
            Ok(())
        }
        Command::InvoiceCreate { appointment_id } => {
            let invoice_id = state
                .create_invoice_for_appointment_on(&appointment_id, today)
                .ok_or_else(|| not_found("appointment", appointment_id))?;
            info!("event=cli_invoice_create module=cli status=ok invoice_id={invoice_id}");
            writeln!(out, "created invoice {invoice_id}")?;
            Ok(())
        }
        Command::InvoiceStatus { id, status } => {
            if !state.set_invoice_status(&id, status) {
                return Err(not_found("invoice", id));
            }
            writeln!(out, "invoice {id} is now {status}")?;
            Ok(())
        }
    }
}

fn not_found(kind: &'static str, id: String) -> CliError {
    CliError::NotFound { kind, id }
}

fn confirm(action: &'static str, id: &str, confirmed: bool) -> Result<(), CliError> {
    if confirmed {
        Ok(())
    } else {
        Err(CliError::ConfirmationRequired {
            action,
            id: id.to_string(),
        })
    }
}

/// Parses `YYYY-MM` into `(year, month)`; the month range is checked later.
fn parse_month(raw: &str) -> Result<(i32, u32), CliError> {
    let invalid = || CliError::InvalidMonth(raw.to_string());
    let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    Ok((year, month))
}

fn customer_name<S: KeyValueStore>(state: &AppState<S>, customer_id: &str) -> String {
    state
        .customer(customer_id)
        .map(|customer| customer.household_name.clone())
        .unwrap_or_else(|| "Unknown customer".to_string())
}

fn write_job_line<S: KeyValueStore>(
    state: &AppState<S>,
    appointment: &Appointment,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    writeln!(
        out,
        "  {} {} {} | {} | {} | {} [{}]",
        appointment.date,
        appointment.time,
        appointment.id,
        customer_name(state, &appointment.customer_id),
        appointment.services_label(),
        format_money(appointment_price(appointment)),
        appointment.status
    )?;
    Ok(())
}

fn dashboard<S: KeyValueStore>(
    state: &AppState<S>,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let summary = state.dashboard(today);
    writeln!(out, "Upcoming jobs:   {}", summary.upcoming_jobs)?;
    writeln!(out, "Active clients:  {}", summary.active_clients)?;
    writeln!(out, "Low stock items: {}", summary.low_stock_items)?;
    writeln!(out)?;
    writeln!(out, "Today:          {}", format_money(summary.earnings.today))?;
    writeln!(
        out,
        "Week to date:   {}",
        format_money(summary.earnings.week_to_date)
    )?;
    writeln!(
        out,
        "Week potential: {}",
        format_money(summary.earnings.week_potential)
    )?;
    writeln!(out)?;
    writeln!(out, "Next jobs:")?;
    let upcoming = upcoming_appointments(today, state.appointments(), UPCOMING_LIMIT);
    if upcoming.is_empty() {
        writeln!(out, "  none scheduled")?;
    }
    for appointment in upcoming {
        write_job_line(state, appointment, out)?;
    }
    Ok(())
}

fn write_calendar(grid: &CalendarMonth<'_>, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "{}", grid.title())?;
    for label in WEEKDAY_LABELS {
        write!(out, "{label:>6}")?;
    }
    writeln!(out)?;
    for week in &grid.weeks {
        for day in week {
            let marker = if day.is_today { '*' } else { ' ' };
            let cell = if day.in_current_month {
                format!("{:>2}{marker}", day.date.day())
            } else {
                format!("..{marker}")
            };
            let jobs = match day.appointments.len() {
                0 => String::new(),
                count => format!("+{count}"),
            };
            write!(out, "{cell:>4}{jobs:<2}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn customers<S: KeyValueStore>(state: &AppState<S>, out: &mut dyn Write) -> Result<(), CliError> {
    for customer in state.customers() {
        let contact = customer
            .primary_contact()
            .map(|contact| contact.name.as_str())
            .unwrap_or("-");
        writeln!(
            out,
            "{} | {} | {} | {}",
            customer.id, customer.household_name, contact, customer.cleaning_frequency
        )?;
    }
    Ok(())
}

fn customer<S: KeyValueStore>(
    state: &AppState<S>,
    id: &str,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let customer = state
        .customer(id)
        .ok_or_else(|| not_found("customer", id.to_string()))?;

    writeln!(out, "{} ({})", customer.household_name, customer.cleaning_frequency)?;
    if !customer.house_notes.is_empty() {
        writeln!(out, "Notes: {}", customer.house_notes)?;
    }
    writeln!(out, "Contacts:")?;
    for contact in &customer.contacts {
        let primary = if contact.is_primary { " (primary)" } else { "" };
        writeln!(
            out,
            "  {} - {}{primary} {} {}",
            contact.name,
            contact.relationship,
            tel_uri(&contact.phone),
            mailto_uri(&contact.email)
        )?;
    }
    writeln!(out, "Locations:")?;
    for location in &customer.locations {
        let primary = if location.is_primary { " (primary)" } else { "" };
        writeln!(out, "  {}{primary}: {}", location.label, location.address)?;
        writeln!(out, "    {}", map_search_url(&location.address))?;
    }
    for pet in &customer.pets {
        writeln!(out, "Pet: {} - {}", pet.kind, pet.notes)?;
    }
    for kid in &customer.kids {
        writeln!(out, "Kid: {} - {}", kid.name, kid.notes)?;
    }

    let jobs = partition_customer_appointments(&customer.id, today, state.appointments());
    writeln!(out, "Upcoming:")?;
    for appointment in jobs.upcoming {
        write_job_line(state, appointment, out)?;
    }
    writeln!(out, "Past:")?;
    for appointment in jobs.past {
        write_job_line(state, appointment, out)?;
    }
    Ok(())
}

fn appointments<S: KeyValueStore>(
    state: &AppState<S>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    for appointment in appointments_by_date_desc(state.appointments()) {
        write_job_line(state, appointment, out)?;
    }
    Ok(())
}

fn inventory<S: KeyValueStore>(state: &AppState<S>, out: &mut dyn Write) -> Result<(), CliError> {
    for item in state.inventory() {
        let flag = if is_low_stock(item) { " LOW" } else { "" };
        writeln!(
            out,
            "{} | {} | {} (min {}){flag}",
            item.id, item.name, item.quantity, item.low_stock_threshold
        )?;
    }
    Ok(())
}

fn invoices<S: KeyValueStore>(
    state: &AppState<S>,
    today: NaiveDate,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    for invoice in state.invoices() {
        let past_due = if is_past_due(invoice, today) {
            " PAST DUE"
        } else {
            ""
        };
        writeln!(
            out,
            "{} | {} | {} | due {} | {}{past_due}",
            invoice.id,
            customer_name(state, &invoice.customer_id),
            format_money(invoice.amount),
            invoice.due_date,
            invoice.status
        )?;
    }
    writeln!(
        out,
        "Outstanding: {}",
        format_money(outstanding_total(state.invoices()))
    )?;

    let ready = invoiceable_appointments(state.appointments(), state.invoices());
    if !ready.is_empty() {
        writeln!(out, "Completed jobs without an invoice:")?;
        for appointment in ready {
            write_job_line(state, appointment, out)?;
        }
    }
    Ok(())
}
