use chrono::NaiveDate;
use sweepbook_core::rules::schedule::invoiceable_appointments;
use sweepbook_core::store::{APPOINTMENTS_KEY, BUSINESS_INFO_KEY, CUSTOMERS_KEY, INVOICES_KEY};
use sweepbook_core::{
    AppState, AppointmentStatus, BusinessInfo, Contact, InvoiceStatus, Location,
    MemoryKeyValueStore, NewAppointment, NewCustomer, NewInventoryItem, SeedData,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
}

fn empty_state(backend: &MemoryKeyValueStore) -> AppState<&MemoryKeyValueStore> {
    AppState::load(backend, SeedData::empty())
}

#[test]
fn first_run_uses_fixtures_without_writing_them() {
    let backend = MemoryKeyValueStore::new();
    let state = AppState::load_with_fixtures(&backend, today());

    assert_eq!(state.customers().len(), 3);
    assert_eq!(state.appointments().len(), 3);
    assert_eq!(state.inventory().len(), 4);
    assert_eq!(state.invoices().len(), 2);
    assert_eq!(state.business_info(), &BusinessInfo::default());
    assert!(backend.is_empty());
}

#[test]
fn add_customer_assigns_fresh_id_and_persists() {
    let backend = MemoryKeyValueStore::new();
    let mut state = empty_state(&backend);

    let first = state.add_customer(NewCustomer::new("Doe Residence"));
    let second = state.add_customer(NewCustomer::new("Smith Household"));

    assert_ne!(first, second);
    let ids: Vec<&str> = state.customers().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
    assert!(backend.raw(CUSTOMERS_KEY).unwrap().contains("Smith Household"));
}

#[test]
fn add_customer_enforces_single_primary() {
    let backend = MemoryKeyValueStore::new();
    let mut state = empty_state(&backend);

    let mut draft = NewCustomer::new("Doe Residence");
    draft.contacts = vec![
        Contact::new("John Doe", "Husband", "555-1234", "john@example.com"),
        Contact::new("Jane Doe", "Wife", "555-1235", "jane@example.com"),
    ];
    draft.locations = vec![Location::new("123 Maple St", "Home")];
    let id = state.add_customer(draft);

    let customer = state.customer(&id).unwrap();
    assert!(customer.contacts[0].is_primary);
    assert!(!customer.contacts[1].is_primary);
    assert!(customer.locations[0].is_primary);
}

#[test]
fn update_customer_replaces_in_place() {
    let backend = MemoryKeyValueStore::new();
    let mut state = empty_state(&backend);
    let id = state.add_customer(NewCustomer::new("Doe Residence"));
    state.add_customer(NewCustomer::new("Other"));

    let mut edited = state.customer(&id).unwrap().clone();
    edited.household_name = "Doe Family".to_string();
    edited.cleaning_frequency = "Weekly".to_string();
    assert!(state.update_customer(edited));

    assert_eq!(state.customers().len(), 2);
    let matching: Vec<_> = state.customers().iter().filter(|c| c.id == id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].household_name, "Doe Family");
    assert_eq!(matching[0].cleaning_frequency, "Weekly");
    assert_eq!(state.customers()[0].id, id);
}

#[test]
fn update_and_delete_with_unknown_id_are_silent_noops() {
    let backend = MemoryKeyValueStore::new();
    let mut state = AppState::load_with_fixtures(&backend, today());

    let mut ghost = state.customer("cust1").unwrap().clone();
    ghost.id = "ghost".to_string();
    ghost.household_name = "Nobody".to_string();

    assert!(!state.update_customer(ghost));
    assert!(!state.delete_appointment("ghost"));
    assert!(!state.delete_inventory_item("ghost"));
    assert!(!state.set_invoice_status("ghost", InvoiceStatus::Paid));
    assert!(!state.adjust_inventory_quantity("ghost", 3));

    assert_eq!(state.customers().len(), 3);
    assert!(state.customers().iter().all(|c| c.household_name != "Nobody"));
    assert_eq!(state.appointments().len(), 3);
    assert_eq!(state.inventory().len(), 4);
}

#[test]
fn delete_inventory_item_removes_it() {
    let backend = MemoryKeyValueStore::new();
    let mut state = AppState::load_with_fixtures(&backend, today());

    assert!(state.delete_inventory_item("inv2"));
    assert!(state.inventory_item("inv2").is_none());
    assert_eq!(state.inventory().len(), 3);

    assert!(!state.delete_inventory_item("inv2"));
    assert_eq!(state.inventory().len(), 3);
}

#[test]
fn adjust_inventory_quantity_clamps_at_zero() {
    let backend = MemoryKeyValueStore::new();
    let mut state = empty_state(&backend);
    let id = state.add_inventory_item(NewInventoryItem::new("Glass Cleaner", 2, 3));

    assert!(state.adjust_inventory_quantity(&id, 1));
    assert_eq!(state.inventory_item(&id).unwrap().quantity, 3);

    assert!(state.adjust_inventory_quantity(&id, -10));
    assert_eq!(state.inventory_item(&id).unwrap().quantity, 0);
}

#[test]
fn create_invoice_for_fixed_appointment_snapshots_amount() {
    let backend = MemoryKeyValueStore::new();
    let mut state = empty_state(&backend);
    let mut draft = NewAppointment::fixed("cust1", "loc1-1", today(), 150.0);
    draft.status = AppointmentStatus::Completed;
    let appt_id = state.add_appointment(draft);

    let invoice_id = state
        .create_invoice_for_appointment_on(&appt_id, today())
        .unwrap();

    let invoice = state.invoice(&invoice_id).unwrap().clone();
    assert_eq!(invoice.customer_id, "cust1");
    assert_eq!(invoice.appointment_id, appt_id);
    assert_eq!(invoice.amount, 150.0);
    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert_eq!(invoice.issue_date, today());
    assert_eq!(invoice.due_date, NaiveDate::from_ymd_opt(2024, 4, 5).unwrap());
    assert!(backend.raw(INVOICES_KEY).unwrap().contains(&invoice_id));

    // Later edits to the job do not change the issued amount.
    let mut appointment = state.appointment(&appt_id).unwrap().clone();
    appointment.amount = 999.0;
    assert!(state.update_appointment(appointment));
    assert_eq!(state.invoice(&invoice_id).unwrap().amount, 150.0);
}

#[test]
fn create_invoice_for_hourly_appointment_without_hours_bills_one_hour() {
    let backend = MemoryKeyValueStore::new();
    let mut state = empty_state(&backend);
    let appt_id = state.add_appointment(NewAppointment::hourly("c", "l", today(), 45.0, None));

    let invoice_id = state
        .create_invoice_for_appointment_on(&appt_id, today())
        .unwrap();

    assert_eq!(state.invoice(&invoice_id).unwrap().amount, 45.0);
}

#[test]
fn create_invoice_for_hourly_appointment_multiplies_hours() {
    let backend = MemoryKeyValueStore::new();
    let mut state = empty_state(&backend);
    let appt_id =
        state.add_appointment(NewAppointment::hourly("c", "l", today(), 50.0, Some(4.0)));

    let invoice_id = state
        .create_invoice_for_appointment_on(&appt_id, today())
        .unwrap();

    assert_eq!(state.invoice(&invoice_id).unwrap().amount, 200.0);
}

#[test]
fn create_invoice_for_unknown_appointment_does_nothing() {
    let backend = MemoryKeyValueStore::new();
    let mut state = empty_state(&backend);

    assert!(state
        .create_invoice_for_appointment_on("missing", today())
        .is_none());
    assert!(state.invoices().is_empty());
    assert!(backend.raw(INVOICES_KEY).is_none());
}

#[test]
fn container_does_not_guard_duplicate_invoices_but_filter_does() {
    let backend = MemoryKeyValueStore::new();
    let mut state = AppState::load_with_fixtures(&backend, today());

    // appt3 is completed and already invoiced by the fixtures.
    assert!(invoiceable_appointments(state.appointments(), state.invoices()).is_empty());

    state.create_invoice_for_appointment_on("appt3", today()).unwrap();
    let for_appt3 = state
        .invoices()
        .iter()
        .filter(|invoice| invoice.appointment_id == "appt3")
        .count();
    assert_eq!(for_appt3, 2);
}

#[test]
fn set_invoice_status_allows_any_transition() {
    let backend = MemoryKeyValueStore::new();
    let mut state = AppState::load_with_fixtures(&backend, today());

    assert!(state.set_invoice_status("inv1", InvoiceStatus::Overdue));
    assert_eq!(state.invoice("inv1").unwrap().status, InvoiceStatus::Overdue);
    assert!(state.set_invoice_status("inv1", InvoiceStatus::Draft));
    assert_eq!(state.invoice("inv1").unwrap().status, InvoiceStatus::Draft);
}

#[test]
fn appointment_status_can_be_set_directly() {
    let backend = MemoryKeyValueStore::new();
    let mut state = AppState::load_with_fixtures(&backend, today());

    let mut done = state.appointment("appt3").unwrap().clone();
    assert_eq!(done.status, AppointmentStatus::Completed);
    done.status = AppointmentStatus::Scheduled;
    assert!(state.update_appointment(done));
    assert_eq!(
        state.appointment("appt3").unwrap().status,
        AppointmentStatus::Scheduled
    );
    assert!(backend.raw(APPOINTMENTS_KEY).is_some());
}

#[test]
fn business_info_is_replaced_and_persisted() {
    let backend = MemoryKeyValueStore::new();
    let mut state = empty_state(&backend);

    state.update_business_info(BusinessInfo {
        name: "Sparkle & Co".to_string(),
        address: "1 Main St".to_string(),
        logo: String::new(),
    });

    assert_eq!(state.business_info().name, "Sparkle & Co");
    let reloaded = AppState::load(&backend, SeedData::empty());
    assert_eq!(reloaded.business_info().name, "Sparkle & Co");
    assert!(backend.raw(BUSINESS_INFO_KEY).unwrap().contains("Sparkle"));
}

#[test]
fn dashboard_counts_reflect_fixtures() {
    let backend = MemoryKeyValueStore::new();
    let state = AppState::load_with_fixtures(&backend, today());

    let summary = state.dashboard(today());
    assert_eq!(summary.upcoming_jobs, 2);
    assert_eq!(summary.active_clients, 3);
    assert_eq!(summary.low_stock_items, 1);
}
