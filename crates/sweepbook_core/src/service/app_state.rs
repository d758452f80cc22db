//! Application state container.
//!
//! # Responsibility
//! - Own the authoritative in-memory collections and the business profile.
//! - Be the only write path: every mutation goes through a method here and
//!   is persisted under its collection's store key.
//!
//! # Invariants
//! - Ids are assigned on add and never reused or changed afterwards.
//! - Collections keep insertion order.
//! - Update/delete of an unknown id leaves the collection unchanged and
//!   reports `false`; it is not an error.
//! - Customers are stored with exactly one primary contact and location.
//! - Storage failures never surface here; see [`PersistentStore`].

use crate::model::appointment::{Appointment, NewAppointment};
use crate::model::business::BusinessInfo;
use crate::model::customer::{Customer, NewCustomer};
use crate::model::inventory::{InventoryItem, NewInventoryItem};
use crate::model::invoice::{Invoice, InvoiceStatus, NewInvoice};
use crate::model::{new_entity_id, EntityId, Identified};
use crate::rules::billing::due_date_for;
use crate::rules::dashboard::{dashboard_summary, DashboardSummary};
use crate::rules::pricing::invoice_amount;
use crate::seed::SeedData;
use crate::store::{
    KeyValueStore, PersistentStore, APPOINTMENTS_KEY, BUSINESS_INFO_KEY, CUSTOMERS_KEY,
    INVENTORY_KEY, INVOICES_KEY,
};
use chrono::{Local, NaiveDate};
use log::{debug, info};

/// Explicitly owned state handed to every view by reference.
pub struct AppState<S: KeyValueStore> {
    store: PersistentStore<S>,
    customers: Vec<Customer>,
    appointments: Vec<Appointment>,
    inventory: Vec<InventoryItem>,
    invoices: Vec<Invoice>,
    business_info: BusinessInfo,
}

fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}

fn replace_by_id<T: Identified>(items: &mut [T], replacement: T) -> bool {
    match items.iter_mut().find(|item| item.id() == replacement.id()) {
        Some(slot) => {
            *slot = replacement;
            true
        }
        None => false,
    }
}

fn remove_by_id<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

fn log_outcome(event: &str, id: &str, matched: bool) {
    if matched {
        info!("event={event} module=state status=ok id={id}");
    } else {
        debug!("event={event} module=state status=noop reason=unknown_id id={id}");
    }
}

impl<S: KeyValueStore> AppState<S> {
    /// Loads every collection from `backend`, using `seed` for keys never
    /// written (or unreadable).
    pub fn load(backend: S, seed: SeedData) -> Self {
        let store = PersistentStore::new(backend);
        let state = Self {
            customers: store.load(CUSTOMERS_KEY, seed.customers),
            appointments: store.load(APPOINTMENTS_KEY, seed.appointments),
            inventory: store.load(INVENTORY_KEY, seed.inventory),
            invoices: store.load(INVOICES_KEY, seed.invoices),
            business_info: store.load(BUSINESS_INFO_KEY, seed.business_info),
            store,
        };
        info!(
            "event=state_load module=state status=ok customers={} appointments={} inventory={} invoices={}",
            state.customers.len(),
            state.appointments.len(),
            state.inventory.len(),
            state.invoices.len()
        );
        state
    }

    /// Loads with first-run fixtures dated around `today`.
    pub fn load_with_fixtures(backend: S, today: NaiveDate) -> Self {
        Self::load(backend, SeedData::fixtures(today))
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn business_info(&self) -> &BusinessInfo {
        &self.business_info
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        find_by_id(&self.customers, id)
    }

    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        find_by_id(&self.appointments, id)
    }

    pub fn inventory_item(&self, id: &str) -> Option<&InventoryItem> {
        find_by_id(&self.inventory, id)
    }

    pub fn invoice(&self, id: &str) -> Option<&Invoice> {
        find_by_id(&self.invoices, id)
    }

    pub fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        dashboard_summary(today, &self.customers, &self.appointments, &self.inventory)
    }

    // Customers

    pub fn add_customer(&mut self, draft: NewCustomer) -> EntityId {
        let id = new_entity_id();
        let mut customer = draft.into_customer(id.clone());
        customer.normalize_primaries();
        self.customers.push(customer);
        self.persist_customers();
        log_outcome("customer_add", &id, true);
        id
    }

    pub fn update_customer(&mut self, mut customer: Customer) -> bool {
        customer.normalize_primaries();
        let id = customer.id.clone();
        let matched = replace_by_id(&mut self.customers, customer);
        self.persist_customers();
        log_outcome("customer_update", &id, matched);
        matched
    }

    pub fn delete_customer(&mut self, id: &str) -> bool {
        let matched = remove_by_id(&mut self.customers, id);
        self.persist_customers();
        log_outcome("customer_delete", id, matched);
        matched
    }

    // Appointments

    pub fn add_appointment(&mut self, draft: NewAppointment) -> EntityId {
        let id = new_entity_id();
        self.appointments.push(draft.into_appointment(id.clone()));
        self.persist_appointments();
        log_outcome("appointment_add", &id, true);
        id
    }

    pub fn update_appointment(&mut self, appointment: Appointment) -> bool {
        let id = appointment.id.clone();
        let matched = replace_by_id(&mut self.appointments, appointment);
        self.persist_appointments();
        log_outcome("appointment_update", &id, matched);
        matched
    }

    pub fn delete_appointment(&mut self, id: &str) -> bool {
        let matched = remove_by_id(&mut self.appointments, id);
        self.persist_appointments();
        log_outcome("appointment_delete", id, matched);
        matched
    }

    // Inventory

    pub fn add_inventory_item(&mut self, draft: NewInventoryItem) -> EntityId {
        let id = new_entity_id();
        self.inventory.push(draft.into_item(id.clone()));
        self.persist_inventory();
        log_outcome("inventory_add", &id, true);
        id
    }

    pub fn update_inventory_item(&mut self, item: InventoryItem) -> bool {
        let id = item.id.clone();
        let matched = replace_by_id(&mut self.inventory, item);
        self.persist_inventory();
        log_outcome("inventory_update", &id, matched);
        matched
    }

    pub fn delete_inventory_item(&mut self, id: &str) -> bool {
        let matched = remove_by_id(&mut self.inventory, id);
        self.persist_inventory();
        log_outcome("inventory_delete", id, matched);
        matched
    }

    /// Adds `delta` to an item's quantity, never going below zero.
    pub fn adjust_inventory_quantity(&mut self, id: &str, delta: i64) -> bool {
        let Some(mut item) = self.inventory_item(id).cloned() else {
            log_outcome("inventory_adjust", id, false);
            return false;
        };
        item.adjust_quantity(delta);
        self.update_inventory_item(item)
    }

    // Invoices

    pub fn add_invoice(&mut self, draft: NewInvoice) -> EntityId {
        let id = new_entity_id();
        self.invoices.push(draft.into_invoice(id.clone()));
        self.persist_invoices();
        log_outcome("invoice_add", &id, true);
        id
    }

    pub fn update_invoice(&mut self, invoice: Invoice) -> bool {
        let id = invoice.id.clone();
        let matched = replace_by_id(&mut self.invoices, invoice);
        self.persist_invoices();
        log_outcome("invoice_update", &id, matched);
        matched
    }

    pub fn delete_invoice(&mut self, id: &str) -> bool {
        let matched = remove_by_id(&mut self.invoices, id);
        self.persist_invoices();
        log_outcome("invoice_delete", id, matched);
        matched
    }

    pub fn set_invoice_status(&mut self, id: &str, status: InvoiceStatus) -> bool {
        let Some(mut invoice) = self.invoice(id).cloned() else {
            log_outcome("invoice_status", id, false);
            return false;
        };
        invoice.status = status;
        self.update_invoice(invoice)
    }

    /// Issues a draft invoice for `appointment_id` dated today (local time).
    pub fn create_invoice_for_appointment(&mut self, appointment_id: &str) -> Option<EntityId> {
        self.create_invoice_for_appointment_on(appointment_id, Local::now().date_naive())
    }

    /// Issues a draft invoice for `appointment_id`, issued `today` and due 30
    /// days later.
    ///
    /// Returns `None` without side effects when the appointment is unknown.
    /// Does not check for an existing invoice on the same appointment;
    /// callers filter with `rules::schedule::invoiceable_appointments`.
    pub fn create_invoice_for_appointment_on(
        &mut self,
        appointment_id: &str,
        today: NaiveDate,
    ) -> Option<EntityId> {
        let Some(appointment) = self.appointment(appointment_id) else {
            debug!(
                "event=invoice_create module=state status=noop reason=unknown_appointment id={appointment_id}"
            );
            return None;
        };

        let draft = NewInvoice {
            customer_id: appointment.customer_id.clone(),
            appointment_id: appointment.id.clone(),
            issue_date: today,
            due_date: due_date_for(today),
            amount: invoice_amount(appointment),
            status: InvoiceStatus::Draft,
        };
        Some(self.add_invoice(draft))
    }

    // Business profile

    pub fn update_business_info(&mut self, info: BusinessInfo) {
        self.business_info = info;
        self.store.save(BUSINESS_INFO_KEY, &self.business_info);
        info!("event=business_info_update module=state status=ok");
    }

    fn persist_customers(&self) {
        self.store.save(CUSTOMERS_KEY, &self.customers);
    }

    fn persist_appointments(&self) {
        self.store.save(APPOINTMENTS_KEY, &self.appointments);
    }

    fn persist_inventory(&self) {
        self.store.save(INVENTORY_KEY, &self.inventory);
    }

    fn persist_invoices(&self) {
        self.store.save(INVOICES_KEY, &self.invoices);
    }
}
