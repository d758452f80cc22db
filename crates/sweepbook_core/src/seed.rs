//! First-run fixture data.
//!
//! Used as the fallback for every store key that has never been written, so
//! a fresh install opens with a small, realistic book of business. Dates are
//! relative to the `today` passed in.

use crate::model::appointment::{Appointment, AppointmentStatus, BillingType};
use crate::model::business::BusinessInfo;
use crate::model::customer::{Contact, Customer, Kid, Location, Pet};
use crate::model::inventory::InventoryItem;
use crate::model::invoice::{Invoice, InvoiceStatus};
use chrono::{Days, NaiveDate};

/// Initial value for each persisted collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedData {
    pub customers: Vec<Customer>,
    pub appointments: Vec<Appointment>,
    pub inventory: Vec<InventoryItem>,
    pub invoices: Vec<Invoice>,
    pub business_info: BusinessInfo,
}

impl SeedData {
    /// No records; default business profile.
    pub fn empty() -> Self {
        Self {
            customers: Vec::new(),
            appointments: Vec::new(),
            inventory: Vec::new(),
            invoices: Vec::new(),
            business_info: BusinessInfo::default(),
        }
    }

    /// Sample households, jobs, supplies and invoices.
    pub fn fixtures(today: NaiveDate) -> Self {
        Self {
            customers: fixture_customers(),
            appointments: fixture_appointments(today),
            inventory: fixture_inventory(),
            invoices: fixture_invoices(today),
            business_info: BusinessInfo::default(),
        }
    }
}

fn contact(
    id: &str,
    name: &str,
    relationship: &str,
    phone: &str,
    email: &str,
    primary: bool,
) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        relationship: relationship.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        is_primary: primary,
    }
}

fn location(id: &str, address: &str, label: &str, primary: bool) -> Location {
    Location {
        id: id.to_string(),
        address: address.to_string(),
        label: label.to_string(),
        is_primary: primary,
    }
}

fn pet(id: &str, kind: &str, notes: &str) -> Pet {
    Pet {
        id: id.to_string(),
        kind: kind.to_string(),
        notes: notes.to_string(),
    }
}

fn fixture_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "cust1".to_string(),
            household_name: "Doe Residence".to_string(),
            cleaning_frequency: "Bi-Weekly".to_string(),
            house_notes: concat!(
                "Please use the side door for entry. ",
                "Be careful with the antique vase in the living room."
            )
            .to_string(),
            contacts: vec![
                contact("cont1-1", "John Doe", "Husband", "555-1234", "john.d@example.com", true),
                contact("cont1-2", "Jane Doe", "Wife", "555-1235", "jane.d@example.com", false),
            ],
            locations: vec![
                location("loc1-1", "123 Maple St, Springfield, IL 62704", "Home", true),
                location("loc1-2", "999 Business Blvd, Springfield, IL 62701", "Office", false),
            ],
            pets: vec![pet(
                "pet1-1",
                "Dog",
                "Friendly Golden Retriever named Max. Sheds a lot.",
            )],
            kids: Vec::new(),
        },
        Customer {
            id: "cust2".to_string(),
            household_name: "Smith Household".to_string(),
            cleaning_frequency: "Monthly".to_string(),
            house_notes: concat!(
                "Allergic to lavender. ",
                "Please use only the unscented products we provide under the sink."
            )
            .to_string(),
            contacts: vec![contact(
                "cont2-1",
                "Jane Smith",
                "Owner",
                "555-5678",
                "jane.s@example.com",
                true,
            )],
            locations: vec![location(
                "loc2-1",
                "456 Oak Ave, Shelbyville, IL 62565",
                "Main House",
                true,
            )],
            pets: vec![
                pet("pet2-1", "Cat", "Shy black cat named Luna. Might hide."),
                pet("pet2-2", "Cat", "Orange tabby named Oliver. Very curious."),
            ],
            kids: vec![Kid {
                id: "kid2-1".to_string(),
                name: "Timmy".to_string(),
                notes: "Age 8. Room is usually messy.".to_string(),
            }],
        },
        Customer {
            id: "cust3".to_string(),
            household_name: "Bob Johnson".to_string(),
            cleaning_frequency: "Weekly".to_string(),
            house_notes: concat!(
                "Key is under the mat. ",
                "Please focus on deep cleaning the kitchen and master bathroom each visit."
            )
            .to_string(),
            contacts: vec![contact(
                "cont3-1",
                "Bob Johnson",
                "Owner",
                "555-8765",
                "bob.j@example.com",
                true,
            )],
            locations: vec![location(
                "loc3-1",
                "789 Pine Ln, Capital City, IL 62701",
                "Home",
                true,
            )],
            pets: Vec::new(),
            kids: Vec::new(),
        },
    ]
}

fn fixture_appointments(today: NaiveDate) -> Vec<Appointment> {
    vec![
        Appointment {
            id: "appt1".to_string(),
            customer_id: "cust1".to_string(),
            location_id: "loc1-1".to_string(),
            date: today,
            time: "09:00 AM".to_string(),
            services: vec!["Standard Clean".to_string()],
            status: AppointmentStatus::Scheduled,
            billing_type: BillingType::Fixed,
            amount: 150.0,
            estimated_hours: None,
            notes: Some("Please focus on the kitchen floors.".to_string()),
        },
        Appointment {
            id: "appt2".to_string(),
            customer_id: "cust2".to_string(),
            location_id: "loc2-1".to_string(),
            date: today + Days::new(2),
            time: "01:00 PM".to_string(),
            services: vec!["Deep Clean".to_string(), "Window Washing".to_string()],
            status: AppointmentStatus::Scheduled,
            billing_type: BillingType::Hourly,
            amount: 50.0,
            estimated_hours: Some(4.0),
            notes: Some("Bring the tall ladder for the high windows.".to_string()),
        },
        Appointment {
            id: "appt3".to_string(),
            customer_id: "cust3".to_string(),
            location_id: "loc3-1".to_string(),
            date: today - Days::new(5),
            time: "11:00 AM".to_string(),
            services: vec!["Standard Clean".to_string()],
            status: AppointmentStatus::Completed,
            billing_type: BillingType::Fixed,
            amount: 120.0,
            estimated_hours: None,
            notes: None,
        },
    ]
}

fn supply(
    id: &str,
    name: &str,
    quantity: u32,
    threshold: u32,
    store: &str,
    cost: f64,
    notes: &str,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity,
        low_stock_threshold: threshold,
        purchase_location: Some(store.to_string()),
        cost: Some(cost),
        notes: Some(notes.to_string()),
    }
}

fn fixture_inventory() -> Vec<InventoryItem> {
    vec![
        supply(
            "inv1",
            "All-Purpose Cleaner",
            5,
            2,
            "Supply Co.",
            12.50,
            "Concentrated, dilute before use.",
        ),
        supply("inv2", "Glass Cleaner", 2, 3, "Amazon", 8.75, "Streak-free formula."),
        supply("inv3", "Microfiber Cloths", 50, 20, "Costco", 25.00, "Pack of 100."),
        supply("inv4", "Trash Bags (Large)", 8, 5, "Home Depot", 15.20, "33-gallon, heavy duty."),
    ]
}

fn fixture_invoices(today: NaiveDate) -> Vec<Invoice> {
    vec![
        Invoice {
            id: "inv1".to_string(),
            customer_id: "cust3".to_string(),
            appointment_id: "appt3".to_string(),
            issue_date: today - Days::new(5),
            due_date: today + Days::new(25),
            amount: 120.0,
            status: InvoiceStatus::Paid,
        },
        Invoice {
            id: "inv2".to_string(),
            customer_id: "cust1".to_string(),
            appointment_id: "appt1".to_string(),
            issue_date: today,
            due_date: today + Days::new(30),
            amount: 150.0,
            status: InvoiceStatus::Draft,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::SeedData;
    use crate::rules::stock::low_stock_items;
    use chrono::NaiveDate;

    #[test]
    fn fixtures_reference_existing_customers_and_locations() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();
        let seed = SeedData::fixtures(today);

        for appointment in &seed.appointments {
            let customer = seed
                .customers
                .iter()
                .find(|customer| customer.id == appointment.customer_id)
                .expect("fixture appointment should reference a fixture customer");
            assert!(customer.location(&appointment.location_id).is_some());
        }
        assert_eq!(low_stock_items(&seed.inventory).len(), 1);
    }
}
