//! Household (customer) records and their nested people, places and pets.
//!
//! # Invariants
//! - After [`Customer::normalize_primaries`], a non-empty `contacts` list has
//!   exactly one primary entry; the same holds for `locations`.
//! - Read paths fall back to the first element when nothing is flagged, so
//!   documents stored before normalization still resolve a primary.

use super::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

/// A person reachable for one household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: EntityId,
    pub name: String,
    /// Free text, e.g. "Owner" or "Wife".
    pub relationship: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub is_primary: bool,
}

/// A service address for one household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: EntityId,
    /// Free text; doubles as the map search query.
    pub address: String,
    /// Short name such as "Home" or "Office".
    pub label: String,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: EntityId,
    /// Serialized as `type`, e.g. "Dog".
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kid {
    pub id: EntityId,
    pub name: String,
    pub notes: String,
}

/// Billing and service entity for one client household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    pub household_name: String,
    /// Free text, e.g. "Bi-Weekly".
    #[serde(default)]
    pub cleaning_frequency: String,
    #[serde(default)]
    pub house_notes: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub kids: Vec<Kid>,
}

/// Customer input before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    pub household_name: String,
    pub cleaning_frequency: String,
    pub house_notes: String,
    pub contacts: Vec<Contact>,
    pub locations: Vec<Location>,
    pub pets: Vec<Pet>,
    pub kids: Vec<Kid>,
}

impl NewCustomer {
    pub fn new(household_name: impl Into<String>) -> Self {
        Self {
            household_name: household_name.into(),
            ..Self::default()
        }
    }

    /// Attaches the stable id, producing the persisted record.
    pub fn into_customer(self, id: EntityId) -> Customer {
        Customer {
            id,
            household_name: self.household_name,
            cleaning_frequency: self.cleaning_frequency,
            house_notes: self.house_notes,
            contacts: self.contacts,
            locations: self.locations,
            pets: self.pets,
            kids: self.kids,
        }
    }
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        relationship: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            relationship: relationship.into(),
            phone: phone.into(),
            email: email.into(),
            is_primary: false,
        }
    }
}

impl Location {
    pub fn new(address: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            address: address.into(),
            label: label.into(),
            is_primary: false,
        }
    }
}

impl Pet {
    pub fn new(kind: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            kind: kind.into(),
            notes: notes.into(),
        }
    }
}

impl Kid {
    pub fn new(name: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            notes: notes.into(),
        }
    }
}

/// Elements of a list where one entry is designated the default.
trait PrimaryFlag {
    fn id(&self) -> &str;
    fn is_primary(&self) -> bool;
    fn set_primary(&mut self, value: bool);
}

impl PrimaryFlag for Contact {
    fn id(&self) -> &str {
        &self.id
    }
    fn is_primary(&self) -> bool {
        self.is_primary
    }
    fn set_primary(&mut self, value: bool) {
        self.is_primary = value;
    }
}

impl PrimaryFlag for Location {
    fn id(&self) -> &str {
        &self.id
    }
    fn is_primary(&self) -> bool {
        self.is_primary
    }
    fn set_primary(&mut self, value: bool) {
        self.is_primary = value;
    }
}

fn resolve_primary<T: PrimaryFlag>(items: &[T]) -> Option<&T> {
    items.iter().find(|item| item.is_primary()).or(items.first())
}

fn normalize_primary<T: PrimaryFlag>(items: &mut [T]) {
    let keep = items
        .iter()
        .position(PrimaryFlag::is_primary)
        .unwrap_or(0);
    for (index, item) in items.iter_mut().enumerate() {
        item.set_primary(index == keep);
    }
}

fn reassign_primary<T: PrimaryFlag>(items: &mut [T], id: &str) -> bool {
    if !items.iter().any(|item| item.id() == id) {
        return false;
    }
    for item in items.iter_mut() {
        let is_target = item.id() == id;
        item.set_primary(is_target);
    }
    true
}

impl Customer {
    /// Flagged primary contact, else the first contact.
    pub fn primary_contact(&self) -> Option<&Contact> {
        resolve_primary(&self.contacts)
    }

    /// Flagged primary location, else the first location.
    pub fn primary_location(&self) -> Option<&Location> {
        resolve_primary(&self.locations)
    }

    pub fn location(&self, location_id: &str) -> Option<&Location> {
        self.locations
            .iter()
            .find(|location| location.id == location_id)
    }

    /// Enforces exactly one primary per non-empty contact/location list.
    ///
    /// The first flagged element wins; with none flagged the first element
    /// is promoted.
    pub fn normalize_primaries(&mut self) {
        normalize_primary(&mut self.contacts);
        normalize_primary(&mut self.locations);
    }

    /// Makes `contact_id` the only primary contact.
    ///
    /// Returns `false` and leaves every flag untouched when the id is unknown.
    pub fn set_primary_contact(&mut self, contact_id: &str) -> bool {
        reassign_primary(&mut self.contacts, contact_id)
    }

    /// Makes `location_id` the only primary location.
    pub fn set_primary_location(&mut self, location_id: &str) -> bool {
        reassign_primary(&mut self.locations, location_id)
    }
}
