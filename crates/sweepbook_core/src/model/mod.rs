//! Domain records for households, jobs, supplies and billing.
//!
//! # Responsibility
//! - Define the canonical shapes persisted under each store key.
//! - Keep the wire names stable (`camelCase`) so stored documents survive
//!   rebuilds without migration.
//!
//! # Invariants
//! - Every record carries an opaque string `id`, assigned once at creation.
//! - Cross-record relations are by id only; nothing is shared by reference.

pub mod appointment;
pub mod business;
pub mod customer;
pub mod inventory;
pub mod invoice;

use uuid::Uuid;

/// Opaque identifier shared by every record kind.
///
/// Freshly created records get UUID v4 text; imported fixtures may carry any
/// non-empty string.
pub type EntityId = String;

/// Generates a fresh, never-reused identifier.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Records addressable by their stable id.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),+ $(,)?) => {
        $(impl Identified for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

impl_identified!(
    customer::Customer,
    appointment::Appointment,
    inventory::InventoryItem,
    invoice::Invoice,
);
