//! Cleaning-supply stock records.

use super::EntityId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: u32,
    /// Item counts as low stock at or below this quantity.
    pub low_stock_threshold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_location: Option<String>,
    /// Unit cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewInventoryItem {
    pub name: String,
    pub quantity: u32,
    pub low_stock_threshold: u32,
    pub purchase_location: Option<String>,
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

impl NewInventoryItem {
    pub fn new(name: impl Into<String>, quantity: u32, low_stock_threshold: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            low_stock_threshold,
            ..Self::default()
        }
    }

    pub fn into_item(self, id: EntityId) -> InventoryItem {
        InventoryItem {
            id,
            name: self.name,
            quantity: self.quantity,
            low_stock_threshold: self.low_stock_threshold,
            purchase_location: self.purchase_location,
            cost: self.cost,
            notes: self.notes,
        }
    }
}

impl InventoryItem {
    /// Applies a +/- adjustment, clamping at zero.
    pub fn adjust_quantity(&mut self, delta: i64) {
        let next = i64::from(self.quantity).saturating_add(delta);
        self.quantity = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
    }
}
