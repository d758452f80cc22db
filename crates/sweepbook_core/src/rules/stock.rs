//! Low-stock detection.

use crate::model::inventory::InventoryItem;

/// True when `quantity <= low_stock_threshold` (boundary inclusive).
pub fn is_low_stock(item: &InventoryItem) -> bool {
    item.quantity <= item.low_stock_threshold
}

/// Low-stock items in their stored order.
pub fn low_stock_items(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|item| is_low_stock(item)).collect()
}
