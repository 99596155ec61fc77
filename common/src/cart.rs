use crate::api::OrderItem;
use crate::menu::MenuItem;

/// One cart line. Quantity is always at least 1; a line driven to zero is
/// removed from the cart rather than kept at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> u64 {
        self.item.price * self.quantity as u64
    }
}

/// The customer's in-memory cart. At most one entry per menu item; repeated
/// adds increment the quantity. Not persisted: created empty on page load,
/// cleared after a successful order submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Add one unit of `item`, merging into the existing line if present.
    pub fn add(&mut self, item: &MenuItem) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == item.id) {
            entry.quantity += 1;
        } else {
            self.entries.push(CartEntry {
                item: item.clone(),
                quantity: 1,
            });
        }
    }

    pub fn remove(&mut self, item_id: u32) {
        self.entries.retain(|e| e.item.id != item_id);
    }

    /// Apply a relative quantity change (the ± buttons). A resulting
    /// quantity of zero or below removes the line entirely.
    pub fn change_quantity(&mut self, item_id: u32, delta: i32) {
        let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == item_id) else {
            return;
        };
        let quantity = entry.quantity as i64 + delta as i64;
        if quantity <= 0 {
            self.remove(item_id);
        } else {
            entry.quantity = quantity as u32;
        }
    }

    /// Total in céntimos, recomputed from the current lines on every read.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Snapshot of the lines in the order-creation wire shape. Leaves the
    /// cart untouched; the caller clears it only after the backend confirms
    /// the order.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.entries
            .iter()
            .map(|e| OrderItem {
                name: e.item.name.clone(),
                quantity: e.quantity,
                price: e.item.price,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
