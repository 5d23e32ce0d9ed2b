use anyhow::Context;
use serde::{Deserialize, Serialize};

// ============================================================================
// Cart line
// ============================================================================
/// One cart position. At most one line exists per product id; the quantity
/// is always at least 1 (dropping to zero removes the line).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: Option<f64>,
    pub img: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    pub fn new(id: String, name: String, price: Option<f64>, img: Option<String>) -> Self {
        Self {
            id,
            name,
            price,
            img,
            quantity: 1,
        }
    }

    /// Line total; an unknown price counts as zero.
    pub fn line_total(&self) -> f64 {
        self.price.unwrap_or(0.0) * self.quantity as f64
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Cart contents. Only the items are persisted; the drawer open/closed flag
/// lives outside the aggregate and is never written to storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Add a product to the cart. A repeated add of the same id bumps the
    /// quantity by one and leaves name/price/img of the existing line
    /// untouched; a new id appends a line with quantity 1.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += 1;
        } else {
            self.items.push(CartItem {
                quantity: 1,
                ..item
            });
        }
    }

    /// Remove the line with the given id. No-op when absent.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Set the quantity of an existing line; zero removes it. Absent ids are
    /// a no-op.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
        } else if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of all line totals.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    // ------------------------------------------------------------------
    // Persistence format
    // ------------------------------------------------------------------
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("сериализация корзины")
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("чтение сохранённой корзины")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: Option<f64>) -> CartItem {
        CartItem::new(id.to_string(), format!("Товар {id}"), price, None)
    }

    #[test]
    fn repeated_add_merges_into_one_line() {
        let mut cart = Cart::default();
        cart.add_item(item("x", Some(100.0)));
        cart.add_item(item("x", Some(100.0)));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_price(), 200.0);
    }

    #[test]
    fn add_keeps_existing_line_fields() {
        let mut cart = Cart::default();
        cart.add_item(item("x", Some(100.0)));
        let mut changed = item("x", Some(250.0));
        changed.name = "Другое имя".to_string();
        cart.add_item(changed);
        assert_eq!(cart.items[0].price, Some(100.0));
        assert_eq!(cart.items[0].name, "Товар x");
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let mut cart = Cart::default();
        cart.add_item(item("x", Some(100.0)));
        cart.update_quantity("x", 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn update_quantity_of_absent_id_is_a_noop() {
        let mut cart = Cart::default();
        cart.add_item(item("x", None));
        cart.update_quantity("y", 5);
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn totals_follow_any_mutation_sequence() {
        let mut cart = Cart::default();
        cart.add_item(item("a", Some(100.0)));
        cart.add_item(item("b", Some(50.0)));
        cart.add_item(item("a", Some(100.0)));
        cart.update_quantity("b", 4);
        assert_eq!(cart.total_items(), 6);
        assert_eq!(cart.total_price(), 400.0);

        cart.remove_item("a");
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price(), 200.0);

        cart.clear();
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0.0);
    }

    #[test]
    fn unknown_price_counts_as_zero() {
        let mut cart = Cart::default();
        cart.add_item(item("a", None));
        cart.add_item(item("b", Some(75.0)));
        assert_eq!(cart.total_price(), 75.0);
    }

    #[test]
    fn persisted_cart_round_trips() {
        let mut cart = Cart::default();
        cart.add_item(item("a", Some(100.0)));
        cart.add_item(item("a", Some(100.0)));
        cart.add_item(item("b", None));
        let restored = Cart::from_json(&cart.to_json().unwrap()).unwrap();
        assert_eq!(restored, cart);
    }
}
