use contracts::domain::a002_cart::{Cart, CartItem};
use leptos::prelude::*;

use crate::shared::storage;

/// Ключ корзины в localStorage. Менять нельзя: под ним лежат корзины
/// вернувшихся покупателей.
pub const CART_STORAGE_KEY: &str = "paida-cart";

// ============================================================================
// Cart store
// ============================================================================
/// Reactive wrapper around the [`Cart`] aggregate. Every mutation goes
/// through [`CartStore::mutate`], which writes the cart back to localStorage,
/// so the signal and the persisted copy never diverge.
#[derive(Clone, Copy)]
pub struct CartStore {
    cart: RwSignal<Cart>,
    pub is_open: RwSignal<bool>,
}

impl CartStore {
    pub fn new() -> Self {
        let cart = storage::load(CART_STORAGE_KEY)
            .and_then(|raw| match Cart::from_json(&raw) {
                Ok(cart) => Some(cart),
                Err(e) => {
                    log::warn!("Не удалось восстановить корзину: {e:#}");
                    None
                }
            })
            .unwrap_or_default();
        Self {
            cart: RwSignal::new(cart),
            is_open: RwSignal::new(false),
        }
    }

    fn mutate(&self, f: impl FnOnce(&mut Cart)) {
        self.cart.update(f);
        let persisted = self.cart.with_untracked(Cart::to_json);
        match persisted {
            Ok(json) => storage::save(CART_STORAGE_KEY, &json),
            Err(e) => log::warn!("Не удалось сохранить корзину: {e:#}"),
        }
    }

    /// Меняет только строки корзины; флаг открытости трогают исключительно
    /// `toggle_open`/`set_open`.
    pub fn add_item(&self, item: CartItem) {
        self.mutate(|cart| cart.add_item(item));
    }

    pub fn remove_item(&self, id: &str) {
        self.mutate(|cart| cart.remove_item(id));
    }

    pub fn update_quantity(&self, id: &str, quantity: u32) {
        self.mutate(|cart| cart.update_quantity(id, quantity));
    }

    pub fn clear(&self) {
        self.mutate(Cart::clear);
    }

    pub fn toggle_open(&self) {
        self.is_open.update(|open| *open = !*open);
    }

    pub fn set_open(&self, open: bool) {
        self.is_open.set(open);
    }

    // Реактивные чтения
    pub fn items(&self) -> Vec<CartItem> {
        self.cart.with(|cart| cart.items.clone())
    }

    pub fn snapshot(&self) -> Cart {
        self.cart.get()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }

    pub fn total_items(&self) -> u32 {
        self.cart.with(Cart::total_items)
    }

    pub fn total_price(&self) -> f64 {
        self.cart.with(Cart::total_price)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_cart() -> CartStore {
    use_context::<CartStore>().expect("CartStore context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: Option<f64>) -> CartItem {
        CartItem::new(id.to_string(), format!("Товар {id}"), price, None)
    }

    #[test]
    fn add_item_does_not_open_the_drawer() {
        let store = CartStore::new();
        store.add_item(item("x", Some(100.0)));
        assert!(!store.is_open.get());
        assert_eq!(store.total_items(), 1);

        // Флаг открытости меняется только явными операциями
        store.toggle_open();
        assert!(store.is_open.get());
        store.add_item(item("y", Some(50.0)));
        assert!(store.is_open.get());
        store.set_open(false);
        assert!(!store.is_open.get());
        assert_eq!(store.total_items(), 2);
    }

    #[test]
    fn mutations_flow_through_the_aggregate() {
        let store = CartStore::new();
        store.add_item(item("x", Some(100.0)));
        store.add_item(item("x", Some(100.0)));
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.total_items(), 2);
        assert_eq!(store.total_price(), 200.0);

        store.update_quantity("x", 0);
        assert!(store.is_empty());
        assert_eq!(store.total_items(), 0);
    }
}
