//! Client-side shopping cart.
//!
//! The cart is an ordered list of [`CartEntry`] lines persisted as a JSON
//! array under [`CART_KEY`]. Each line pairs a [`CartItem`] snapshot with a
//! strictly positive quantity, and no two lines share an item id.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use shop_admin::{CartItem, CartManager};
//! use shop_admin::storage::MemoryStore;
//!
//! let cart = CartManager::new(Arc::new(MemoryStore::new()));
//! let mug = CartItem::new(7, "Mug", 150.0);
//!
//! cart.add_item(&mug, 2).unwrap();
//! cart.add_item(&mug, 1).unwrap();
//!
//! assert_eq!(cart.get_item_count().unwrap(), 3);
//! assert_eq!(cart.get_cart().unwrap().len(), 1);
//! assert!((cart.get_total().unwrap() - 450.0).abs() < f64::EPSILON);
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::storage::{KeyValueStore, StorageError, CART_KEY};

/// Smallest quantity a cart line may hold; anything lower removes the line.
pub const MIN_LINE_QUANTITY: i64 = 1;

/// Snapshot of an item as it was when added to the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Database id of the item; the cart's line key.
    pub id: i64,
    /// Human-facing item code (e.g. `ITM-001`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    pub name: String,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CartItem {
    /// Creates a snapshot with only the fields the cart needs.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            item_id: None,
            name: name.into(),
            price,
            image_url: None,
        }
    }
}

impl From<&crate::api::Item> for CartItem {
    fn from(item: &crate::api::Item) -> Self {
        Self {
            id: item.id,
            item_id: Some(item.item_id.clone()),
            name: item.name.clone(),
            price: item.price,
            image_url: item.image_url.clone(),
        }
    }
}

/// One cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    pub item: CartItem,
    pub quantity: u32,
}

impl CartEntry {
    /// Returns `item.price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}

/// Persists the cart in a [`KeyValueStore`].
///
/// Every mutation reads the stored cart, applies the change, writes the whole
/// cart back, and returns the new contents. Concurrent writers sharing a
/// store get last-writer-wins semantics.
///
/// A stored value that is not a valid cart is logged and treated as an empty
/// cart; the next mutation overwrites it. A stored cart with repeated item ids
/// or zero quantities is normalized on read: repeated lines merge into the
/// first and empty lines are dropped.
#[derive(Clone, Debug)]
pub struct CartManager {
    store: Arc<dyn KeyValueStore>,
}

impl CartManager {
    /// Creates a cart manager over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the current cart, empty if none is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    pub fn get_cart(&self) -> Result<Vec<CartEntry>, StorageError> {
        let Some(raw) = self.store.get(CART_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => Ok(normalize(cart)),
            Err(error) => {
                tracing::warn!(%error, "stored cart is malformed, starting from an empty cart");
                Ok(Vec::new())
            }
        }
    }

    /// Adds `quantity` of `item`, merging with an existing line for the same id.
    ///
    /// Adding zero leaves the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read or written.
    pub fn add_item(&self, item: &CartItem, quantity: u32) -> Result<Vec<CartEntry>, StorageError> {
        let mut cart = self.get_cart()?;
        if quantity == 0 {
            return Ok(cart);
        }

        if let Some(entry) = cart.iter_mut().find(|e| e.item.id == item.id) {
            entry.quantity = entry.quantity.saturating_add(quantity);
        } else {
            cart.push(CartEntry {
                item: item.clone(),
                quantity,
            });
        }

        self.save(&cart)?;
        Ok(cart)
    }

    /// Removes the line for `item_id`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read or written.
    pub fn remove_item(&self, item_id: i64) -> Result<Vec<CartEntry>, StorageError> {
        let mut cart = self.get_cart()?;
        cart.retain(|e| e.item.id != item_id);
        self.save(&cart)?;
        Ok(cart)
    }

    /// Sets the quantity of the line for `item_id`.
    ///
    /// A quantity below [`MIN_LINE_QUANTITY`] removes the line. An absent item
    /// is not added.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read or written.
    pub fn update_quantity(
        &self,
        item_id: i64,
        quantity: i64,
    ) -> Result<Vec<CartEntry>, StorageError> {
        if quantity < MIN_LINE_QUANTITY {
            return self.remove_item(item_id);
        }

        let mut cart = self.get_cart()?;
        if let Some(entry) = cart.iter_mut().find(|e| e.item.id == item_id) {
            entry.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            self.save(&cart)?;
        }
        Ok(cart)
    }

    /// Deletes the stored cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be written.
    pub fn clear_cart(&self) -> Result<Vec<CartEntry>, StorageError> {
        self.store.remove(CART_KEY)?;
        Ok(Vec::new())
    }

    /// Returns the sum of all line quantities.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    pub fn get_item_count(&self) -> Result<u64, StorageError> {
        Ok(self
            .get_cart()?
            .iter()
            .map(|e| u64::from(e.quantity))
            .sum())
    }

    /// Returns the sum of `price * quantity` over all lines.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store cannot be read.
    pub fn get_total(&self) -> Result<f64, StorageError> {
        Ok(self.get_cart()?.iter().map(CartEntry::line_total).sum())
    }

    fn save(&self, cart: &[CartEntry]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        self.store.set(CART_KEY, &raw)
    }
}

/// Merges lines sharing an item id and drops zero-quantity lines.
fn normalize(cart: Vec<CartEntry>) -> Vec<CartEntry> {
    let mut lines: Vec<CartEntry> = Vec::with_capacity(cart.len());
    for entry in cart {
        if entry.quantity == 0 {
            continue;
        }
        match lines.iter_mut().find(|line| line.item.id == entry.item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(entry.quantity),
            None => lines.push(entry),
        }
    }
    lines
}
