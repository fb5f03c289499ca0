//! Cart domain model.
//!
//! A [`Cart`] is an insertion-ordered sequence of [`LineItem`]s holding at most
//! one entry per [`ProductId`], each with a positive amount. All transitions
//! here are pure: they return a new cart and never touch the input.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ProductId;

/// Product metadata as served by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    /// Catalog fields this crate does not interpret, kept for lossless round-trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self { id, title: title.into(), price, image: image.into(), extra: Map::new() }
    }
}

/// A product in the cart together with its quantity.
///
/// Serialized flat, the way the storefront stores it: product fields plus `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: u32,
}

impl LineItem {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.amount)
    }
}

/// Available quantity for a product, fetched fresh for every validating mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Stock {
    pub amount: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from persisted items, dropping entries that break the
    /// invariants (zero amount, repeated id). The first occurrence wins.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            if item.amount == 0 || cart.contains(item.id()) {
                continue;
            }
            cart.items.push(item);
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items.
    pub fn units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount)).sum()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }

    /// New cart with `product` appended at amount 1, or `None` if already present.
    pub fn with_product(&self, product: Product) -> Option<Cart> {
        if self.contains(product.id) {
            return None;
        }
        let mut items = self.items.clone();
        items.push(LineItem { product, amount: 1 });
        Some(Cart { items })
    }

    /// New cart without `id`, or `None` if it is not in the cart.
    pub fn without(&self, id: ProductId) -> Option<Cart> {
        if !self.contains(id) {
            return None;
        }
        let items = self.items.iter().filter(|item| item.id() != id).cloned().collect();
        Some(Cart { items })
    }

    /// New cart with the amount of `id` replaced, or `None` if `id` is absent
    /// or `amount` is zero.
    pub fn with_amount(&self, id: ProductId, amount: u32) -> Option<Cart> {
        if amount == 0 || !self.contains(id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id() == id { LineItem { amount, ..item.clone() } } else { item.clone() }
            })
            .collect();
        Some(Cart { items })
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
