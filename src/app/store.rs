//! Cart store: the single owner of cart state.
//!
//! Every mutation validates against the storefront, computes the next cart,
//! publishes it to subscribers, and mirrors it into local storage. A rejected
//! mutation leaves the cart untouched and returns a [`CartError`].

use crate::domain::{AppError, Cart, CartError, LineItem, ProductId};
use crate::ports::{LocalStorage, ProductCatalog, StockLookup};

type Listener = Box<dyn FnMut(&Cart)>;

pub struct CartStore<A, L> {
    api: A,
    storage: L,
    key: String,
    cart: Cart,
    listeners: Vec<Listener>,
}

impl<A, L> CartStore<A, L>
where
    A: StockLookup + ProductCatalog,
    L: LocalStorage,
{
    /// Open a store, loading the cart persisted under `key`.
    ///
    /// A missing or unreadable value yields an empty cart.
    pub fn open(api: A, storage: L, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = load_cart(&storage, &key);
        Self { api, storage, key, cart, listeners: Vec::new() }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn storage(&self) -> &L {
        &self.storage
    }

    /// Register a listener called with the new cart after every successful mutation.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Cart) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Add one unit of `id`.
    ///
    /// For a product already in the cart this is `set_amount(id, amount + 1)`.
    pub fn add(&mut self, id: ProductId) -> Result<&Cart, CartError> {
        if let Some(current) = self.cart.get(id).map(|item| item.amount) {
            return self.set_amount(id, i64::from(current) + 1);
        }

        let add_failed =
            |err: AppError| CartError::AddFailed { product_id: id, reason: err.to_string() };

        let stock = self.api.stock(id).map_err(add_failed)?;
        if stock.amount <= 0 {
            return Err(CartError::OutOfStock {
                product_id: id,
                requested: 1,
                available: stock.amount,
            });
        }

        let product = self.api.product(id).map_err(add_failed)?;
        let next = self.cart.with_product(product).ok_or_else(|| CartError::AddFailed {
            product_id: id,
            reason: "already in cart".to_string(),
        })?;

        tracing::debug!(product_id = %id, "added product to cart");
        Ok(self.commit(next))
    }

    /// Remove `id` from the cart.
    pub fn remove(&mut self, id: ProductId) -> Result<&Cart, CartError> {
        let next = self.cart.without(id).ok_or(CartError::RemoveFailed { product_id: id })?;

        tracing::debug!(product_id = %id, "removed product from cart");
        Ok(self.commit(next))
    }

    /// Set the amount of a product already in the cart.
    ///
    /// Amounts below one are rejected rather than treated as removal.
    pub fn set_amount(&mut self, id: ProductId, amount: i64) -> Result<&Cart, CartError> {
        let update_failed = |reason: String| CartError::UpdateFailed { product_id: id, reason };

        if amount <= 0 {
            return Err(update_failed(format!("amount must be positive, got {}", amount)));
        }
        let new_amount = u32::try_from(amount)
            .map_err(|_| update_failed(format!("amount {} is too large", amount)))?;
        if !self.cart.contains(id) {
            return Err(update_failed("not in cart".to_string()));
        }

        let stock = self.api.stock(id).map_err(|err| update_failed(err.to_string()))?;
        if stock.amount < amount {
            return Err(CartError::OutOfStock {
                product_id: id,
                requested: amount,
                available: stock.amount,
            });
        }

        let next = self
            .cart
            .with_amount(id, new_amount)
            .ok_or_else(|| update_failed("not in cart".to_string()))?;

        tracing::debug!(product_id = %id, amount, "updated product amount");
        Ok(self.commit(next))
    }

    /// Reset the cart to empty.
    pub fn clear(&mut self) -> &Cart {
        tracing::debug!(items = self.cart.len(), "cleared cart");
        self.commit(Cart::new())
    }

    fn commit(&mut self, next: Cart) -> &Cart {
        self.cart = next;
        for listener in self.listeners.iter_mut() {
            listener(&self.cart);
        }
        self.persist();
        &self.cart
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.cart)
            .map_err(AppError::from)
            .and_then(|value| self.storage.set_item(&self.key, &value));

        if let Err(err) = result {
            tracing::warn!(key = %self.key, error = %err, "failed to persist cart");
        }
    }
}

fn load_cart(storage: &impl LocalStorage, key: &str) -> Cart {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(err) => {
            tracing::warn!(%key, error = %err, "failed to read persisted cart, starting empty");
            return Cart::new();
        }
    };

    match serde_json::from_str::<Vec<LineItem>>(&raw) {
        Ok(items) => Cart::from_items(items),
        Err(err) => {
            tracing::warn!(%key, error = %err, "persisted cart is unparseable, starting empty");
            Cart::new()
        }
    }
}
