use url::Url;

use crate::app::store::CartStore;
use crate::ports::{LocalStorage, Navigator, Notifier, ProductCatalog, StockLookup};

/// Application context holding dependencies for command execution.
pub struct AppContext<A, L, U> {
    store: CartStore<A, L>,
    ui: U,
    root_url: Url,
}

impl<A, L, U> AppContext<A, L, U>
where
    A: StockLookup + ProductCatalog,
    L: LocalStorage,
    U: Notifier + Navigator,
{
    /// Create a new application context.
    pub fn new(store: CartStore<A, L>, ui: U, root_url: Url) -> Self {
        Self { store, ui, root_url }
    }

    pub fn store(&self) -> &CartStore<A, L> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CartStore<A, L> {
        &mut self.store
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Where the user is sent after the cart is cleared.
    pub fn root_url(&self) -> &Url {
        &self.root_url
    }
}
