use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Product, ProductId, Stock};
use crate::ports::{ProductCatalog, StockLookup};

/// Storefront double with scripted stock and catalog answers.
///
/// Unknown ids behave like a 404 from the real API.
#[derive(Clone, Default)]
pub struct FakeStorefront {
    stock: Arc<Mutex<HashMap<ProductId, i64>>>,
    products: Arc<Mutex<HashMap<ProductId, Product>>>,
    offline: Arc<Mutex<bool>>,
    pub stock_requests: Arc<Mutex<Vec<ProductId>>>,
    pub product_requests: Arc<Mutex<Vec<ProductId>>>,
}

impl FakeStorefront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product with the given stock.
    pub fn with_product(self, id: u32, stock: i64) -> Self {
        let id = ProductId::new(id).unwrap();
        let price = 99.9 + f64::from(id.get());
        let product = Product::new(id, format!("Sneaker {id}"), price, format!("{id}.jpg"));
        self.products.lock().unwrap().insert(id, product);
        self.set_stock(id.get(), stock);
        self
    }

    pub fn set_stock(&self, id: u32, amount: i64) {
        self.stock.lock().unwrap().insert(ProductId::new(id).unwrap(), amount);
    }

    pub fn set_offline(&self, offline: bool) {
        *self.offline.lock().unwrap() = offline;
    }

    pub fn stock_request_count(&self) -> usize {
        self.stock_requests.lock().unwrap().len()
    }

    fn check_online(&self) -> Result<(), AppError> {
        if *self.offline.lock().unwrap() {
            return Err(AppError::Api("connection refused".into()));
        }
        Ok(())
    }
}

impl StockLookup for FakeStorefront {
    fn stock(&self, id: ProductId) -> Result<Stock, AppError> {
        self.stock_requests.lock().unwrap().push(id);
        self.check_online()?;
        self.stock
            .lock()
            .unwrap()
            .get(&id)
            .map(|&amount| Stock { amount })
            .ok_or_else(|| AppError::Api(format!("GET stock/{id} returned 404")))
    }
}

impl ProductCatalog for FakeStorefront {
    fn product(&self, id: ProductId) -> Result<Product, AppError> {
        self.product_requests.lock().unwrap().push(id);
        self.check_online()?;
        self.products
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::Api(format!("GET products/{id} returned 404")))
    }
}
