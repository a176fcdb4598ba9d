use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, ProductInput};

/// Repository trait for Product persistence
///
/// Absence is not an error here: lookups return `None`, deletes return `false`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the store assigns the id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// List products matching every present filter, ordered by ascending id
    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>>;

    /// Replace all mutable fields of an existing product
    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<Option<Product>>;

    /// Delete a product by ID
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Total number of stored products
    async fn count(&self) -> ProductResult<u64>;
}

#[derive(Debug)]
struct Store {
    next_id: i32,
    products: BTreeMap<i32, Product>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            products: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids are handed out sequentially from 1 and never reused, like a SERIAL column.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id = id
            .checked_add(1)
            .ok_or_else(|| ProductError::Internal("product id sequence exhausted".to_string()))?;

        let product = Product::new(id, input);
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;

        // BTreeMap iteration is already ordered by id
        Ok(store
            .products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, input: ProductInput) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };
        product.apply(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> ProductResult<u64> {
        let store = self.store.read().await;
        Ok(store.products.len() as u64)
    }
}
