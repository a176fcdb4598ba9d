use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, ProductInput};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and store a new product
    pub async fn create_product(&self, input: ProductInput) -> ProductResult<Product> {
        let input = Self::prepare(input)?;
        self.repository.create(input).await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// List products matching the filter, ordered by id
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        self.repository.list(filter).await
    }

    /// Replace every mutable field of a product
    pub async fn update_product(&self, id: i32, input: ProductInput) -> ProductResult<Product> {
        let input = Self::prepare(input)?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product; a missing id is reported as not found
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    pub async fn count_products(&self) -> ProductResult<u64> {
        self.repository.count().await
    }

    fn prepare(input: ProductInput) -> ProductResult<ProductInput> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        Ok(input.normalized())
    }
}
