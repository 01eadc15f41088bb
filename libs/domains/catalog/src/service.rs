//! Catalog service - business rules between the HTTP surface and storage.

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CategoryStats, ListFilter, ListQuery, Product, ProductDraft, ProductPage};
use crate::repository::ProductRepository;

/// Upper bound for the list page size; requested limits are clamped into
/// [1, MAX_PAGE_SIZE].
pub const MAX_PAGE_SIZE: i64 = 100;

/// Product service providing the catalog operations.
///
/// Holds no state of its own beyond the repository handle; validation happens
/// here so storage is never reached with an invalid payload.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product with a server-generated id
    #[instrument(skip(self, draft))]
    pub async fn create_product(&self, draft: ProductDraft) -> CatalogResult<Product> {
        validate(&draft)?;
        self.repository.create(Product::new(draft)).await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// List products with optional category filter and pagination
    #[instrument(skip(self))]
    pub async fn list_products(&self, query: ListQuery) -> CatalogResult<ProductPage> {
        let page = query.page.max(1);
        let limit = query.limit.clamp(1, MAX_PAGE_SIZE);

        let filter = ListFilter {
            category: query.category,
            skip: ((page - 1) * limit) as u64,
            limit,
        };

        let total = self.repository.count(&filter).await?;
        let products = self.repository.list(&filter).await?;

        Ok(ProductPage {
            total,
            page,
            pages: total.div_ceil(limit as u64),
            products,
        })
    }

    /// Case-insensitive substring search over name and description.
    /// A missing or blank query is a validation failure.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: Option<&str>) -> CatalogResult<Vec<Product>> {
        let query = query.map(str::trim).unwrap_or_default();
        if query.is_empty() {
            return Err(CatalogError::Validation("Missing search query".to_string()));
        }

        self.repository.search(query).await
    }

    /// Per-category counts, including how many entries are in stock
    #[instrument(skip(self))]
    pub async fn category_stats(&self) -> CatalogResult<Vec<CategoryStats>> {
        self.repository.category_stats().await
    }

    /// Replace all business fields of an existing product
    #[instrument(skip(self, draft))]
    pub async fn update_product(&self, id: &str, draft: ProductDraft) -> CatalogResult<Product> {
        validate(&draft)?;

        self.repository
            .update(id, draft)
            .await?
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Remove a product by id
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> CatalogResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CatalogError::NotFound(id.to_string()));
        }

        Ok(())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Accumulate every field violation before reporting; the joined message is
/// what clients see in the Validation envelope.
fn validate(draft: &ProductDraft) -> CatalogResult<()> {
    let errors = draft.field_errors();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::Validation(errors.join(", ")))
    }
}
