use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::CatalogResult;
use crate::models::{CategoryStats, ListFilter, Product, ProductDraft};

/// Repository trait for product persistence.
///
/// Defines the storage operations the pipeline depends on; implementations
/// must make `update` and `delete` atomic find-and-modify operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product; the id is already assigned
    async fn create(&self, product: Product) -> CatalogResult<Product>;

    /// Exact-match lookup by id
    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<Product>>;

    /// List products matching the filter, honoring skip/limit
    async fn list(&self, filter: &ListFilter) -> CatalogResult<Vec<Product>>;

    /// Count products matching the filter (skip/limit ignored)
    async fn count(&self, filter: &ListFilter) -> CatalogResult<u64>;

    /// Case-insensitive substring match against name or description
    async fn search(&self, query: &str) -> CatalogResult<Vec<Product>>;

    /// Group by category: total count and in-stock count per category
    async fn category_stats(&self) -> CatalogResult<Vec<CategoryStats>>;

    /// Atomically replace all business fields by id, returning the updated
    /// record, or None when no record matches
    async fn update(&self, id: &str, draft: ProductDraft) -> CatalogResult<Option<Product>>;

    /// Atomically remove by id; false when no record matches
    async fn delete(&self, id: &str) -> CatalogResult<bool>;
}

/// In-memory implementation of ProductRepository (for development/testing).
///
/// Keeps insertion order, which mirrors the natural find order of an
/// unindexed MongoDB collection closely enough for pagination tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(product: &Product, filter: &ListFilter) -> bool {
    match filter.category {
        Some(ref category) => &product.category == category,
        None => true,
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> CatalogResult<Product> {
        let mut products = self.products.write().await;
        products.push(product.clone());

        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, filter: &ListFilter) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| matches(p, filter))
            .skip(filter.skip as usize)
            .take(filter.limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &ListFilter) -> CatalogResult<u64> {
        let products = self.products.read().await;
        Ok(products.iter().filter(|p| matches(p, filter)).count() as u64)
    }

    async fn search(&self, query: &str) -> CatalogResult<Vec<Product>> {
        let needle = query.to_lowercase();
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn category_stats(&self) -> CatalogResult<Vec<CategoryStats>> {
        use std::collections::BTreeMap;

        let products = self.products.read().await;
        let mut groups: BTreeMap<String, (i64, i64)> = BTreeMap::new();

        for product in products.iter() {
            let entry = groups.entry(product.category.clone()).or_default();
            entry.0 += 1;
            if product.in_stock {
                entry.1 += 1;
            }
        }

        Ok(groups
            .into_iter()
            .map(|(category, (count, in_stock))| CategoryStats {
                category,
                count,
                in_stock,
            })
            .collect())
    }

    async fn update(&self, id: &str, draft: ProductDraft) -> CatalogResult<Option<Product>> {
        let mut products = self.products.write().await;

        match products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply(draft);
                tracing::info!(product_id = %id, "Updated product");
                Ok(Some(product.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: &str) -> CatalogResult<bool> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);

        let deleted = products.len() < before;
        if deleted {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(deleted)
    }
}
