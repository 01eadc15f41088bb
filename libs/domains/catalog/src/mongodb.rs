//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, Document},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use tracing::instrument;

use crate::error::CatalogResult;
use crate::models::{CategoryStats, ListFilter, Product, ProductDraft};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository over the `products` collection
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes: unique `id`, plus `category` for the list filter.
    pub async fn init_indexes(&self) -> CatalogResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_id_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "category": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created");
        Ok(())
    }

    /// Bulk insert, used by first-run seeding.
    pub async fn insert_many(&self, products: &[Product]) -> CatalogResult<()> {
        self.collection.insert_many(products).await?;
        Ok(())
    }

    /// Whether the collection holds no documents.
    pub async fn is_empty(&self) -> CatalogResult<bool> {
        Ok(self.collection.count_documents(doc! {}).await? == 0)
    }

    /// Build a MongoDB filter document from a ListFilter
    fn build_filter(filter: &ListFilter) -> Document {
        let mut document = doc! {};

        if let Some(ref category) = filter.category {
            document.insert("category", category);
        }

        document
    }

    /// Case-insensitive substring match over name and description
    fn search_filter(query: &str) -> Document {
        doc! {
            "$or": [
                { "name": { "$regex": query, "$options": "i" } },
                { "description": { "$regex": query, "$options": "i" } },
            ]
        }
    }

    /// Group by category, counting entries and in-stock entries, projected to
    /// the response shape and sorted for deterministic output.
    fn stats_pipeline() -> Vec<Document> {
        vec![
            doc! {
                "$group": {
                    "_id": "$category",
                    "count": { "$sum": 1 },
                    "inStock": {
                        "$sum": { "$cond": [ { "$eq": [ "$inStock", true ] }, 1, 0 ] }
                    },
                }
            },
            doc! {
                "$project": { "_id": 0, "category": "$_id", "count": 1, "inStock": 1 }
            },
            doc! { "$sort": { "category": 1 } },
        ]
    }

    /// Full replacement of the business fields; the draft is validated before
    /// it reaches the repository, so the fallbacks only normalize the
    /// optional description.
    fn replacement(draft: &ProductDraft) -> Document {
        doc! {
            "$set": {
                "name": draft.name.as_deref().unwrap_or_default(),
                "description": draft.description.as_deref().unwrap_or_default(),
                "price": draft.price.unwrap_or_default(),
                "category": draft.category.as_deref().unwrap_or_default(),
                "inStock": draft.in_stock.unwrap_or(true),
            }
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn create(&self, product: Product) -> CatalogResult<Product> {
        self.collection.insert_one(&product).await?;

        tracing::info!("Product created");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> CatalogResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &ListFilter) -> CatalogResult<Vec<Product>> {
        let options = FindOptions::builder()
            .skip(filter.skip)
            .limit(filter.limit)
            .build();

        let cursor = self
            .collection
            .find(Self::build_filter(filter))
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: &ListFilter) -> CatalogResult<u64> {
        let count = self
            .collection
            .count_documents(Self::build_filter(filter))
            .await?;
        Ok(count)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> CatalogResult<Vec<Product>> {
        let cursor = self.collection.find(Self::search_filter(query)).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn category_stats(&self) -> CatalogResult<Vec<CategoryStats>> {
        let mut cursor = self.collection.aggregate(Self::stats_pipeline()).await?;

        let mut stats = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            stats.push(from_document(document)?);
        }

        Ok(stats)
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: &str, draft: ProductDraft) -> CatalogResult<Option<Product>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        let updated = self
            .collection
            .find_one_and_update(doc! { "id": id }, Self::replacement(&draft))
            .with_options(options)
            .await?;

        if updated.is_some() {
            tracing::info!(product_id = %id, "Product updated");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> CatalogResult<bool> {
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "id": id })
            .await?;

        if deleted.is_some() {
            tracing::info!(product_id = %id, "Product deleted");
        }
        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_empty() {
        let filter = ListFilter::default();
        let document = MongoProductRepository::build_filter(&filter);
        assert!(document.is_empty());
    }

    #[test]
    fn test_build_filter_with_category() {
        let filter = ListFilter {
            category: Some("electronics".to_string()),
            skip: 0,
            limit: 10,
        };
        let document = MongoProductRepository::build_filter(&filter);
        assert_eq!(document.get_str("category").unwrap(), "electronics");
    }

    #[test]
    fn test_search_filter_covers_both_fields() {
        let document = MongoProductRepository::search_filter("laptop");
        let branches = document.get_array("$or").unwrap();
        assert_eq!(branches.len(), 2);

        let name_branch = branches[0].as_document().unwrap();
        let regex = name_branch.get_document("name").unwrap();
        assert_eq!(regex.get_str("$regex").unwrap(), "laptop");
        assert_eq!(regex.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_stats_pipeline_groups_then_projects() {
        let pipeline = MongoProductRepository::stats_pipeline();
        assert_eq!(pipeline.len(), 3);

        let group = pipeline[0].get_document("$group").unwrap();
        assert_eq!(group.get_str("_id").unwrap(), "$category");
        assert!(group.contains_key("count"));
        assert!(group.contains_key("inStock"));

        let project = pipeline[1].get_document("$project").unwrap();
        assert_eq!(project.get_str("category").unwrap(), "$_id");
    }

    #[test]
    fn test_replacement_sets_every_business_field() {
        let draft = ProductDraft {
            name: Some("Mat".to_string()),
            description: None,
            price: Some(10.0),
            category: Some("x".to_string()),
            in_stock: Some(false),
        };

        let update = MongoProductRepository::replacement(&draft);
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_str("name").unwrap(), "Mat");
        assert_eq!(set.get_str("description").unwrap(), "");
        assert_eq!(set.get_f64("price").unwrap(), 10.0);
        assert_eq!(set.get_str("category").unwrap(), "x");
        assert!(!set.get_bool("inStock").unwrap());
        assert!(!set.contains_key("id"));
    }
}
