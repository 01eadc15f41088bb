use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Catalog entry.
///
/// `id` is assigned by the server at creation time and immutable afterwards;
/// the five remaining fields are the business fields, all replaced together
/// on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Incoming payload for create and update.
///
/// Every business field is optional at the serde layer so validation can
/// report all missing fields at once instead of failing on the first
/// deserialization error. There is no id field: client-supplied ids are
/// ignored by construction.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(
        required(message = "Price must be a positive number"),
        range(exclusive_min = 0.0, message = "Price must be a positive number")
    )]
    pub price: Option<f64>,
    #[validate(
        required(message = "Category is required"),
        length(min = 1, message = "Category is required")
    )]
    pub category: Option<String>,
    #[validate(required(message = "inStock status is required"))]
    pub in_stock: Option<bool>,
}

/// Reporting order for field violations; matches the payload layout.
const FIELD_ORDER: [&str; 4] = ["name", "price", "category", "in_stock"];

impl ProductDraft {
    /// Field-rule violations in declared field order, one message per field.
    /// Empty when the draft is valid.
    pub fn field_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => ordered_messages(&errors),
        }
    }
}

fn ordered_messages(errors: &ValidationErrors) -> Vec<String> {
    let fields = errors.field_errors();
    FIELD_ORDER
        .iter()
        .filter_map(|field| {
            fields.get(*field).and_then(|violations| {
                violations.first().map(|violation| {
                    violation
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
        })
        .collect()
}

impl Product {
    /// Build a new entry from a validated draft.
    ///
    /// The id is always server-generated. `inStock` falls back to true when
    /// absent; validation rejects absent `inStock` on the API path, so the
    /// fallback only matters for direct construction.
    pub fn new(draft: ProductDraft) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            name: draft.name.unwrap_or_default(),
            description: draft.description.unwrap_or_default(),
            price: draft.price.unwrap_or_default(),
            category: draft.category.unwrap_or_default(),
            in_stock: draft.in_stock.unwrap_or(true),
        }
    }

    /// Replace every business field from a validated draft; id untouched.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name.unwrap_or_default();
        self.description = draft.description.unwrap_or_default();
        self.price = draft.price.unwrap_or_default();
        self.category = draft.category.unwrap_or_default();
        self.in_stock = draft.in_stock.unwrap_or(true);
    }
}

/// Query parameters for the list endpoint.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ListQuery {
    /// Exact-match category filter
    pub category: Option<String>,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Page size
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: None,
            page: default_page(),
            limit: default_limit(),
        }
    }
}

/// Normalized storage-side selection derived from [`ListQuery`] after
/// clamping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    pub category: Option<String>,
    pub skip: u64,
    pub limit: i64,
}

/// Pagination envelope returned by the list operation only; search and stats
/// intentionally return bare arrays.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    /// Records matching the filter, across all pages
    pub total: u64,
    /// The page that was served (after clamping)
    pub page: i64,
    /// ceil(total / limit)
    pub pages: u64,
    pub products: Vec<Product>,
}

/// Query parameters for the search endpoint.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct SearchQuery {
    /// Substring to look for in name or description, case-insensitive
    pub q: Option<String>,
}

/// Per-category aggregate: total entries and how many are in stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub category: String,
    pub count: i64,
    pub in_stock: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> ProductDraft {
        ProductDraft {
            name: Some("Laptop".to_string()),
            description: Some("High-performance laptop".to_string()),
            price: Some(1200.0),
            category: Some("electronics".to_string()),
            in_stock: Some(true),
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(full_draft().field_errors().is_empty());
    }

    #[test]
    fn test_empty_draft_reports_every_field_in_order() {
        let errors = ProductDraft::default().field_errors();
        assert_eq!(
            errors,
            vec![
                "Name is required",
                "Price must be a positive number",
                "Category is required",
                "inStock status is required",
            ]
        );
    }

    #[test]
    fn test_empty_name_rejected() {
        let draft = ProductDraft {
            name: Some(String::new()),
            ..full_draft()
        };
        assert_eq!(draft.field_errors(), vec!["Name is required"]);
    }

    #[test]
    fn test_price_zero_rejected() {
        let draft = ProductDraft {
            price: Some(0.0),
            ..full_draft()
        };
        assert_eq!(draft.field_errors(), vec!["Price must be a positive number"]);
    }

    #[test]
    fn test_price_negative_rejected() {
        let draft = ProductDraft {
            price: Some(-5.0),
            ..full_draft()
        };
        assert_eq!(draft.field_errors(), vec!["Price must be a positive number"]);
    }

    #[test]
    fn test_price_one_cent_accepted() {
        let draft = ProductDraft {
            price: Some(0.01),
            ..full_draft()
        };
        assert!(draft.field_errors().is_empty());
    }

    #[test]
    fn test_in_stock_false_is_not_a_violation() {
        let draft = ProductDraft {
            in_stock: Some(false),
            ..full_draft()
        };
        assert!(draft.field_errors().is_empty());
    }

    #[test]
    fn test_missing_description_is_not_a_violation() {
        let draft = ProductDraft {
            description: None,
            ..full_draft()
        };
        assert!(draft.field_errors().is_empty());
    }

    #[test]
    fn test_new_product_gets_generated_id() {
        let first = Product::new(full_draft());
        let second = Product::new(full_draft());
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_new_product_defaults_in_stock_true() {
        let draft = ProductDraft {
            in_stock: None,
            ..full_draft()
        };
        assert!(Product::new(draft).in_stock);
    }

    #[test]
    fn test_new_product_defaults_description_empty() {
        let draft = ProductDraft {
            description: None,
            ..full_draft()
        };
        assert_eq!(Product::new(draft).description, "");
    }

    #[test]
    fn test_apply_replaces_all_business_fields() {
        let mut product = Product::new(full_draft());
        let id = product.id.clone();

        product.apply(ProductDraft {
            name: Some("Tablet".to_string()),
            description: None,
            price: Some(300.0),
            category: Some("computers".to_string()),
            in_stock: Some(false),
        });

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Tablet");
        assert_eq!(product.description, "");
        assert_eq!(product.price, 300.0);
        assert_eq!(product.category, "computers");
        assert!(!product.in_stock);
    }

    #[test]
    fn test_product_wire_names_are_camel_case() {
        let product = Product::new(full_draft());
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("inStock").is_some());
        assert!(value.get("in_stock").is_none());
    }

    #[test]
    fn test_draft_ignores_client_supplied_id() {
        let draft: ProductDraft = serde_json::from_str(
            r#"{"id":"custom","name":"Mat","price":10,"category":"x","inStock":false}"#,
        )
        .unwrap();
        assert!(draft.field_errors().is_empty());
        let product = Product::new(draft);
        assert_ne!(product.id, "custom");
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 10);
        assert!(query.category.is_none());
    }

    #[test]
    fn test_category_stats_wire_shape() {
        let stats = CategoryStats {
            category: "x".to_string(),
            count: 1,
            in_stock: 0,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["category"], "x");
        assert_eq!(value["count"], 1);
        assert_eq!(value["inStock"], 0);
    }
}
