//! HTTP handlers for the catalog API

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse, ValidationResponse,
    },
    JsonBody,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CategoryStats, ListQuery, Product, ProductDraft, ProductPage, SearchQuery};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        search_products,
        category_stats,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductDraft, ProductPage, CategoryStats),
        responses(
            UnauthorizedResponse,
            ValidationResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/stats", get(category_stats))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

/// List products with optional category filter and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ListQuery),
    responses(
        (status = 200, description = "Page of products", body = ProductPage),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<ListQuery>,
) -> CatalogResult<Json<ProductPage>> {
    let page = service.list_products(query).await?;
    Ok(Json(page))
}

/// Search products by substring of name or description
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 400, response = ValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Query(query): Query<SearchQuery>,
) -> CatalogResult<Json<Vec<Product>>> {
    let products = service.search_products(query.q.as_deref()).await?;
    Ok(Json(products))
}

/// Per-category statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Counts per category", body = Vec<CategoryStats>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn category_stats<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> CatalogResult<Json<Vec<CategoryStats>>> {
    let stats = service.category_stats().await?;
    Ok(Json(stats))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Product>> {
    let product = service.get_product(&id).await?;
    Ok(Json(product))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductDraft,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, response = ValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    JsonBody(draft): JsonBody<ProductDraft>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create_product(draft).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace all business fields of a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    request_body = ProductDraft,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = ValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
    JsonBody(draft): JsonBody<ProductDraft>,
) -> CatalogResult<Json<Product>> {
    let product = service.update_product(&id, draft).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> CatalogResult<impl IntoResponse> {
    service.delete_product(&id).await?;
    Ok(StatusCode::OK)
}
