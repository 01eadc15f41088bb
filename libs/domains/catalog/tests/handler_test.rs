//! Handler tests for the catalog domain
//!
//! These exercise the HTTP surface against the in-memory repository:
//! request deserialization, response serialization, status codes, and the
//! error envelope. Authentication middleware lives in the app composition,
//! not in the domain router, and is covered by its own tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_catalog::{
    handlers, InMemoryProductRepository, Product, ProductPage, ProductService,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn app() -> (Router, ProductService<InMemoryProductRepository>) {
    let service = ProductService::new(InMemoryProductRepository::new());
    (handlers::router(service.clone()), service)
}

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn mat() -> Value {
    json!({
        "name": "Mat",
        "description": "Non-slip eco-friendly mat",
        "price": 10,
        "category": "x",
        "inStock": false
    })
}

#[tokio::test]
async fn test_create_returns_201_with_stored_record() {
    let (app, _) = app();

    let response = app.oneshot(post_json("/", mat())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert!(!product.id.is_empty());
    assert_eq!(product.name, "Mat");
    assert_eq!(product.price, 10.0);
    assert_eq!(product.category, "x");
    assert!(!product.in_stock);
}

#[tokio::test]
async fn test_get_after_create_round_trips_business_fields() {
    let (app, _) = app();

    let created = app.clone().oneshot(post_json("/", mat())).await.unwrap();
    let created: Product = json_body(created.into_body()).await;

    let response = app.oneshot(get(&format!("/{}", created.id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_missing_fields_lists_every_violation() {
    let (app, _) = app();

    let response = app.oneshot(post_json("/", json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "Validation");
    assert_eq!(body["error"]["status"], 400);

    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("Name is required"));
    assert!(message.contains("Price must be a positive number"));
    assert!(message.contains("Category is required"));
    assert!(message.contains("inStock status is required"));
}

#[tokio::test]
async fn test_create_price_boundaries() {
    let (app, _) = app();

    for (price, expected) in [
        (json!(0), StatusCode::BAD_REQUEST),
        (json!(-5), StatusCode::BAD_REQUEST),
        (json!(0.01), StatusCode::CREATED),
    ] {
        let mut body = mat();
        body["price"] = price;
        let response = app.clone().oneshot(post_json("/", body)).await.unwrap();
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn test_get_unknown_id_is_404_envelope() {
    let (app, _) = app();

    let response = app.oneshot(get("/missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "NotFound");
    assert_eq!(body["error"]["message"], "Product not found");
    assert_eq!(body["error"]["status"], 404);
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let (app, _) = app();

    let created = app.clone().oneshot(post_json("/", mat())).await.unwrap();
    let created: Product = json_body(created.into_body()).await;
    let uri = format!("/{}", created.id);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app.oneshot(get(&uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_replaces_all_business_fields() {
    let (app, _) = app();

    let created = app.clone().oneshot(post_json("/", mat())).await.unwrap();
    let created: Product = json_body(created.into_body()).await;

    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/{}", created.id),
            json!({
                "name": "Mat Pro",
                "price": 15,
                "category": "fitness",
                "inStock": true
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Mat Pro");
    assert_eq!(updated.description, "");
    assert_eq!(updated.price, 15.0);
    assert_eq!(updated.category, "fitness");
    assert!(updated.in_stock);
}

#[tokio::test]
async fn test_update_unknown_id_is_404_and_creates_nothing() {
    let (app, _) = app();

    let response = app
        .clone()
        .oneshot(put_json("/missing", mat()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get("/")).await.unwrap();
    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_list_pagination_envelope() {
    let (app, service) = app();

    for i in 1..=15 {
        let draft = serde_json::from_value(json!({
            "name": format!("P{}", i),
            "description": "",
            "price": 1,
            "category": "misc",
            "inStock": true
        }))
        .unwrap();
        service.create_product(draft).await.unwrap();
    }

    let response = app.oneshot(get("/?page=2&limit=10")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!(page.total, 15);
    assert_eq!(page.page, 2);
    assert_eq!(page.pages, 2);
    assert_eq!(page.products.len(), 5);
}

#[tokio::test]
async fn test_list_filters_by_category() {
    let (app, _) = app();

    app.clone().oneshot(post_json("/", mat())).await.unwrap();
    app.clone()
        .oneshot(post_json(
            "/",
            json!({
                "name": "Pot",
                "description": "",
                "price": 22,
                "category": "home",
                "inStock": true
            }),
        ))
        .await
        .unwrap();

    let response = app.oneshot(get("/?category=x")).await.unwrap();
    let page: ProductPage = json_body(response.into_body()).await;
    assert_eq!(page.total, 1);
    assert_eq!(page.products[0].name, "Mat");
}

#[tokio::test]
async fn test_search_matches_description_case_insensitively() {
    let (app, _) = app();

    app.clone().oneshot(post_json("/", mat())).await.unwrap();

    // Substring only present in the description, with different casing
    let response = app.oneshot(get("/search?q=ECO-FRIENDLY")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Mat");
}

#[tokio::test]
async fn test_search_without_query_is_validation_error() {
    let (app, _) = app();

    let response = app.oneshot(get("/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "Validation");
    assert_eq!(body["error"]["message"], "Missing search query");
}

#[tokio::test]
async fn test_stats_for_seeded_category() {
    let (app, _) = app();

    app.clone().oneshot(post_json("/", mat())).await.unwrap();

    let response = app.oneshot(get("/stats")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let stats: Value = json_body(response.into_body()).await;
    assert_eq!(stats, json!([{ "category": "x", "count": 1, "inStock": 0 }]));
}

#[tokio::test]
async fn test_non_numeric_price_is_rejected_with_envelope() {
    let (app, _) = app();

    let mut body = mat();
    body["price"] = json!("ten");
    let response = app.oneshot(post_json("/", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "Validation");
}

#[tokio::test]
async fn test_client_supplied_id_is_ignored_on_create() {
    let (app, _) = app();

    let mut body = mat();
    body["id"] = json!("custom-id");
    let response = app.clone().oneshot(post_json("/", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_ne!(product.id, "custom-id");

    let response = app.oneshot(get("/custom-id")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
