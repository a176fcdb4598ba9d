//! Handler tests for the Products domain
//!
//! Drive the products router through `oneshot` against the in-memory
//! repository: status codes, headers, JSON shapes and filtering.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let service = ProductService::new(InMemoryProductRepository::new());
    Router::new().nest("/products", handlers::router(service))
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, location, body)
}

fn hat() -> Value {
    json!({
        "name": "Hat",
        "description": "red hat",
        "price": "12.50",
        "available": true,
        "category": "CLOTHS"
    })
}

async fn seed(app: &Router, products: &[Value]) -> Vec<i64> {
    let mut ids = Vec::new();
    for product in products {
        let (status, _, body) = send(app, json_request("POST", "/products", product)).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["id"].as_i64().unwrap());
    }
    ids
}

#[tokio::test]
async fn test_create_returns_201_with_location_and_round_trips() {
    let app = app();

    let (status, location, created) = send(&app, json_request("POST", "/products", &hat())).await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["id"].as_i64().unwrap();
    let location = location.unwrap();
    assert_eq!(location, format!("/products/{id}"));

    let (status, _, fetched) = send(&app, empty_request("GET", &location)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    for field in ["name", "description", "price", "available", "category"] {
        assert_eq!(fetched[field], hat()[field], "{field}");
    }
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let app = app();
    let ids = seed(&app, &[hat()]).await;
    let uri = format!("/products/{}", ids[0]);

    let (_, _, first) = send(&app, empty_request("GET", &uri)).await;
    let (_, _, second) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_create_defaults_description_and_category() {
    let app = app();

    let (status, _, body) = send(
        &app,
        json_request(
            "POST",
            "/products",
            &json!({"name": "Bolt", "price": "0.10", "available": false}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["description"], "");
    assert_eq!(body["category"], "UNKNOWN");
    assert_eq!(body["price"], "0.10");
}

#[tokio::test]
async fn test_create_ignores_client_supplied_id() {
    let app = app();
    let mut body = hat();
    body["id"] = json!(999);

    let (status, _, created) = send(&app, json_request("POST", "/products", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], 999);
}

#[tokio::test]
async fn test_create_missing_name_is_400_naming_the_field() {
    let app = app();

    for body in [
        json!({"price": "1.00", "available": true}),
        json!({"name": "", "price": "1.00", "available": true}),
    ] {
        let (status, _, error) = send(&app, json_request("POST", "/products", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"], "VALIDATION_ERROR");
        assert!(error["message"].as_str().unwrap().contains("name"));
    }

    let (_, _, list) = send(&app, empty_request("GET", "/products")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_price_with_sub_cent_digits_is_400_and_not_stored() {
    let app = app();
    let ids = seed(&app, &[hat()]).await;

    for price in ["12.345", "0.015"] {
        let body = json!({"name": "X", "price": price, "available": true});
        let (status, _, error) = send(&app, json_request("POST", "/products", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{price}");
        assert_eq!(error["error"], "VALIDATION_ERROR");
        assert!(error["message"].as_str().unwrap().contains("price"));

        let uri = format!("/products/{}", ids[0]);
        let (status, _, _) = send(&app, json_request("PUT", &uri, &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{price}");
    }

    let (_, _, list) = send(&app, empty_request("GET", "/products")).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["price"], "12.50");
}

#[tokio::test]
async fn test_create_with_unknown_category_is_400() {
    let app = app();
    let mut body = hat();
    body["category"] = json!("WEAPONS");

    let (status, _, error) = send(&app, json_request("POST", "/products", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_create_with_malformed_json_is_400() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, _, error) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_write_without_json_content_type_is_415() {
    let app = app();
    let ids = seed(&app, &[hat()]).await;

    for (method, uri, content_type) in [
        ("POST", "/products".to_string(), None),
        ("POST", "/products".to_string(), Some("text/plain")),
        ("PUT", format!("/products/{}", ids[0]), Some("application/x-www-form-urlencoded")),
    ] {
        let mut builder = Request::builder().method(method).uri(&uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(hat().to_string())).unwrap();

        let (status, _, error) = send(&app, request).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE, "{method} {uri}");
        assert_eq!(error["error"], "UNSUPPORTED_MEDIA_TYPE");
    }
}

#[tokio::test]
async fn test_unknown_ids_are_404_with_not_found_message() {
    let app = app();

    for request in [
        empty_request("GET", "/products/42"),
        json_request("PUT", "/products/42", &hat()),
        empty_request("DELETE", "/products/42"),
    ] {
        let (status, _, error) = send(&app, request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let message = error["message"].as_str().unwrap();
        assert!(message.contains("not found"), "{message}");
        assert!(message.contains("42"), "{message}");
    }
}

#[tokio::test]
async fn test_non_integer_id_is_400() {
    let app = app();

    let (status, _, error) = send(&app, empty_request("GET", "/products/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_update_replaces_fields_and_keeps_id() {
    let app = app();
    let ids = seed(&app, &[hat()]).await;
    let uri = format!("/products/{}", ids[0]);

    let replacement = json!({
        "name": "Cap",
        "price": "8",
        "available": false,
        "category": "CLOTHS"
    });
    let (status, _, updated) = send(&app, json_request("PUT", &uri, &replacement)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], ids[0]);
    assert_eq!(updated["name"], "Cap");
    assert_eq!(updated["description"], "");
    assert_eq!(updated["price"], "8.00");
    assert_eq!(updated["available"], false);

    let (_, _, fetched) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_with_empty_name_is_400() {
    let app = app();
    let ids = seed(&app, &[hat()]).await;
    let uri = format!("/products/{}", ids[0]);

    let mut body = hat();
    body["name"] = json!("");
    let (status, _, _) = send(&app, json_request("PUT", &uri, &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, _, fetched) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(fetched["name"], "Hat");
}

#[tokio::test]
async fn test_delete_returns_204_and_removes_product() {
    let app = app();
    let ids = seed(&app, &[hat(), hat()]).await;
    let uri = format!("/products/{}", ids[0]);

    let response = app.clone().oneshot(empty_request("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let (status, _, _) = send(&app, empty_request("GET", &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, _, list) = send(&app, empty_request("GET", "/products")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_put_on_collection_is_405() {
    let app = app();

    let (status, _, error) = send(&app, json_request("PUT", "/products", &hat())).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(error["error"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn test_list_returns_all_in_id_order() {
    let app = app();
    let products: Vec<Value> = ["b", "a", "c"]
        .iter()
        .map(|name| json!({"name": name, "price": "1.00", "available": true}))
        .collect();
    let ids = seed(&app, &products).await;

    let (status, _, list) = send(&app, empty_request("GET", "/products")).await;
    assert_eq!(status, StatusCode::OK);

    let listed: Vec<i64> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(listed, ids);
}

#[tokio::test]
async fn test_filter_by_name_is_exact_and_case_sensitive() {
    let app = app();
    seed(
        &app,
        &[
            json!({"name": "Hat", "price": "1.00", "available": true}),
            json!({"name": "hat", "price": "1.00", "available": true}),
            json!({"name": "Hats", "price": "1.00", "available": true}),
            json!({"name": "Hat", "price": "2.00", "available": false}),
        ],
    )
    .await;

    let (status, _, list) = send(&app, empty_request("GET", "/products?name=Hat")).await;
    assert_eq!(status, StatusCode::OK);

    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|p| p["name"] == "Hat"));
}

#[tokio::test]
async fn test_available_filter_partitions_the_set() {
    let app = app();
    seed(
        &app,
        &[
            json!({"name": "a", "price": "1.00", "available": true}),
            json!({"name": "b", "price": "1.00", "available": false}),
            json!({"name": "c", "price": "1.00", "available": true}),
        ],
    )
    .await;

    let (_, _, all) = send(&app, empty_request("GET", "/products")).await;
    let (_, _, yes) = send(&app, empty_request("GET", "/products?available=TRUE")).await;
    let (_, _, no) = send(&app, empty_request("GET", "/products?available=false")).await;

    let all = all.as_array().unwrap().len();
    let yes = yes.as_array().unwrap();
    let no = no.as_array().unwrap();

    assert_eq!(yes.len() + no.len(), all);
    assert!(yes.iter().all(|p| p["available"] == true));
    assert!(no.iter().all(|p| p["available"] == false));
}

#[tokio::test]
async fn test_price_filter_compares_decimals() {
    let app = app();
    seed(
        &app,
        &[
            json!({"name": "a", "price": "12.5", "available": true}),
            json!({"name": "b", "price": "12.51", "available": true}),
            json!({"name": "c", "price": "12.50", "available": true}),
        ],
    )
    .await;

    let (status, _, list) = send(&app, empty_request("GET", "/products?price=12.50")).await;
    assert_eq!(status, StatusCode::OK);

    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "c"]);
}

#[tokio::test]
async fn test_filters_combine_with_and() {
    let app = app();
    seed(
        &app,
        &[
            json!({"name": "Drill", "price": "50", "available": true, "category": "TOOLS"}),
            json!({"name": "Saw", "price": "20", "available": false, "category": "TOOLS"}),
            json!({"name": "Pan", "price": "20", "available": true, "category": "HOUSEWARES"}),
        ],
    )
    .await;

    let (_, _, list) = send(
        &app,
        empty_request("GET", "/products?category=TOOLS&available=true"),
    )
    .await;

    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Drill");
}

#[tokio::test]
async fn test_category_filter_ignores_case() {
    let app = app();
    seed(
        &app,
        &[
            hat(),
            json!({"name": "Bread", "price": "2.00", "available": true, "category": "FOOD"}),
        ],
    )
    .await;

    let (status, _, list) = send(&app, empty_request("GET", "/products?category=cloths")).await;
    assert_eq!(status, StatusCode::OK);

    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Hat");
}

#[tokio::test]
async fn test_invalid_filter_values_are_400() {
    let app = app();

    for uri in [
        "/products?available=maybe",
        "/products?category=WEAPONS",
        "/products?price=cheap",
    ] {
        let (status, _, error) = send(&app, empty_request("GET", uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(error["error"], "INVALID_QUERY");
    }
}

#[tokio::test]
async fn test_list_empty_catalog() {
    let (status, _, list) = send(&app(), empty_request("GET", "/products")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}
