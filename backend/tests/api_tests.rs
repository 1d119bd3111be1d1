//! Router tests: each request goes through the full axum stack via `oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use property_valuation::catalog::Catalog;
use property_valuation::config::AppConfig;
use property_valuation::{build_router, AppState};

fn setup_app() -> axum::Router {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data");
    let catalog = Catalog::from_dir(&data_dir).expect("bundled tables should load");
    let config = AppConfig { host: "127.0.0.1".to_string(), port: 0, data_dir };
    build_router(AppState { config, catalog: Arc::new(catalog) })
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = setup_app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    };
    (status, body)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_properties_attaches_predictions() {
    let (status, body) = send(get("/properties")).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 8);
    assert_eq!(list[0]["id"], 1);
    assert_eq!(list[0]["predicted_price"], 681_700.0);
    assert!(list.iter().all(|p| p["predicted_price"].as_f64().unwrap() >= 25_000.0));
    assert!(list.iter().all(|p| p.get("address").is_none()));
}

#[tokio::test]
async fn test_list_properties_with_query() {
    let (status, body) = send(get("/properties?q=Miami")).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "2 BHK Condo with Sea View");
}

#[tokio::test]
async fn test_get_property_and_not_found() {
    let (status, body) = send(get("/properties/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property_type"], "SFH");
    assert_eq!(body["lot_area"], 2800);
    assert_eq!(body["predicted_price"], 457_700.0);

    let (status, body) = send(get("/properties/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("999"));
}

#[tokio::test]
async fn test_compare_by_id() {
    let (status, body) =
        send(post_json("/compare", json!({"property_id_1": 5, "property_id_2": 6}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property_1"]["predicted_price"], 906_000.0);
    assert_eq!(body["property_2"]["predicted_price"], 256_400.0);

    let (status, _) =
        send(post_json("/compare", json!({"property_id_1": 5, "property_id_2": 77}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_compare_addresses() {
    let request = json!({"address_1": "123 Main St, New York, NY", "address_2": "Tiny"});
    let (status, body) = send(post_json("/compare-addresses", request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property_1"]["id"], 28516);
    assert_eq!(body["property_1"]["address"], "123 Main St, New York, NY");
    assert_eq!(body["property_1"]["predicted_price"], 627_920.0);
    assert_eq!(body["property_2"]["property_type"], "SFH");
    assert_eq!(body["property_2"]["predicted_price"], 236_180.0);
}

#[tokio::test]
async fn test_compare_addresses_rejects_blank() {
    let request = json!({"address_1": "123 Main St, New York, NY", "address_2": "   "});
    let (status, body) = send(post_json("/compare-addresses", request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("empty"));
}

#[tokio::test]
async fn test_lookup_address_is_deterministic() {
    let (_, first) = send(get("/lookup-address?address=742%20Evergreen%20Terrace")).await;
    let (status, second) = send(get("/lookup-address?address=742%20Evergreen%20Terrace")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);
    assert_eq!(second["id"], 22827);
}

#[tokio::test]
async fn test_predict_endpoint() {
    let features = json!({
        "property_type": "SFH",
        "lot_area": 1800,
        "bedrooms": 3,
        "bathrooms": 2,
        "year_built": 2005,
        "has_pool": true,
        "has_garage": true,
        "school_rating": 8
    });
    let (status, body) = send(post_json("/predict", features)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["predicted_price"], 418_600.0);
}

#[tokio::test]
async fn test_predict_rejects_unknown_type() {
    let features = json!({
        "property_type": "Houseboat",
        "building_area": 500,
        "bedrooms": 1,
        "bathrooms": 1,
        "year_built": 2000,
        "has_pool": false,
        "has_garage": false,
        "school_rating": 5
    });
    let (status, body) = send(post_json("/predict", features)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("property_type"));
}
