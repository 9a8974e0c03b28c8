use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::extract::ConnectInfo;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use driveease_rental::config::EnvironmentConfig;
use driveease_rental::create_app;
use driveease_rental::repositories::vehicle_repository::VehicleRepository;
use driveease_rental::services::auth_provider::LocalAuthProvider;
use driveease_rental::state::AppState;

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin123";
const STAFF_EMAIL: &str = "staff@example.com";
const STAFF_PASSWORD: &str = "staff123";

fn create_test_app() -> Router {
    let vars: HashMap<String, String> = [
        ("ADMIN_EMAIL", ADMIN_EMAIL),
        ("JWT_SECRET", "test-secret"),
        ("RATE_LIMIT_REQUESTS", "3"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    let config = EnvironmentConfig::from_map(&vars).unwrap();

    let provider = LocalAuthProvider::new(4)
        .with_account(ADMIN_EMAIL, ADMIN_PASSWORD)
        .unwrap()
        .with_account(STAFF_EMAIL, STAFF_PASSWORD)
        .unwrap();

    let catalog = VehicleRepository::builtin().unwrap();
    create_app(AppState::new(config, catalog, Arc::new(provider)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn login(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        post_json("/api/admin/login", json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["data"]["access_token"].as_str().unwrap().to_string()
}

fn names(body: &Value) -> Vec<String> {
    body["data"]["vehicles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalog_size"], 5);
    assert_eq!(body["auth_provider"], "local");
}

#[tokio::test]
async fn test_list_vehicles_in_catalog_order() {
    let app = create_test_app();
    let (status, body) = send(&app, get("/api/vehicles")).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_get_vehicle() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/api/vehicles/5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Porsche 911");
    assert_eq!(body["data"]["transmission_type"], "manual");

    let (status, body) = send(&app, get("/api/vehicles/99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_search_without_criteria_returns_everything() {
    let app = create_test_app();
    let (status, body) = send(&app, post_json("/api/vehicles/search", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 5);
}

#[tokio::test]
async fn test_search_form_payload() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        post_json(
            "/api/vehicles/search",
            json!({
                "location": "Miami Beach",
                "pickupDate": "2026-11-01",
                "returnDate": "2026-11-05",
                "vehicleType": "",
                "transmission": "",
                "passengers": "5",
                "priceRange": "150",
                "features": ["Backup Camera"]
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Tesla Model 3", "Range Rover Sport"]);
    assert_eq!(body["data"]["count"], 2);
    assert_eq!(body["data"]["advisory"]["location"], "Miami Beach");
    assert_eq!(body["data"]["advisory"]["pickup_date"], "2026-11-01");
}

#[tokio::test]
async fn test_search_by_query_string() {
    let app = create_test_app();
    let (status, body) = send(
        &app,
        get("/api/vehicles/search?vehicleType=sports&transmission=automatic"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["BMW M4"]);

    let (_, body) = send(&app, get("/api/vehicles/search?features=GPS,Backup%20Camera&maxPricePerDay=abc")).await;
    assert_eq!(
        names(&body),
        vec!["Tesla Model 3", "Range Rover Sport", "Mercedes-Benz S-Class"]
    );
}

#[tokio::test]
async fn test_search_accepts_repeated_query_keys() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/api/vehicles/search?features=GPS&features=Backup%20Camera")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&body),
        vec!["Tesla Model 3", "Range Rover Sport", "Mercedes-Benz S-Class"]
    );

    let (status, body) = send(&app, get("/api/vehicles/search?passengers=7&passengers=5")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 3);

    let (status, body) = send(&app, get("/api/vehicles/search?passengers=5&passengers=")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["count"], 5);
}

#[tokio::test]
async fn test_extractor_rejections_use_error_body() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/api/vehicles/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");

    let malformed = Request::builder()
        .method(Method::POST)
        .uri("/api/vehicles/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_feature_vocabulary() {
    let app = create_test_app();
    let (status, body) = send(&app, get("/api/vehicles/features")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["features"],
        json!(["GPS", "Bluetooth", "Backup Camera", "Leather Seats"])
    );
}

#[tokio::test]
async fn test_landing_content() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/api/content/featured")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (status, body) = send(&app, get("/api/content/landing")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["testimonials"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["highlights"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_location_suggestions() {
    let app = create_test_app();

    let (status, body) = send(&app, get("/api/locations?q=an")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!(["Los Angeles Downtown"]));

    let (_, body) = send(&app, get("/api/locations")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_newsletter_signup() {
    let app = create_test_app();

    let (status, body) = send(&app, post_json("/api/newsletter", json!({ "email": "not-an-email" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = send(&app, post_json("/api/newsletter", json!({ "email": "Reader@Example.com" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["email"], "reader@example.com");
    assert_eq!(body["data"]["subscribers"], 1);

    let (status, _) = send(&app, post_json("/api/newsletter", json!({ "email": "reader@example.com" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = create_test_app();

    let (status, body) = send(
        &app,
        post_json("/api/admin/login", json!({ "email": ADMIN_EMAIL, "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");

    let (status, _) = send(
        &app,
        post_json("/api/admin/login", json!({ "email": ADMIN_EMAIL, "password": "  " })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_dashboard_flow() {
    let app = create_test_app();

    let (status, _) = send(&app, get("/api/admin/dashboard")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let (status, body) = send(&app, get_with_token("/api/admin/session", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_admin"], true);

    let (status, body) = send(&app, get_with_token("/api/admin/dashboard", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["admin_email"], ADMIN_EMAIL);
    assert_eq!(body["data"]["stats"][0]["value"], "5");
    assert_eq!(body["data"]["sidebar"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_dashboard_requires_admin_account() {
    let app = create_test_app();
    let token = login(&app, STAFF_EMAIL, STAFF_PASSWORD).await;

    let (status, body) = send(&app, get_with_token("/api/admin/dashboard", &token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_logout_invalidates_session() {
    let app = create_test_app();
    let token = login(&app, ADMIN_EMAIL, ADMIN_PASSWORD).await;

    let logout = Request::builder()
        .method(Method::POST)
        .uri("/api/admin/logout")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, logout).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get_with_token("/api/admin/dashboard", &token)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_is_rate_limited() {
    let app = create_test_app();
    let attempt = || {
        let mut request = post_json("/api/admin/login", json!({ "email": ADMIN_EMAIL, "password": "wrong" }));
        request
            .headers_mut()
            .insert("x-forwarded-for", "198.51.100.20".parse().unwrap());
        request
    };

    for _ in 0..3 {
        let (status, _) = send(&app, attempt()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    let (status, body) = send(&app, attempt()).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], "RATE_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn test_login_limit_follows_socket_address() {
    let app = create_test_app();
    let attempt = |peer: &str, forwarded: &str| {
        let mut request = post_json("/api/admin/login", json!({ "email": ADMIN_EMAIL, "password": "wrong" }));
        let addr: SocketAddr = peer.parse().unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));
        request
            .headers_mut()
            .insert("x-forwarded-for", forwarded.parse().unwrap());
        request
    };

    // cambiar la cabecera no reinicia el contador del socket
    for forwarded in ["203.0.113.1", "203.0.113.2", "203.0.113.3"] {
        let (status, _) = send(&app, attempt("192.0.2.50:40000", forwarded)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    let (status, _) = send(&app, attempt("192.0.2.50:40001", "203.0.113.4")).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    let (status, _) = send(&app, attempt("192.0.2.51:40000", "203.0.113.1")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
