use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use roster::router::init_router;
use roster::state::AppState;
use roster_config::{CorsConfig, IdAllocation, JwtConfig, TokenValidation};
use roster_store::UserStore;

pub const TEST_SECRET: &str = "integration-test-secret-key-of-32-plus-bytes";

pub fn test_jwt_config(validation: TokenValidation) -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        issuer: "yourIssuer".to_string(),
        audience: "yourAudience".to_string(),
        token_expiry: 43_200,
        validation,
    }
}

pub fn test_state(id_allocation: IdAllocation, validation: TokenValidation) -> AppState {
    AppState::new(
        UserStore::new(id_allocation),
        test_jwt_config(validation),
        CorsConfig::default(),
    )
}

pub fn setup_test_app(id_allocation: IdAllocation, validation: TokenValidation) -> Router {
    init_router(test_state(id_allocation, validation))
}

#[allow(dead_code)]
pub fn setup_default_app() -> Router {
    setup_test_app(IdAllocation::Monotonic, TokenValidation::SignatureOnly)
}

pub async fn get_auth_token(app: &Router) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/generate-token")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    body["Token"].as_str().unwrap().to_string()
}

/// Sends a request with an optional bearer token and JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[allow(dead_code)]
pub fn fake_user() -> Value {
    json!({
        "FirstName": FirstName().fake::<String>(),
        "LastName": LastName().fake::<String>(),
        "Email": SafeEmail().fake::<String>(),
        "Department": "Engineering",
    })
}
