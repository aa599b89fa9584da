#![allow(dead_code)]

use std::io::Cursor;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use skinsync_backend::{
    config::{Config, LogFormat},
    database::user_store::InMemoryUserStore,
    inference::{ClassifierError, ImageTensor, SkinClassifier},
    routes::build_router,
    AppState,
};

pub const TEST_SECRET: &str = "integration-test-secret";
const BOUNDARY: &str = "skinsync-test-boundary";

/// Returns the same scores for every photo.
pub struct FixedClassifier(pub Vec<f32>);

impl SkinClassifier for FixedClassifier {
    fn predict(&self, _input: &ImageTensor) -> Result<Vec<f32>, ClassifierError> {
        Ok(self.0.clone())
    }
}

pub fn test_config() -> Config {
    Config {
        server_address: "127.0.0.1:0".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expires_minutes: 15,
        model_path: String::new(),
        max_upload_bytes: 10 * 1024 * 1024,
        cors_allowed_origins: None,
        log_format: LogFormat::Pretty,
    }
}

pub fn app_with_scores(scores: Vec<f32>) -> Router {
    let state = AppState::new(
        &test_config(),
        Arc::new(InMemoryUserStore::new()),
        Arc::new(FixedClassifier(scores)),
    );
    build_router(state)
}

pub fn app() -> Router {
    app_with_scores(vec![0.1, 0.7, 0.2])
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

pub fn json_request(uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_json_request(uri: &str, token: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A `multipart/form-data` POST with one file part.
pub fn multipart_request(
    uri: &str,
    token: Option<&str>,
    field_name: &str,
    content: &[u8],
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"face.png\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn png_bytes() -> Vec<u8> {
    let img = RgbImage::from_fn(80, 60, |x, y| Rgb([180, (x + y) as u8, 120]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

pub async fn register_and_login(app: &Router, email: &str) -> String {
    let (status, _) = send(
        app,
        json_request(
            "/auth/register",
            json!({"name": "Tester", "email": email, "password": "rahasia"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        json_request("/auth/login", json!({"email": email, "password": "rahasia"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}
