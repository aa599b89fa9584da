mod common;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{header, Request, StatusCode},
};
use base64::{
    engine::general_purpose::{STANDARD, STANDARD_NO_PAD},
    Engine as _,
};
use serde_json::json;
use skinsync_backend::{
    error::ANALYSIS_FAILED_MESSAGE,
    models::prediction::SkinType,
    services::recommendation_service::{description, recommendations},
};

use common::{
    app, app_with_scores, authed_json_request, multipart_request, png_bytes, register_and_login,
    send,
};

#[tokio::test]
async fn predict_requires_bearer_token_even_with_file() {
    let app = app();

    let (status, resp) = send(&app, multipart_request("/predict", None, "file", &png_bytes())).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp["error"], "missing_authorization");

    let (status, resp) = send(
        &app,
        multipart_request("/predict", Some("forged.token.value"), "file", &png_bytes()),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp["error"], "invalid_token");

    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::AUTHORIZATION, "Basic YTpi")
        .body(Body::empty())
        .unwrap();
    let (status, resp) = send(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(resp["error"], "unsupported_scheme");
}

#[tokio::test]
async fn predict_without_file_is_bad_request() {
    let app = app();
    let token = register_and_login(&app, "nofile@x.com").await;

    let (status, resp) = send(
        &app,
        multipart_request("/predict", Some(&token), "photo", &png_bytes()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Tidak ada file yang diunggah");

    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let (status, resp) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Tidak ada file yang diunggah");
}

#[tokio::test]
async fn predict_with_non_image_is_generic_server_error() {
    let app = app();
    let token = register_and_login(&app, "garbage@x.com").await;

    let (status, resp) = send(
        &app,
        multipart_request("/predict", Some(&token), "file", b"this is a text file"),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp, json!({"error": ANALYSIS_FAILED_MESSAGE}));
}

#[tokio::test]
async fn predict_returns_fixed_advice_for_each_label() {
    let cases = [
        (vec![0.9, 0.05, 0.05], SkinType::Dry, "90.00"),
        (vec![0.2, 0.6543, 0.1457], SkinType::Normal, "65.43"),
        (vec![0.0, 0.25, 0.75], SkinType::Oily, "75.00"),
    ];

    for (scores, expected, confidence) in cases {
        let app = app_with_scores(scores);
        let token = register_and_login(&app, "label@x.com").await;

        let (status, resp) = send(
            &app,
            multipart_request("/predict", Some(&token), "file", &png_bytes()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(resp["skin_type"], expected.as_str());
        assert_eq!(resp["confidence"], confidence);
        assert_eq!(resp["recommendations"], json!(recommendations(expected)));
        assert_eq!(resp["description"], description(expected));

        let conf = resp["confidence"].as_str().unwrap();
        assert_eq!(conf.split('.').nth(1).map(str::len), Some(2));
        let value: f64 = conf.parse().unwrap();
        assert!((0.0..=100.0).contains(&value));
    }
}

#[tokio::test]
async fn oversized_upload_is_payload_too_large() {
    let app = app().layer(DefaultBodyLimit::max(1024));
    let token = register_and_login(&app, "big@x.com").await;

    let (status, resp) = send(
        &app,
        multipart_request("/predict", Some(&token), "file", &vec![0u8; 4096]),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(resp["error"].is_string());
}

#[tokio::test]
async fn analyze_accepts_base64_data_url() {
    let app = app_with_scores(vec![0.7, 0.2, 0.1]);
    let token = register_and_login(&app, "b64@x.com").await;
    let image = format!("data:image/png;base64,{}", STANDARD.encode(png_bytes()));

    let (status, resp) = send(
        &app,
        authed_json_request("/api/analyze", &token, json!({ "image": image })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["skin_type"], "dry");
    assert_eq!(resp["data"]["confidence"], "70.00");
}

#[tokio::test]
async fn analyze_accepts_unpadded_base64() {
    let app = app_with_scores(vec![0.7, 0.2, 0.1]);
    let token = register_and_login(&app, "nopad@x.com").await;
    let encoded = STANDARD_NO_PAD.encode(png_bytes());
    let image = format!("data:image/png;base64,{}", encoded);

    let (status, resp) = send(
        &app,
        authed_json_request("/api/analyze", &token, json!({ "image": image })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["skin_type"], "dry");

    let (status, resp) = send(
        &app,
        authed_json_request("/api/analyze", &token, json!({ "image": encoded })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp["data"]["confidence"], "70.00");
}

#[tokio::test]
async fn analyze_rejects_missing_or_broken_image() {
    let app = app();
    let token = register_and_login(&app, "b64bad@x.com").await;

    let (status, resp) = send(&app, authed_json_request("/api/analyze", &token, json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "Image data is required.");

    let (status, resp) = send(
        &app,
        authed_json_request("/api/analyze", &token, json!({"image": "@@not-base64@@"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp["error"], ANALYSIS_FAILED_MESSAGE);

    let (status, _) = send(
        &app,
        common::json_request("/api/analyze", json!({"image": STANDARD.encode(png_bytes())})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
