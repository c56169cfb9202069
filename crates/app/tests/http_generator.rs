//! Integration tests for the proxy-backed message generator.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use outreach_app::{GenerateError, HttpMessageGenerator, MessageGenerator};

/// Spawn a stub generation proxy returning a fixed status and body.
async fn spawn_proxy(status: StatusCode, body: serde_json::Value) -> String {
    let router = Router::new().route(
        "/api/generate",
        post(move || {
            let body = body.clone();
            async move { (status, Json(body)).into_response() }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn success_returns_message_text() {
    let base = spawn_proxy(StatusCode::OK, json!({ "message": "Hey Ana!" })).await;
    let generator = HttpMessageGenerator::new(base);

    let message = generator.generate("Ana", "CTO", "Acme").await.unwrap();
    assert_eq!(message, "Hey Ana!");
}

#[tokio::test]
async fn proxy_402_maps_to_quota_exhausted() {
    let base = spawn_proxy(
        StatusCode::PAYMENT_REQUIRED,
        json!({ "error": "Insufficient OpenAI quota. Please refill your API quota." }),
    )
    .await;
    let generator = HttpMessageGenerator::new(base);

    assert_matches!(
        generator.generate("Ana", "CTO", "Acme").await,
        Err(GenerateError::QuotaExhausted)
    );
}

#[tokio::test]
async fn proxy_500_maps_to_failed_with_server_text() {
    let base = spawn_proxy(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "Failed to generate message. Please try again later." }),
    )
    .await;
    let generator = HttpMessageGenerator::new(base);

    let err = generator.generate("Ana", "CTO", "Acme").await.unwrap_err();
    assert_matches!(err, GenerateError::Failed(msg) if msg.contains("Failed to generate message"));
}

#[tokio::test]
async fn unreachable_proxy_maps_to_failed() {
    let generator = HttpMessageGenerator::new("http://127.0.0.1:9");

    assert_matches!(
        generator.generate("Ana", "CTO", "Acme").await,
        Err(GenerateError::Failed(_))
    );
}
