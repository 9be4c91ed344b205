// ABOUTME: Integration tests for the secrets gateway route
// ABOUTME: Verifies the credential pair contract and the no-partial-credentials failure mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{spawn, spawn_app, stub_store, stub_store_with_defaults, unreachable_addr};
use serde_json::Value;

#[tokio::test]
async fn serves_both_credentials_when_both_rows_exist() {
    let store = spawn(stub_store_with_defaults()).await;
    let upstream = unreachable_addr().await;
    let app = spawn_app(store, upstream).await;

    let response = reqwest::get(format!("http://{app}/secrets-config"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["openAiApiKey"], "sk-test");
    assert_eq!(body["mapboxAccessToken"], "pk.test");
}

#[tokio::test]
async fn missing_row_yields_500_and_no_partial_pair() {
    // Mapbox row absent from the store.
    let store = spawn(stub_store(&[("openai_api_key", "sk-test")])).await;
    let upstream = unreachable_addr().await;
    let app = spawn_app(store, upstream).await;

    let response = reqwest::get(format!("http://{app}/secrets-config"))
        .await
        .unwrap();
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("mapbox_access_token"));
    assert!(body.get("openAiApiKey").is_none());
}

#[tokio::test]
async fn unreachable_store_yields_500() {
    let store = unreachable_addr().await;
    let upstream = unreachable_addr().await;
    let app = spawn_app(store, upstream).await;

    let response = reqwest::get(format!("http://{app}/secrets-config"))
        .await
        .unwrap();
    assert_eq!(response.status(), 500);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("secrets store"));
}

#[tokio::test]
async fn gateway_answers_with_permissive_cors() {
    let store = spawn(stub_store_with_defaults()).await;
    let upstream = unreachable_addr().await;
    let app = spawn_app(store, upstream).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://{app}/secrets-config"))
        .header("Origin", "http://demo.local")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let store = spawn(stub_store_with_defaults()).await;
    let upstream = unreachable_addr().await;
    let app = spawn_app(store, upstream).await;

    let response = reqwest::get(format!("http://{app}/health")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "trailsmith");
}
