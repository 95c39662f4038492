// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use player_portal::db::StoreError;
use player_portal::error::AppError;

#[test]
fn test_status_mapping() {
    assert_eq!(
        AppError::Validation("Email required".to_string()).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::NotFound("Profile not found".to_string()).status(),
        StatusCode::NOT_FOUND
    );

    let storage: AppError = StoreError::Io {
        path: "data/profiles.json".to_string(),
        message: "No such file".to_string(),
    }
    .into();
    assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_storage_error_hides_details() {
    let err: AppError = StoreError::Parse {
        path: "/srv/secret/profiles.json".to_string(),
        message: "expected value".to_string(),
    }
    .into();

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({"error": "storage_error"}));
}

#[tokio::test]
async fn test_client_errors_carry_details() {
    for (err, code) in [
        (AppError::Validation("Email required".to_string()), "validation_error"),
        (AppError::NotFound("Session not found".to_string()), "not_found"),
    ] {
        let message = match &err {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::Storage(_) => unreachable!(),
        };

        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": code, "details": message}));
    }
}
