// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Portal data routes: sign-in lookup, bundle, home view, session detail.

use crate::error::{AppError, Result};
use crate::models::{PlayerEmail, TrainingSession};
use crate::services::{HomeView, PortalBundle, SessionDetailView, SignInResult};
use crate::time_utils::parse_timestamp;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signin", post(sign_in))
        .route("/portal", get(get_portal))
        .route("/portal/home", get(get_home))
        .route("/sessions/{id}", get(get_session))
        .route("/sessions/{id}/detail", get(get_session_detail))
}

// ─── Sign-in ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct SignInRequest {
    #[serde(default)]
    email: Option<String>,
}

/// Look up the profile for an email. No credentials are checked.
///
/// A missing, non-JSON or mistyped body is treated like a missing email.
async fn sign_in(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<SignInResult>> {
    let raw_email = match body {
        Ok(Json(SignInRequest { email })) => email.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Unreadable sign-in body");
            String::new()
        }
    };

    let email = PlayerEmail::parse(&raw_email)?;
    Ok(Json(state.portal.sign_in(email).await?))
}

// ─── Portal bundle ───────────────────────────────────────────

#[derive(Deserialize)]
struct PortalQuery {
    email: Option<String>,
}

async fn get_portal(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PortalQuery>,
) -> Result<Json<PortalBundle>> {
    let email = PlayerEmail::parse(params.email.as_deref().unwrap_or_default())?;
    Ok(Json(state.portal.bundle(&email).await?))
}

// ─── Home view ───────────────────────────────────────────────

#[derive(Deserialize)]
struct HomeQuery {
    email: Option<String>,
    /// Reference instant (ISO-8601); defaults to the server's local time
    at: Option<String>,
}

async fn get_home(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HomeQuery>,
) -> Result<Json<HomeView>> {
    let email = PlayerEmail::parse(params.email.as_deref().unwrap_or_default())?;
    let now = match params.at.as_deref() {
        Some(raw) => {
            parse_timestamp(raw).map_err(|e| AppError::Validation(format!("'at': {}", e)))?
        }
        None => chrono::Local::now().naive_local(),
    };

    let bundle = state.portal.bundle(&email).await?;
    Ok(Json(HomeView::compose(&bundle, now)))
}

// ─── Session detail ──────────────────────────────────────────

async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TrainingSession>> {
    Ok(Json(state.portal.session(&id).await?))
}

/// Session rendered for the detail page.
async fn get_session_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SessionDetailView>> {
    let session = state.portal.session(&id).await?;
    Ok(Json(SessionDetailView::from(&session)))
}
