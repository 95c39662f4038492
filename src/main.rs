// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Player Portal API Server

use anyhow::Context;
use player_portal::{config::Config, db::RecordStore, services::PortalService, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(port = config.port, "Starting player portal API");

    // Fail fast on a missing or malformed data directory; requests re-read it anyway.
    let store = RecordStore::from_dir(&config.data_dir);
    let snapshot = store
        .load()
        .await
        .with_context(|| format!("Failed to load records from {}", config.data_dir.display()))?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        profiles = snapshot.profiles.len(),
        training_sessions = snapshot.training_sessions.len(),
        appointments = snapshot.appointments.len(),
        "Record store available"
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        portal: PortalService::new(store),
    });

    let app = player_portal::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("player_portal=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
