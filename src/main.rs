// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! NS Walk view server
//!
//! Serves the walk listing, walk details and the create/profile forms as
//! JSON view models backed by in-memory mock data.

use ns_walk::{
    config::Config,
    services::{ListenerRegistry, LoggingSink, WalkStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting NS Walk view server");

    if let Some(now) = config.now_override {
        tracing::warn!(now = %now, "Clock pinned by NOW_OVERRIDE");
    }

    let walks = WalkStore::with_mock_data();
    tracing::info!(count = walks.len(), "Mock walks loaded");

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        walks,
        sink: Arc::new(LoggingSink),
        listeners: ListenerRegistry::default(),
    });

    // Build router
    let app = ns_walk::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ns_walk=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
