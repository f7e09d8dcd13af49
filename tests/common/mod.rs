// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::Response;
use ns_walk::config::Config;
use ns_walk::error::AppError;
use ns_walk::models::ProfileUpdate;
use ns_walk::routes::create_router;
use ns_walk::services::{
    Ack, JoinPlan, ListenerRegistry, LoggingSink, NewWalk, WalkSink, WalkStore,
};
use ns_walk::AppState;
use std::sync::{Arc, Mutex};

/// Sink that records every accepted submission before acknowledging it.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingSink {
    pub walks: Mutex<Vec<NewWalk>>,
    pub profiles: Mutex<Vec<ProfileUpdate>>,
    pub joins: Mutex<Vec<JoinPlan>>,
}

impl WalkSink for RecordingSink {
    fn create_walk(&self, walk: &NewWalk) -> Result<Ack, AppError> {
        self.walks.lock().unwrap().push(walk.clone());
        LoggingSink.create_walk(walk)
    }

    fn update_profile(&self, update: &ProfileUpdate) -> Result<Ack, AppError> {
        self.profiles.lock().unwrap().push(update.clone());
        LoggingSink.update_profile(update)
    }

    fn join_walk(&self, plan: &JoinPlan) -> Result<Ack, AppError> {
        self.joins.lock().unwrap().push(plan.clone());
        LoggingSink.join_walk(plan)
    }
}

/// Create a test app over the mock walks with "now" pinned to
/// 2025-05-03 00:00 SGT.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_config(Config::test_default()).0
}

/// Like [`create_test_app`], also handing back the recording sink.
#[allow(dead_code)]
pub fn create_test_app_with_config(
    config: Config,
) -> ((axum::Router, Arc<AppState>), Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let state = Arc::new(AppState {
        config,
        walks: WalkStore::with_mock_data(),
        sink: sink.clone(),
        listeners: ListenerRegistry::default(),
    });

    ((create_router(state.clone()), state), sink)
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
