// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! NS Walk: share walks between Marina Hotel and NS-Coworking
//!
//! This crate provides the listing, filtering and form logic of the NS Walk
//! prototype, plus a small view server that hands each page to the browser
//! as a JSON view model. All walk data is mock and in memory.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod validation;

use chrono::{DateTime, Utc};
use config::Config;
use services::{ListenerRegistry, WalkSink, WalkStore};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub walks: WalkStore,
    pub sink: Arc<dyn WalkSink>,
    pub listeners: ListenerRegistry,
}

impl AppState {
    /// Current instant, or the configured override.
    pub fn now(&self) -> DateTime<Utc> {
        self.config.now_override.unwrap_or_else(Utc::now)
    }
}
