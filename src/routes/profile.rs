// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile page routes.

use super::{load_session, PageChrome};
use crate::error::Result;
use crate::services::{Ack, ProfileForm};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/profile", get(get_profile).post(update_profile))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub required: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileView {
    #[serde(flatten)]
    pub chrome: PageChrome,
    pub fields: Vec<ProfileField>,
}

async fn get_profile(jar: CookieJar) -> Json<ProfileView> {
    let session = load_session(&jar);
    let field = |name: &str, label: &str, placeholder: &str| ProfileField {
        name: name.to_string(),
        label: label.to_string(),
        placeholder: placeholder.to_string(),
        required: true,
    };

    Json(ProfileView {
        chrome: PageChrome::for_session(&session),
        fields: vec![
            field("name", "Name", "Your name"),
            field("whatsapp", "WhatsApp Number", "+65 9123 4567"),
        ],
    })
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<ProfileForm>, JsonRejection>,
) -> Result<Json<Ack>> {
    let Json(form) = payload?;
    let update = form.submit()?;
    Ok(Json(state.sink.update_profile(&update)?))
}
