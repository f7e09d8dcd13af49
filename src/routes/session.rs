// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login page and the session flag toggles.

use super::{load_session, PageChrome};
use crate::services::{CookieStorage, Session};
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(get_login).post(login))
        .route("/logout", post(logout))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SessionResponse {
    #[serde(flatten)]
    pub chrome: PageChrome,
}

async fn get_login(jar: CookieJar) -> Json<SessionResponse> {
    let session = load_session(&jar);
    Json(SessionResponse {
        chrome: PageChrome::for_session(&session),
    })
}

/// Apply `change` to the flag held in the request cookies and hand the
/// updated jar back so the browser sees the write.
fn update_flag(
    state: &AppState,
    jar: CookieJar,
    change: fn(&mut Session, &mut CookieStorage),
) -> (CookieJar, Json<SessionResponse>) {
    let mut storage = CookieStorage::new(jar, state.config.secure_cookies());
    let mut session = Session::load(&storage);
    change(&mut session, &mut storage);
    (
        storage.into_jar(),
        Json(SessionResponse {
            chrome: PageChrome::for_session(&session),
        }),
    )
}

/// No credentials are checked; this only flips the flag.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    update_flag(&state, jar, |session, storage| session.log_in(storage))
}

async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<SessionResponse>) {
    update_flag(&state, jar, |session, storage| session.log_out(storage))
}
