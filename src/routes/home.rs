// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Home page (walk listing) and the static travel guide.

use super::{load_session, PageChrome};
use crate::error::{AppError, Result};
use crate::models::FilterSelection;
use crate::services::listing::ListingSnapshot;
use crate::services::walks::CommunityStats;
use crate::services::{ListingView, MenuEvent, MenuId};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/home", get(get_home))
        .route("/travel-guide", get(get_travel_guide))
}

// ─── Home ────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    /// "all" or a direction
    direction: Option<String>,
    /// "upcoming", "past" or "all"
    time: Option<String>,
    /// "earliest" or "latest"
    sort: Option<String>,
    /// Menu to render open
    open: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct HomeResponse {
    #[serde(flatten)]
    pub chrome: PageChrome,
    pub stats: CommunityStats,
    pub show_join_community: bool,
    pub show_create_walk: bool,
    pub listing: ListingSnapshot,
}

fn parse_param<T: FromStr>(name: &str, raw: Option<&str>) -> Result<Option<T>> {
    raw.map(|value| {
        value
            .parse::<T>()
            .map_err(|_| AppError::BadRequest(format!("Invalid '{}' parameter: {}", name, value)))
    })
    .transpose()
}

fn parse_selection(query: &HomeQuery) -> Result<FilterSelection> {
    let defaults = FilterSelection::default();
    Ok(FilterSelection {
        direction: parse_param("direction", query.direction.as_deref())?
            .unwrap_or(defaults.direction),
        time: parse_param("time", query.time.as_deref())?.unwrap_or(defaults.time),
        sort: parse_param("sort", query.sort.as_deref())?.unwrap_or(defaults.sort),
    })
}

/// Home page: community stats, calls to action, and the filtered listing.
async fn get_home(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<HomeQuery>,
) -> Result<Json<HomeResponse>> {
    let session = load_session(&jar);
    let selection = parse_selection(&query)?;
    let open: Option<MenuId> = parse_param("open", query.open.as_deref())?;

    let mut view = ListingView::mount(&state.listeners).with_selection(selection);
    if let Some(menu) = open {
        view.dispatch(MenuEvent::Toggle(menu));
    }

    let listing = view.render(
        state.walks.all(),
        state.now(),
        state.config.community_offset,
    );

    tracing::debug!(
        direction = selection.direction.as_str(),
        time = selection.time.as_str(),
        sort = selection.sort.as_str(),
        results = listing.walks.len(),
        "Listing rendered"
    );

    Ok(Json(HomeResponse {
        chrome: PageChrome::for_session(&session),
        stats: state.walks.community_stats(),
        show_join_community: session.shows_join_community(),
        show_create_walk: session.shows_create_walk(),
        listing,
    }))
}

// ─── Travel Guide ────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GuideSection {
    pub heading: String,
    pub body: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TravelGuideResponse {
    #[serde(flatten)]
    pub chrome: PageChrome,
    pub title: String,
    pub sections: Vec<GuideSection>,
}

const GUIDE: &[(&str, &str)] = &[
    (
        "The route",
        "Walks run between Marina Hotel and NS-Coworking, in either direction.",
    ),
    (
        "Meeting up",
        "Each walk names a meetup spot. Arrive a few minutes early; on-time walks leave at the listed time.",
    ),
    (
        "Joining",
        "Open a walk from the listing to see spots left and send a join request.",
    ),
];

async fn get_travel_guide(jar: CookieJar) -> Json<TravelGuideResponse> {
    let session = load_session(&jar);
    Json(TravelGuideResponse {
        chrome: PageChrome::for_session(&session),
        title: "Travel Guide".to_string(),
        sections: GUIDE
            .iter()
            .map(|(heading, body)| GuideSection {
                heading: heading.to_string(),
                body: body.to_string(),
            })
            .collect(),
    })
}
