// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk detail, join flow, and walk creation routes.

use super::{load_session, PageChrome};
use crate::error::{AppError, Result};
use crate::models::{Direction, WalkRecord, WalkStatus};
use crate::services::create_walk::{
    TimeFlexibility, CUSTOM_SPOT, DEFAULT_MAX_PARTICIPANTS, MAX_PARTICIPANTS_LIMIT,
};
use crate::services::listing::WalkCard;
use crate::services::{
    meetup_options, validate_join, Ack, CreateWalkForm, CreateWalkInput, JoinRequest, MeetupSpot,
};
use crate::time_utils::format_datetime_local;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Organizer name shown on previews of the visitor's own walk.
const PREVIEW_ORGANIZER: &str = "You";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/walks/{id}", get(get_walk))
        .route("/walks/{id}/join", post(join_walk))
        .route("/create-walk", get(get_create_walk).post(create_walk))
}

/// Walk ids are opaque in URLs; anything that is not a known id is a 404.
fn find_walk<'a>(state: &'a AppState, id: &str) -> Result<&'a WalkRecord> {
    id.parse::<u64>()
        .ok()
        .and_then(|id| state.walks.get(id))
        .ok_or_else(|| AppError::NotFound(format!("Walk {} not found", id)))
}

// ─── Walk Detail ─────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CostLine {
    pub label: String,
    pub amount: f64,
    pub display: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JoinPanel {
    /// Whether the join form is offered at all
    pub open: bool,
    pub max_passengers: u32,
    pub hint: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WalkDetailResponse {
    #[serde(flatten)]
    pub chrome: PageChrome,
    pub walk: WalkCard,
    pub status: WalkStatus,
    pub organizer_initial: String,
    pub dropoff_location: Option<String>,
    pub costs: Vec<CostLine>,
    pub join: JoinPanel,
}

fn format_sgd(amount: f64) -> String {
    format!("${:.2} SGD", amount)
}

async fn get_walk(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<Json<WalkDetailResponse>> {
    let session = load_session(&jar);
    let walk = find_walk(&state, &id)?;
    let now = state.now();
    let status = walk.status(now);
    let trip = state.walks.trip(walk.id);

    let costs = trip
        .map(|t| {
            [
                ("Base Cost", t.base_cost),
                ("Total Cost", t.total_cost),
                ("Per Person (if full)", t.per_person_cost),
            ]
            .into_iter()
            .map(|(label, amount)| CostLine {
                label: label.to_string(),
                amount,
                display: format_sgd(amount),
            })
            .collect()
        })
        .unwrap_or_default();

    let spots_left = walk.spots_left();
    Ok(Json(WalkDetailResponse {
        chrome: PageChrome::for_session(&session),
        walk: WalkCard::new(walk, now, state.config.community_offset),
        status,
        organizer_initial: walk.organizer.chars().take(1).collect(),
        dropoff_location: trip.map(|t| t.dropoff_location.clone()),
        costs,
        join: JoinPanel {
            open: status == WalkStatus::Open,
            max_passengers: spots_left,
            hint: format!("{} spots left.", spots_left),
        },
    }))
}

async fn join_walk(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<JoinRequest>, JsonRejection>,
) -> Result<Json<Ack>> {
    let walk = find_walk(&state, &id)?;
    let Json(request) = payload?;
    if walk.status(state.now()) == WalkStatus::Completed {
        return Err(AppError::BadRequest(format!(
            "Walk {} has already departed",
            walk.id
        )));
    }
    let plan = validate_join(walk, &request)?;
    Ok(Json(state.sink.join_walk(&plan)?))
}

// ─── Create Walk ─────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CreateWalkQuery {
    direction: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateWalkView {
    #[serde(flatten)]
    pub chrome: PageChrome,
    pub directions: Vec<Choice>,
    pub meetup_spots: Vec<Choice>,
    pub show_custom_field: bool,
    pub time_flexibility: Vec<Choice>,
    /// `datetime-local` default (now, in community time)
    pub default_date_time: String,
    pub default_max_participants: u32,
    pub max_participants_limit: u32,
    pub default_participants_at_location: u32,
}

/// Empty form for the chosen direction.
async fn get_create_walk(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<CreateWalkQuery>,
) -> Result<Json<CreateWalkView>> {
    let session = load_session(&jar);
    let mut form = CreateWalkForm::new();
    if let Some(raw) = query.direction.as_deref() {
        let direction: Direction = raw.parse().map_err(|_| {
            AppError::BadRequest(format!("Invalid 'direction' parameter: {}", raw))
        })?;
        form.set_direction(direction);
    }

    let selected_spot = match form.meetup_spot() {
        MeetupSpot::Listed(spot) => spot.as_str(),
        MeetupSpot::Custom => CUSTOM_SPOT,
    };
    let mut meetup_spots: Vec<Choice> = meetup_options(form.direction())
        .options
        .iter()
        .map(|spot| Choice {
            value: spot.to_string(),
            label: spot.to_string(),
            selected: *spot == selected_spot,
        })
        .collect();
    meetup_spots.push(Choice {
        value: CUSTOM_SPOT.to_string(),
        label: "Somewhere else".to_string(),
        selected: selected_spot == CUSTOM_SPOT,
    });

    Ok(Json(CreateWalkView {
        chrome: PageChrome::for_session(&session),
        directions: Direction::ALL
            .into_iter()
            .map(|d| Choice {
                value: d.as_str().to_string(),
                label: d.label().to_string(),
                selected: d == form.direction(),
            })
            .collect(),
        meetup_spots,
        show_custom_field: form.show_custom_field(),
        time_flexibility: TimeFlexibility::ALL
            .into_iter()
            .map(|f| Choice {
                value: f.as_str().to_string(),
                label: f.label().to_string(),
                selected: f == TimeFlexibility::default(),
            })
            .collect(),
        default_date_time: format_datetime_local(state.now(), state.config.community_offset),
        default_max_participants: DEFAULT_MAX_PARTICIPANTS,
        max_participants_limit: MAX_PARTICIPANTS_LIMIT,
        default_participants_at_location: 1,
    }))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreateWalkResponse {
    #[serde(flatten)]
    pub ack: Ack,
    /// How the walk would appear in the listing
    pub preview: WalkCard,
}

async fn create_walk(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<CreateWalkInput>, JsonRejection>,
) -> Result<Json<CreateWalkResponse>> {
    let Json(input) = payload?;
    let offset = state.config.community_offset;
    let walk = CreateWalkForm::submit_input(input, offset)?;
    let ack = state.sink.create_walk(&walk)?;

    let record = walk
        .into_record(state.walks.next_id(), PREVIEW_ORGANIZER)
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok(Json(CreateWalkResponse {
        ack,
        preview: WalkCard::new(&record, state.now(), offset),
    }))
}
