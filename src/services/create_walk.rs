// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk creation form: direction-dependent meetup spots, validation, and
//! the candidate walk produced on submit.

use crate::error::{FieldError, FieldErrorKind, FormErrors};
use crate::models::walk::UnknownValue;
use crate::models::{Direction, WalkRecord, WalkRecordError};
use crate::time_utils::parse_datetime_local;
use crate::validation::parse_count;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use validator::Validate;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Wire value of the "somewhere else" meetup choice.
pub const CUSTOM_SPOT: &str = "custom";

pub const DEFAULT_MAX_PARTICIPANTS: u32 = 5;
pub const MAX_PARTICIPANTS_LIMIT: u32 = 20;

/// Meetup spots offered for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeetupOptions {
    pub options: &'static [&'static str],
    pub default: &'static str,
}

impl MeetupOptions {
    pub fn contains(&self, spot: &str) -> bool {
        self.options.contains(&spot)
    }
}

/// Meetup spots available when leaving from each end.
pub fn meetup_options(direction: Direction) -> MeetupOptions {
    match direction {
        Direction::MarinaToCoworking => MeetupOptions {
            options: &["NS Cafe", "Marina Hotel Lobby"],
            default: "NS Cafe",
        },
        Direction::CoworkingToMarina => MeetupOptions {
            options: &["Near Entrance NS-Coworking", "NS-Coworking Lobby"],
            default: "Near Entrance NS-Coworking",
        },
    }
}

/// Selected meetup spot: one of the direction's options, or free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetupSpot {
    Listed(String),
    Custom,
}

impl MeetupSpot {
    fn default_for(direction: Direction) -> Self {
        MeetupSpot::Listed(meetup_options(direction).default.to_string())
    }

    /// Parse a form value; [`CUSTOM_SPOT`] selects free text.
    pub fn from_wire(value: &str) -> Self {
        if value == CUSTOM_SPOT {
            MeetupSpot::Custom
        } else {
            MeetupSpot::Listed(value.to_string())
        }
    }
}

/// How strictly the organizer keeps to the departure time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFlexibility {
    #[default]
    OnTime,
    Flexible,
}

impl TimeFlexibility {
    pub const ALL: [TimeFlexibility; 2] = [TimeFlexibility::OnTime, TimeFlexibility::Flexible];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeFlexibility::OnTime => "on-time",
            TimeFlexibility::Flexible => "flexible",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFlexibility::OnTime => "On time",
            TimeFlexibility::Flexible => "Flexible",
        }
    }
}

impl FromStr for TimeFlexibility {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeFlexibility::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

/// Raw form submission as posted by the browser.
///
/// Enumerations stay strings and counts stay loose JSON so that bad values
/// surface as field errors rather than body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateWalkInput {
    pub direction: Option<String>,
    pub meetup_spot: Option<String>,
    pub custom_meetup_spot: Option<String>,
    /// `datetime-local` value, e.g. "2025-05-04T16:30"
    pub date_time: Option<String>,
    pub time_flexibility: Option<String>,
    pub discussion_topic: Option<String>,
    /// Number or numeric text
    pub max_participants: Option<Value>,
    pub participants_at_location: Option<Value>,
    pub pickup_location: Option<String>,
    pub location_details: Option<String>,
}

/// A validated walk-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewWalk {
    pub direction: Direction,
    /// Resolved meetup spot (listed option or custom text)
    pub meetup_spot: String,
    pub date_time: DateTime<Utc>,
    pub time_flexibility: TimeFlexibility,
    pub discussion_topic: Option<String>,
    pub max_participants: u32,
    pub participants_at_location: u32,
    pub pickup_location: String,
    pub location_details: Option<String>,
}

impl NewWalk {
    /// Listing record for this walk; the organizer's group fills the first spots.
    pub fn into_record(self, id: u64, organizer: &str) -> Result<WalkRecord, WalkRecordError> {
        Ok(WalkRecord::new(
            id,
            self.direction,
            organizer,
            self.date_time,
            self.meetup_spot,
            self.max_participants,
            self.participants_at_location,
        )?
        .with_discussion_topic(self.discussion_topic))
    }
}

/// Form state for one "create a walk" session.
#[derive(Debug, Clone, Validate)]
pub struct CreateWalkForm {
    direction: Direction,
    meetup_spot: MeetupSpot,
    custom_meetup_spot: String,
    #[validate(required)]
    date_time: Option<DateTime<Utc>>,
    time_flexibility: TimeFlexibility,
    discussion_topic: Option<String>,
    #[validate(range(min = 1, max = 20))]
    max_participants: u32,
    #[validate(range(min = 1))]
    participants_at_location: u32,
    #[validate(custom(function = "crate::validation::not_blank"))]
    pickup_location: String,
    location_details: Option<String>,
}

impl Default for CreateWalkForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateWalkForm {
    pub fn new() -> Self {
        let direction = Direction::default();
        Self {
            direction,
            meetup_spot: MeetupSpot::default_for(direction),
            custom_meetup_spot: String::new(),
            date_time: None,
            time_flexibility: TimeFlexibility::default(),
            discussion_topic: None,
            max_participants: DEFAULT_MAX_PARTICIPANTS,
            participants_at_location: 1,
            pickup_location: String::new(),
            location_details: None,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn meetup_spot(&self) -> &MeetupSpot {
        &self.meetup_spot
    }

    pub fn custom_meetup_spot(&self) -> &str {
        &self.custom_meetup_spot
    }

    /// The free-text input is shown exactly when "custom" is selected.
    pub fn show_custom_field(&self) -> bool {
        self.meetup_spot == MeetupSpot::Custom
    }

    /// Switch direction; always resets the meetup spot to the new default.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.meetup_spot = MeetupSpot::default_for(direction);
        self.custom_meetup_spot.clear();
    }

    pub fn set_meetup_spot(&mut self, spot: MeetupSpot) {
        if spot != MeetupSpot::Custom {
            self.custom_meetup_spot.clear();
        }
        self.meetup_spot = spot;
    }

    /// Ignored unless the custom spot is selected.
    pub fn set_custom_meetup_spot(&mut self, text: impl Into<String>) {
        if self.show_custom_field() {
            self.custom_meetup_spot = text.into();
        }
    }

    pub fn set_date_time(&mut self, date_time: Option<DateTime<Utc>>) {
        self.date_time = date_time;
    }

    pub fn set_time_flexibility(&mut self, flexibility: TimeFlexibility) {
        self.time_flexibility = flexibility;
    }

    pub fn set_discussion_topic(&mut self, topic: Option<String>) {
        self.discussion_topic = topic;
    }

    pub fn set_max_participants(&mut self, max: u32) {
        self.max_participants = max;
    }

    pub fn set_participants_at_location(&mut self, count: u32) {
        self.participants_at_location = count;
    }

    pub fn set_pickup_location(&mut self, location: impl Into<String>) {
        self.pickup_location = location.into();
    }

    pub fn set_location_details(&mut self, details: Option<String>) {
        self.location_details = details;
    }

    /// Build a form from a posted submission.
    ///
    /// Returns the form plus errors that only the raw input can reveal
    /// (absent or unknown direction, malformed counts, unparseable date).
    pub fn from_input(input: CreateWalkInput, offset: FixedOffset) -> (Self, FormErrors) {
        let mut form = Self::new();
        let mut errors = FormErrors::default();

        match non_blank(input.direction).map(|raw| raw.trim().parse::<Direction>()) {
            Some(Ok(direction)) => form.set_direction(direction),
            Some(Err(_)) => errors.push(field_error("direction", FieldErrorKind::InvalidFormat)),
            None => errors.push(field_error("direction", FieldErrorKind::MissingRequiredField)),
        }

        if let Some(spot) = non_blank(input.meetup_spot) {
            form.set_meetup_spot(MeetupSpot::from_wire(&spot));
        }
        if let Some(text) = input.custom_meetup_spot {
            form.set_custom_meetup_spot(text);
        }

        if let Some(raw) = non_blank(input.date_time) {
            let parsed = parse_datetime_local(&raw, offset);
            if parsed.is_none() {
                errors.push(field_error("date_time", FieldErrorKind::InvalidFormat));
            }
            form.set_date_time(parsed);
        }

        if let Some(raw) = non_blank(input.time_flexibility) {
            match raw.trim().parse::<TimeFlexibility>() {
                Ok(flexibility) => form.set_time_flexibility(flexibility),
                Err(_) => errors.push(field_error(
                    "time_flexibility",
                    FieldErrorKind::InvalidFormat,
                )),
            }
        }
        form.set_discussion_topic(non_blank(input.discussion_topic));

        match parse_count(input.max_participants.as_ref()) {
            Ok(n) => form.set_max_participants(clamp_count(n)),
            Err(kind) => errors.push(field_error("max_participants", kind)),
        }
        match parse_count(input.participants_at_location.as_ref()) {
            Ok(n) => form.set_participants_at_location(clamp_count(n)),
            Err(kind) => errors.push(field_error("participants_at_location", kind)),
        }

        form.set_pickup_location(input.pickup_location.unwrap_or_default());
        form.set_location_details(non_blank(input.location_details));

        (form, errors)
    }

    /// Validate a posted submission end to end.
    pub fn submit_input(input: CreateWalkInput, offset: FixedOffset) -> Result<NewWalk, FormErrors> {
        let (form, mut errors) = Self::from_input(input, offset);
        match form.submit() {
            Ok(walk) if errors.is_empty() => Ok(walk),
            Ok(_) => Err(errors),
            Err(mut more) => {
                // A spot can only be checked against a known direction.
                if errors.has_field("direction") {
                    more.fields.retain(|e| e.field != "meetup_spot");
                }
                // Likewise the group size against an unreadable capacity.
                if errors.has_field("max_participants") {
                    more.fields.retain(|e| e.field != "participants_at_location");
                }
                errors.merge(more);
                Err(errors)
            }
        }
    }

    /// Validate every field and produce the candidate walk.
    pub fn submit(&self) -> Result<NewWalk, FormErrors> {
        let mut errors = match self.validate() {
            Ok(()) => FormErrors::default(),
            Err(e) => FormErrors::from(e),
        };
        for error in &mut errors.fields {
            if let Some(message) = field_message(&error.field) {
                error.message = message.to_string();
            }
        }

        let meetup_spot = match &self.meetup_spot {
            MeetupSpot::Custom => {
                let text = self.custom_meetup_spot.trim();
                if text.is_empty() {
                    errors.push(field_error(
                        "custom_meetup_spot",
                        FieldErrorKind::MissingRequiredField,
                    ));
                }
                text.to_string()
            }
            MeetupSpot::Listed(spot) => {
                if !meetup_options(self.direction).contains(spot) {
                    errors.push(field_error("meetup_spot", FieldErrorKind::InvalidFormat));
                }
                spot.clone()
            }
        };

        if !errors.has_field("participants_at_location")
            && !errors.has_field("max_participants")
            && self.participants_at_location > self.max_participants
        {
            errors.push(field_error(
                "participants_at_location",
                FieldErrorKind::OutOfRange,
            ));
        }

        match self.date_time {
            Some(date_time) if errors.is_empty() => Ok(NewWalk {
                direction: self.direction,
                meetup_spot,
                date_time,
                time_flexibility: self.time_flexibility,
                discussion_topic: self.discussion_topic.clone(),
                max_participants: self.max_participants,
                participants_at_location: self.participants_at_location,
                pickup_location: self.pickup_location.trim().to_string(),
                location_details: self.location_details.clone(),
            }),
            _ => Err(errors),
        }
    }
}

fn field_message(field: &str) -> Option<&'static str> {
    match field {
        "direction" => Some("Please choose a direction"),
        "date_time" => Some("Please select a valid date and time"),
        "max_participants" => Some("Please enter a valid number between 1 and 20"),
        "participants_at_location" => Some("Please enter a valid number of participants"),
        "pickup_location" => Some("Please enter your pickup location"),
        "meetup_spot" => Some("Please choose a meetup spot for this direction"),
        "custom_meetup_spot" => Some("Please describe where to meet"),
        "time_flexibility" => Some("Please choose how flexible the departure time is"),
        _ => None,
    }
}

fn field_error(field: &str, kind: FieldErrorKind) -> FieldError {
    let error = FieldError::new(field, kind);
    match field_message(field) {
        Some(message) => error.with_message(message),
        None => error,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Negative counts become 0 so the range check reports them.
fn clamp_count(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}
