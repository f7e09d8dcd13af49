// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistence collaborator for form submissions.
//!
//! The prototype has no backing store: [`LoggingSink`] records each request
//! in the log and acknowledges it.

use crate::error::AppError;
use crate::models::ProfileUpdate;
use crate::services::create_walk::NewWalk;
use crate::services::join::JoinPlan;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Acknowledgement shown to the user after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Ack {
    pub success: bool,
    pub message: String,
}

impl Ack {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Where validated submissions go. Single attempt, no retries.
pub trait WalkSink: Send + Sync {
    fn create_walk(&self, walk: &NewWalk) -> Result<Ack, AppError>;
    fn update_profile(&self, update: &ProfileUpdate) -> Result<Ack, AppError>;
    fn join_walk(&self, plan: &JoinPlan) -> Result<Ack, AppError>;
}

/// Logs submissions and acknowledges them without storing anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl WalkSink for LoggingSink {
    fn create_walk(&self, walk: &NewWalk) -> Result<Ack, AppError> {
        tracing::info!(
            direction = %walk.direction,
            date_time = %walk.date_time,
            meetup_spot = %walk.meetup_spot,
            max_participants = walk.max_participants,
            "Walk creation submitted"
        );
        Ok(Ack::ok("Walk created successfully!"))
    }

    fn update_profile(&self, update: &ProfileUpdate) -> Result<Ack, AppError> {
        tracing::info!(name = %update.name, "Profile update submitted");
        Ok(Ack::ok("Profile updated successfully!"))
    }

    fn join_walk(&self, plan: &JoinPlan) -> Result<Ack, AppError> {
        tracing::info!(
            walk_id = plan.walk_id,
            passengers = plan.passengers,
            dropoff = %plan.dropoff_location,
            "Join request submitted"
        );
        Ok(Ack::ok("Join request sent!"))
    }
}
