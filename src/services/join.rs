// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! "Join this walk" request validation.

use crate::error::{FieldError, FieldErrorKind, FormErrors};
use crate::models::WalkRecord;
use serde::{Deserialize, Serialize};

/// Join request as posted from the walk detail page.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinRequest {
    #[serde(default = "default_passengers")]
    pub passengers: i64,
    #[serde(default)]
    pub dropoff_location: String,
}

fn default_passengers() -> i64 {
    1
}

/// A join request that fits the walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinPlan {
    pub walk_id: u64,
    pub passengers: u32,
    pub dropoff_location: String,
}

/// Check a join request against the walk's remaining spots.
pub fn validate_join(walk: &WalkRecord, request: &JoinRequest) -> Result<JoinPlan, FormErrors> {
    let mut errors = FormErrors::default();
    let spots_left = walk.spots_left();

    let passengers = u32::try_from(request.passengers).ok().filter(|n| *n >= 1);
    match passengers {
        Some(n) if n <= spots_left => {}
        _ => errors.push(
            FieldError::new("passengers", FieldErrorKind::OutOfRange).with_message(
                if spots_left == 0 {
                    "This walk is full".to_string()
                } else {
                    format!("Maximum {spots_left} passengers allowed")
                },
            ),
        ),
    }

    let dropoff_location = request.dropoff_location.trim();
    if dropoff_location.is_empty() {
        errors.push(
            FieldError::new("dropoff_location", FieldErrorKind::MissingRequiredField)
                .with_message("Please tell us where to drop you off"),
        );
    }

    errors.into_result()?;
    Ok(JoinPlan {
        walk_id: walk.id,
        passengers: passengers.unwrap_or(1),
        dropoff_location: dropoff_location.to_string(),
    })
}
