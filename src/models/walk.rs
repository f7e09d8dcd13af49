// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Shared walk model: direction, listing record, and detail-page extras.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One of the two fixed travel directions between Marina Hotel and NS-Coworking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    MarinaToCoworking,
    CoworkingToMarina,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::MarinaToCoworking, Direction::CoworkingToMarina];

    /// Wire value, as used in query strings and form posts.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::MarinaToCoworking => "marina-to-coworking",
            Direction::CoworkingToMarina => "coworking-to-marina",
        }
    }

    /// Caption used in the direction picker.
    pub fn label(self) -> &'static str {
        match self {
            Direction::MarinaToCoworking => "From Marina Hotel to NS-Coworking",
            Direction::CoworkingToMarina => "From NS-Coworking to Marina Hotel",
        }
    }

    /// Title given to walks heading this way.
    pub fn walk_title(self) -> &'static str {
        match self {
            Direction::MarinaToCoworking => "From Marina Hotel to NS Coworking",
            Direction::CoworkingToMarina => "From NS Coworking to Marina Hotel",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

/// A string that names no known enum value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0:?}")]
pub struct UnknownValue(pub String);

/// A shared-walk listing.
///
/// Built through [`WalkRecord::new`], which keeps `1 <= capacity` and
/// `taken <= capacity`. Deserialized records go through the same check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WalkRecordWire")]
pub struct WalkRecord {
    pub id: u64,
    /// Display title, derived from the direction
    pub title: String,
    /// Organizer's display name
    pub organizer: String,
    /// Scheduled departure
    pub date_time: DateTime<Utc>,
    /// Where participants gather
    pub meetup_spot: String,
    capacity: u32,
    taken: u32,
    pub direction: Direction,
    pub discussion_topic: Option<String>,
}

#[derive(Deserialize)]
struct WalkRecordWire {
    id: u64,
    organizer: String,
    date_time: DateTime<Utc>,
    meetup_spot: String,
    capacity: u32,
    taken: u32,
    direction: Direction,
    #[serde(default)]
    discussion_topic: Option<String>,
}

impl TryFrom<WalkRecordWire> for WalkRecord {
    type Error = WalkRecordError;

    fn try_from(wire: WalkRecordWire) -> Result<Self, Self::Error> {
        Ok(WalkRecord::new(
            wire.id,
            wire.direction,
            wire.organizer,
            wire.date_time,
            wire.meetup_spot,
            wire.capacity,
            wire.taken,
        )?
        .with_discussion_topic(wire.discussion_topic))
    }
}

/// Whether a walk is still joinable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "snake_case")]
pub enum WalkStatus {
    Open,
    Closed,
    Completed,
}

impl WalkRecord {
    pub fn new(
        id: u64,
        direction: Direction,
        organizer: impl Into<String>,
        date_time: DateTime<Utc>,
        meetup_spot: impl Into<String>,
        capacity: u32,
        taken: u32,
    ) -> Result<Self, WalkRecordError> {
        if capacity == 0 {
            return Err(WalkRecordError::ZeroCapacity { id });
        }
        if taken > capacity {
            return Err(WalkRecordError::OverCapacity {
                id,
                taken,
                capacity,
            });
        }
        Ok(Self {
            id,
            title: direction.walk_title().to_string(),
            organizer: organizer.into(),
            date_time,
            meetup_spot: meetup_spot.into(),
            capacity,
            taken,
            direction,
            discussion_topic: None,
        })
    }

    pub fn with_discussion_topic(mut self, topic: Option<String>) -> Self {
        self.discussion_topic = topic;
        self
    }

    /// Maximum participants (>= 1)
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Spots already taken (<= capacity)
    pub fn taken(&self) -> u32 {
        self.taken
    }

    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.taken)
    }

    pub fn participants_label(&self) -> String {
        format!("{}/{} participants", self.taken, self.capacity)
    }

    /// Completed once departed, Closed when full, Open otherwise.
    pub fn status(&self, now: DateTime<Utc>) -> WalkStatus {
        if self.date_time < now {
            WalkStatus::Completed
        } else if self.spots_left() == 0 {
            WalkStatus::Closed
        } else {
            WalkStatus::Open
        }
    }
}

/// Precomputed trip figures shown on the detail page.
///
/// These come from the data source as-is; nothing here splits costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TripDetails {
    /// Base cost in SGD
    pub base_cost: f64,
    /// Total cost in SGD
    pub total_cost: f64,
    /// Cost per person if the walk fills up, in SGD
    pub per_person_cost: f64,
    pub dropoff_location: String,
}

/// Violations of the walk record invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkRecordError {
    #[error("walk {id}: capacity must be at least 1")]
    ZeroCapacity { id: u64 },

    #[error("walk {id}: {taken} spots taken exceeds capacity {capacity}")]
    OverCapacity { id: u64, taken: u32, capacity: u32 },

    #[error("walk {0} already exists")]
    DuplicateId(u64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn walk(capacity: u32, taken: u32) -> Result<WalkRecord, WalkRecordError> {
        WalkRecord::new(
            7,
            Direction::CoworkingToMarina,
            "Danny",
            Utc.with_ymd_and_hms(2025, 5, 6, 2, 53, 0).unwrap(),
            "Near Entrance NS-Coworking",
            capacity,
            taken,
        )
    }

    #[test]
    fn test_direction_wire_values() {
        for direction in Direction::ALL {
            assert_eq!(direction.as_str().parse::<Direction>(), Ok(direction));
        }
        assert!("singapore-to-forest-city".parse::<Direction>().is_err());
        assert_eq!(
            serde_json::to_string(&Direction::CoworkingToMarina).unwrap(),
            "\"coworking-to-marina\""
        );
    }

    #[test]
    fn test_capacity_invariants() {
        assert!(walk(4, 1).is_ok());
        assert!(walk(4, 4).is_ok());
        assert_eq!(walk(0, 0), Err(WalkRecordError::ZeroCapacity { id: 7 }));
        assert!(matches!(
            walk(4, 5),
            Err(WalkRecordError::OverCapacity { taken: 5, .. })
        ));
        assert_eq!(
            walk(4, 1).unwrap().title,
            "From NS Coworking to Marina Hotel"
        );
    }

    #[test]
    fn test_deserialize_enforces_capacity() {
        let mut json = serde_json::json!({
            "id": 9,
            "organizer": "Danny",
            "date_time": "2025-05-06T02:53:00Z",
            "meetup_spot": "NS Cafe",
            "capacity": 0,
            "taken": 7,
            "direction": "marina-to-coworking",
        });
        assert!(serde_json::from_value::<WalkRecord>(json.clone()).is_err());

        json["capacity"] = 5.into();
        assert!(serde_json::from_value::<WalkRecord>(json.clone()).is_err());

        json["taken"] = 2.into();
        let record: WalkRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.participants_label(), "2/5 participants");
        assert_eq!(record.title, "From Marina Hotel to NS Coworking");

        let round_trip: WalkRecord =
            serde_json::from_value(serde_json::to_value(&record).unwrap()).unwrap();
        assert_eq!(round_trip, record);
    }

    #[test]
    fn test_status() {
        let before = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 5, 7, 0, 0, 0).unwrap();

        assert_eq!(walk(4, 1).unwrap().status(before), WalkStatus::Open);
        assert_eq!(walk(4, 4).unwrap().status(before), WalkStatus::Closed);
        assert_eq!(walk(4, 1).unwrap().status(after), WalkStatus::Completed);
        assert_eq!(walk(4, 1).unwrap().participants_label(), "1/4 participants");
        assert_eq!(walk(4, 1).unwrap().spots_left(), 3);
    }
}
