// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Filter and sort selections for the walk listing.

use super::walk::{Direction, UnknownValue};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

/// Which directions to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionFilter {
    #[default]
    All,
    Only(Direction),
}

impl DirectionFilter {
    pub const ALL: [DirectionFilter; 3] = [
        DirectionFilter::All,
        DirectionFilter::Only(Direction::MarinaToCoworking),
        DirectionFilter::Only(Direction::CoworkingToMarina),
    ];

    pub fn admits(self, direction: Direction) -> bool {
        match self {
            DirectionFilter::All => true,
            DirectionFilter::Only(wanted) => wanted == direction,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DirectionFilter::All => "all",
            DirectionFilter::Only(d) => d.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DirectionFilter::All => "All Walks",
            DirectionFilter::Only(d) => d.label(),
        }
    }
}

impl FromStr for DirectionFilter {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(DirectionFilter::All);
        }
        s.parse().map(DirectionFilter::Only)
    }
}

/// Whether a walk lies ahead of or behind "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeClass {
    Upcoming,
    Past,
}

impl TimeClass {
    /// Half-open split: a walk departing exactly at `now` is still upcoming.
    pub fn of(date_time: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if date_time >= now {
            TimeClass::Upcoming
        } else {
            TimeClass::Past
        }
    }
}

/// Which walks to show relative to the current time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    #[default]
    Upcoming,
    Past,
    All,
}

impl TimeFilter {
    pub const ALL: [TimeFilter; 3] = [TimeFilter::Upcoming, TimeFilter::Past, TimeFilter::All];

    pub fn admits(self, date_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            TimeFilter::All => true,
            TimeFilter::Upcoming => TimeClass::of(date_time, now) == TimeClass::Upcoming,
            TimeFilter::Past => TimeClass::of(date_time, now) == TimeClass::Past,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeFilter::Upcoming => "upcoming",
            TimeFilter::Past => "past",
            TimeFilter::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeFilter::Upcoming => "Upcoming Walks",
            TimeFilter::Past => "Past Walks",
            TimeFilter::All => "All Walks",
        }
    }
}

impl FromStr for TimeFilter {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeFilter::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

/// Listing order by departure time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Earliest,
    Latest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Earliest, SortOrder::Latest];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Earliest => "earliest",
            SortOrder::Latest => "latest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Earliest => "Earliest First",
            SortOrder::Latest => "Latest First",
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

/// The three listing selections. Defaults to all directions, upcoming, earliest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub direction: DirectionFilter,
    pub time: TimeFilter,
    pub sort: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_defaults() {
        let selection = FilterSelection::default();
        assert_eq!(selection.direction, DirectionFilter::All);
        assert_eq!(selection.time, TimeFilter::Upcoming);
        assert_eq!(selection.sort, SortOrder::Earliest);
    }

    #[test]
    fn test_boundary_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2025, 5, 3, 0, 0, 0).unwrap();
        assert_eq!(TimeClass::of(now, now), TimeClass::Upcoming);
        assert!(TimeFilter::Upcoming.admits(now, now));
        assert!(!TimeFilter::Past.admits(now, now));

        let just_before = now - Duration::seconds(1);
        assert!(TimeFilter::Past.admits(just_before, now));
        assert!(!TimeFilter::Upcoming.admits(just_before, now));
    }

    #[test]
    fn test_parse_wire_values() {
        assert_eq!("all".parse::<DirectionFilter>(), Ok(DirectionFilter::All));
        assert_eq!(
            "coworking-to-marina".parse::<DirectionFilter>(),
            Ok(DirectionFilter::Only(Direction::CoworkingToMarina))
        );
        assert!("sideways".parse::<DirectionFilter>().is_err());
        assert_eq!("past".parse::<TimeFilter>(), Ok(TimeFilter::Past));
        assert_eq!("latest".parse::<SortOrder>(), Ok(SortOrder::Latest));
        assert!("newest".parse::<SortOrder>().is_err());
    }
}
