// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory walk store seeded with the community's mock listings.

use crate::models::{Direction, TripDetails, WalkRecord, WalkRecordError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::HashMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Headline counters shown on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CommunityStats {
    pub total_walks: u32,
    pub total_users: u32,
}

/// Ordered, read-only collection of walk listings.
#[derive(Debug, Default, Clone)]
pub struct WalkStore {
    walks: Vec<WalkRecord>,
    trips: HashMap<u64, TripDetails>,
    stats: Option<CommunityStats>,
}

impl WalkStore {
    /// Store seeded with the three demo walks of early May 2025.
    pub fn with_mock_data() -> Self {
        let organizer = "Genesis Dayrit";
        let mut store = Self {
            stats: Some(CommunityStats {
                total_walks: 58,
                total_users: 95,
            }),
            ..Self::default()
        };

        // Times are 12:10, 16:30 and 10:00 SGT.
        let seed = [
            (
                1,
                Direction::MarinaToCoworking,
                mock_time(2025, 5, 4, 4, 10),
                "NS Cafe",
                1,
                "Future of education",
            ),
            (
                2,
                Direction::CoworkingToMarina,
                mock_time(2025, 5, 4, 8, 30),
                "Near Entrance NS-Coworking",
                1,
                "Tech trends in 2025",
            ),
            (
                3,
                Direction::MarinaToCoworking,
                mock_time(2025, 5, 2, 2, 0),
                "NS Cafe",
                3,
                "Travel photography",
            ),
        ];

        for (id, direction, date_time, meetup_spot, taken, topic) in seed {
            let record =
                match WalkRecord::new(id, direction, organizer, date_time, meetup_spot, 5, taken) {
                    Ok(record) => record.with_discussion_topic(Some(topic.to_string())),
                    Err(e) => {
                        tracing::warn!(error = %e, "Skipping invalid mock walk");
                        continue;
                    }
                };
            let trip = TripDetails {
                base_cost: 80.0,
                total_cost: 80.0,
                per_person_cost: 16.0,
                dropoff_location: match direction {
                    Direction::MarinaToCoworking => "NS-Coworking main entrance".to_string(),
                    Direction::CoworkingToMarina => "1 Cluny Rd".to_string(),
                },
            };
            if let Err(e) = store.insert(record, Some(trip)) {
                tracing::warn!(error = %e, "Skipping invalid mock walk");
            }
        }

        tracing::debug!(count = store.len(), "Loaded mock walks");
        store
    }

    /// Append a walk; ids must be unique.
    pub fn insert(
        &mut self,
        record: WalkRecord,
        trip: Option<TripDetails>,
    ) -> Result<(), WalkRecordError> {
        if self.get(record.id).is_some() {
            return Err(WalkRecordError::DuplicateId(record.id));
        }
        if let Some(trip) = trip {
            self.trips.insert(record.id, trip);
        }
        self.walks.push(record);
        Ok(())
    }

    /// All walks in insertion order.
    pub fn all(&self) -> &[WalkRecord] {
        &self.walks
    }

    pub fn get(&self, id: u64) -> Option<&WalkRecord> {
        self.walks.iter().find(|w| w.id == id)
    }

    pub fn trip(&self, id: u64) -> Option<&TripDetails> {
        self.trips.get(&id)
    }

    pub fn len(&self) -> usize {
        self.walks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walks.is_empty()
    }

    /// Community counters; falls back to the store's own size.
    pub fn community_stats(&self) -> CommunityStats {
        self.stats.unwrap_or(CommunityStats {
            total_walks: self.walks.len() as u32,
            total_users: 0,
        })
    }

    /// Next free id for a newly created walk.
    pub fn next_id(&self) -> u64 {
        self.walks.iter().map(|w| w.id).max().unwrap_or(0) + 1
    }
}

fn mock_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("mock walk times are valid")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_data_loads() {
        let store = WalkStore::with_mock_data();
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.all().iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(store.get(2).unwrap().direction, Direction::CoworkingToMarina);
        assert_eq!(store.trip(2).unwrap().dropoff_location, "1 Cluny Rd");
        assert_eq!(
            store.community_stats(),
            CommunityStats {
                total_walks: 58,
                total_users: 95
            }
        );
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut store = WalkStore::with_mock_data();
        let mut walk = store.get(1).unwrap().clone();

        assert_eq!(
            store.insert(walk.clone(), None),
            Err(WalkRecordError::DuplicateId(1))
        );
        assert_eq!(store.len(), 3);

        walk.id = 10;
        assert_eq!(store.insert(walk, None), Ok(()));
        assert_eq!(store.next_id(), 11);
    }

    #[test]
    fn test_mock_walks_respect_capacity() {
        let store = WalkStore::with_mock_data();
        let taken: Vec<_> = store.all().iter().map(|w| (w.taken(), w.capacity())).collect();
        assert_eq!(taken, vec![(1, 5), (1, 5), (3, 5)]);
    }

    #[test]
    fn test_empty_store_stats_fall_back() {
        let store = WalkStore::default();
        assert!(store.is_empty());
        assert_eq!(store.community_stats().total_walks, 0);
        assert_eq!(store.next_id(), 1);
    }
}
