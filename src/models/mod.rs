// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod filter;
pub mod profile;
pub mod walk;

pub use filter::{DirectionFilter, FilterSelection, SortOrder, TimeClass, TimeFilter};
pub use profile::ProfileUpdate;
pub use walk::{Direction, TripDetails, WalkRecord, WalkRecordError, WalkStatus};
