// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod create_walk;
pub mod dropdown;
pub mod join;
pub mod listing;
pub mod persistence;
pub mod profile;
pub mod session;
pub mod walks;

pub use create_walk::{meetup_options, CreateWalkForm, CreateWalkInput, MeetupSpot, NewWalk};
pub use dropdown::{DropdownController, ListenerRegistry, MenuEvent, MenuId, MenuOption, PointerTarget};
pub use join::{validate_join, JoinPlan, JoinRequest};
pub use listing::{select_walks, ListingView};
pub use persistence::{Ack, LoggingSink, WalkSink};
pub use profile::ProfileForm;
pub use session::{CookieStorage, MemoryStorage, Session, SessionStorage};
pub use walks::WalkStore;
