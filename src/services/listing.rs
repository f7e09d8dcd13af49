// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Walk listing: filter/sort engine and the listing view state.

use crate::models::{Direction, FilterSelection, SortOrder, TimeClass, WalkRecord};
use crate::services::dropdown::{
    DropdownController, ListenerGuard, ListenerRegistry, MenuEvent, MenuId,
};
use crate::time_utils::format_display;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Shown instead of the list when nothing survives the filters.
pub const EMPTY_LISTING_MESSAGE: &str = "No walks match your filters";

/// Select and order the walks to display.
///
/// Keeps walks matching the direction and time filters, then sorts them by
/// departure. The sort is stable, so walks sharing a timestamp keep their
/// input order under both sort orders.
pub fn select_walks(
    all: &[WalkRecord],
    selection: &FilterSelection,
    now: DateTime<Utc>,
) -> Vec<WalkRecord> {
    let mut selected: Vec<WalkRecord> = all
        .iter()
        .filter(|w| selection.direction.admits(w.direction))
        .filter(|w| selection.time.admits(w.date_time, now))
        .cloned()
        .collect();

    match selection.sort {
        SortOrder::Earliest => selected.sort_by(|a, b| a.date_time.cmp(&b.date_time)),
        SortOrder::Latest => selected.sort_by(|a, b| b.date_time.cmp(&a.date_time)),
    }

    selected
}

/// One walk as rendered in the listing.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WalkCard {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub id: u64,
    pub title: String,
    pub organizer: String,
    pub direction: Direction,
    /// RFC3339 departure instant
    pub date_time: String,
    /// Localized departure, e.g. "Sun, May 4, 2025, 12:10 PM"
    pub when: String,
    pub meetup_spot: String,
    pub participants: String,
    pub spots_left: u32,
    pub discussion_topic: Option<String>,
    #[cfg_attr(feature = "binding-generation", ts(skip))]
    pub time_class: TimeClass,
    pub href: String,
}

impl WalkCard {
    pub fn new(walk: &WalkRecord, now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self {
            id: walk.id,
            title: walk.title.clone(),
            organizer: walk.organizer.clone(),
            direction: walk.direction,
            date_time: crate::time_utils::format_utc_rfc3339(walk.date_time),
            when: format_display(walk.date_time, offset),
            meetup_spot: walk.meetup_spot.clone(),
            participants: walk.participants_label(),
            spots_left: walk.spots_left(),
            discussion_topic: walk.discussion_topic.clone(),
            time_class: TimeClass::of(walk.date_time, now),
            href: format!("/walks/{}", walk.id),
        }
    }
}

/// One selectable entry of a filter menu.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MenuOptionView {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A filter menu with its caption and open state.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MenuView {
    pub menu: String,
    pub label: String,
    pub open: bool,
    pub options: Vec<MenuOptionView>,
}

/// Everything the listing section renders.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ListingSnapshot {
    pub filters: Vec<MenuView>,
    pub walks: Vec<WalkCard>,
    pub empty_message: Option<String>,
}

/// Per-mount listing state: filter selection plus open-menu tracking.
///
/// Mounting registers the outside-click listener; dropping the view
/// releases it.
#[derive(Debug)]
pub struct ListingView {
    selection: FilterSelection,
    menus: DropdownController,
    _listener: ListenerGuard,
}

impl ListingView {
    pub fn mount(listeners: &ListenerRegistry) -> Self {
        Self {
            selection: FilterSelection::default(),
            menus: DropdownController::default(),
            _listener: listeners.register(),
        }
    }

    pub fn with_selection(mut self, selection: FilterSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn menus(&self) -> &DropdownController {
        &self.menus
    }

    pub fn dispatch(&mut self, event: MenuEvent) {
        self.menus.apply(&mut self.selection, event);
    }

    pub fn render(
        &self,
        walks: &[WalkRecord],
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> ListingSnapshot {
        let filters = MenuId::ALL
            .into_iter()
            .map(|menu| {
                let current = menu.current(&self.selection);
                MenuView {
                    menu: menu.as_str().to_string(),
                    label: current.label().to_string(),
                    open: self.menus.is_open(menu),
                    options: menu
                        .options()
                        .into_iter()
                        .map(|option| MenuOptionView {
                            value: option.value().to_string(),
                            label: option.label().to_string(),
                            selected: option == current,
                        })
                        .collect(),
                }
            })
            .collect();

        let walks: Vec<WalkCard> = select_walks(walks, &self.selection, now)
            .iter()
            .map(|w| WalkCard::new(w, now, offset))
            .collect();

        let empty_message = walks
            .is_empty()
            .then(|| EMPTY_LISTING_MESSAGE.to_string());

        ListingSnapshot {
            filters,
            walks,
            empty_message,
        }
    }
}
