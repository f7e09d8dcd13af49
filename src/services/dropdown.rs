// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exclusive dropdown menus for the listing filters.
//!
//! At most one menu is open at a time. Events are reduced in arrival order:
//! a pointer-down on a menu's own toggle lands inside that menu's container,
//! so it never dismisses the menu the following toggle opens.

use crate::models::{DirectionFilter, FilterSelection, SortOrder, TimeFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// The filter menus on the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuId {
    Direction,
    Time,
    Sort,
}

impl MenuId {
    pub const ALL: [MenuId; 3] = [MenuId::Direction, MenuId::Time, MenuId::Sort];

    pub fn as_str(self) -> &'static str {
        match self {
            MenuId::Direction => "direction",
            MenuId::Time => "time",
            MenuId::Sort => "sort",
        }
    }

    /// Options in display order.
    pub fn options(self) -> Vec<MenuOption> {
        match self {
            MenuId::Direction => DirectionFilter::ALL
                .into_iter()
                .map(MenuOption::Direction)
                .collect(),
            MenuId::Time => TimeFilter::ALL.into_iter().map(MenuOption::Time).collect(),
            MenuId::Sort => SortOrder::ALL.into_iter().map(MenuOption::Sort).collect(),
        }
    }

    /// The option this menu currently shows as selected.
    pub fn current(self, selection: &FilterSelection) -> MenuOption {
        match self {
            MenuId::Direction => MenuOption::Direction(selection.direction),
            MenuId::Time => MenuOption::Time(selection.time),
            MenuId::Sort => MenuOption::Sort(selection.sort),
        }
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuId {
    type Err = crate::models::walk::UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuId::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| crate::models::walk::UnknownValue(s.to_string()))
    }
}

/// A single choice in one of the menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Direction(DirectionFilter),
    Time(TimeFilter),
    Sort(SortOrder),
}

impl MenuOption {
    pub fn menu(self) -> MenuId {
        match self {
            MenuOption::Direction(_) => MenuId::Direction,
            MenuOption::Time(_) => MenuId::Time,
            MenuOption::Sort(_) => MenuId::Sort,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            MenuOption::Direction(d) => d.as_str(),
            MenuOption::Time(t) => t.as_str(),
            MenuOption::Sort(s) => s.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Direction(d) => d.label(),
            MenuOption::Time(t) => t.label(),
            MenuOption::Sort(s) => s.label(),
        }
    }

    /// Parse a wire value in the context of `menu`.
    pub fn parse(menu: MenuId, value: &str) -> Option<Self> {
        match menu {
            MenuId::Direction => value.parse().ok().map(MenuOption::Direction),
            MenuId::Time => value.parse().ok().map(MenuOption::Time),
            MenuId::Sort => value.parse().ok().map(MenuOption::Sort),
        }
    }

    fn apply_to(self, selection: &mut FilterSelection) {
        match self {
            MenuOption::Direction(d) => selection.direction = d,
            MenuOption::Time(t) => selection.time = t,
            MenuOption::Sort(s) => selection.sort = s,
        }
    }
}

/// Where a pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside a rendered menu container (toggle or popup)
    Inside(MenuId),
    Outside,
}

/// Input to the dropdown reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on a menu's toggle; contained, never seen by the outside handler
    Toggle(MenuId),
    /// Click on an option; applies it and closes the menu
    Select(MenuOption),
    /// Document-level pointer-down
    PointerDown(PointerTarget),
}

/// Single-owner "which menu is open" state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DropdownController {
    open: Option<MenuId>,
}

impl DropdownController {
    pub fn open_menu(&self) -> Option<MenuId> {
        self.open
    }

    pub fn is_open(&self, menu: MenuId) -> bool {
        self.open == Some(menu)
    }

    /// Close `menu` if it is open, otherwise open it (closing any other).
    pub fn toggle(&mut self, menu: MenuId) {
        self.open = if self.open == Some(menu) {
            None
        } else {
            Some(menu)
        };
    }

    /// Apply `option` to `selection` and close whatever is open.
    pub fn select(&mut self, selection: &mut FilterSelection, option: MenuOption) {
        option.apply_to(selection);
        self.open = None;
    }

    /// Outside-click handling.
    pub fn pointer_down(&mut self, target: PointerTarget) {
        if self.open.is_some() && target == PointerTarget::Outside {
            self.open = None;
        }
    }

    pub fn apply(&mut self, selection: &mut FilterSelection, event: MenuEvent) {
        match event {
            MenuEvent::Toggle(menu) => self.toggle(menu),
            MenuEvent::Select(option) => self.select(selection, option),
            MenuEvent::PointerDown(target) => self.pointer_down(target),
        }
    }
}

/// Tracks document-level listeners so views can prove they clean up.
#[derive(Debug, Default, Clone)]
pub struct ListenerRegistry {
    active: Arc<AtomicUsize>,
}

impl ListenerRegistry {
    pub fn register(&self) -> ListenerGuard {
        self.active.fetch_add(1, Ordering::SeqCst);
        ListenerGuard {
            active: Arc::clone(&self.active),
        }
    }

    /// Number of listeners currently registered.
    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// Deregisters its listener when dropped.
#[derive(Debug)]
pub struct ListenerGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}
