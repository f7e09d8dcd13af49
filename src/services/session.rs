// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Cosmetic "logged in" flag and the storage it lives in.
//!
//! The flag only decides which links and calls to action render. It is not
//! authentication: anyone can flip it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Storage key holding `"true"` or `"false"`.
pub const SESSION_KEY: &str = "isLoggedIn";

/// Key-value port the session flag is persisted through.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Process-wide in-memory storage. Clones share the same entries.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: Arc<DashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Browser-held storage: the flag travels as a cookie the frontend can read.
#[derive(Debug, Default)]
pub struct CookieStorage {
    jar: CookieJar,
    secure: bool,
}

impl CookieStorage {
    pub fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    /// Jar to return with the response so writes reach the browser.
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl SessionStorage for CookieStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|c| c.value().to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build();
        let jar = std::mem::take(&mut self.jar);
        self.jar = jar.add(cookie);
    }
}

/// Per-view copy of the flag, read once at mount.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    /// Anything other than the exact string `"true"` reads as logged out.
    pub fn load(storage: &impl SessionStorage) -> Self {
        let logged_in = storage
            .get(SESSION_KEY)
            .map(|v| v == "true")
            .unwrap_or(false);
        Self { logged_in }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn log_in(&mut self, storage: &mut impl SessionStorage) {
        self.store(true, storage);
    }

    pub fn log_out(&mut self, storage: &mut impl SessionStorage) {
        self.store(false, storage);
    }

    pub fn toggle(&mut self, storage: &mut impl SessionStorage) {
        self.store(!self.logged_in, storage);
    }

    fn store(&mut self, logged_in: bool, storage: &mut impl SessionStorage) {
        self.logged_in = logged_in;
        storage.set(SESSION_KEY, if logged_in { "true" } else { "false" });
        tracing::info!(logged_in, "Session flag updated");
    }

    /// "Join the NS Walk Community" panel.
    pub fn shows_join_community(&self) -> bool {
        !self.logged_in
    }

    /// "Create New Walk" button.
    pub fn shows_create_walk(&self) -> bool {
        self.logged_in
    }
}

/// A navigation bar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Navigation entries for the current session.
pub fn nav_links(session: &Session) -> Vec<NavLink> {
    if session.is_logged_in() {
        vec![
            NavLink::new("Home", "/home"),
            NavLink::new("Create Walk", "/create-walk"),
            NavLink::new("Profile", "/profile"),
            NavLink::new("Travel Guide", "/travel-guide"),
        ]
    } else {
        vec![
            NavLink::new("Login", "/login"),
            NavLink::new("Travel Guide", "/travel-guide"),
        ]
    }
}
