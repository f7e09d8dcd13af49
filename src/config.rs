// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::env;

const SGT_OFFSET_SECS: i32 = 8 * 3600;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL (CORS origin, cookie security)
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// UTC offset the community schedules walks in (form input and display)
    pub community_offset: FixedOffset,
    /// Pinned "current time" for demos against the mock data
    pub now_override: Option<DateTime<Utc>>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let community_offset = match env::var("COMMUNITY_UTC_OFFSET") {
            Ok(raw) => raw.trim().parse::<FixedOffset>().map_err(|_| ConfigError::Invalid {
                var: "COMMUNITY_UTC_OFFSET",
                value: raw,
            })?,
            Err(_) => default_offset(),
        };

        let now_override = env::var("NOW_OVERRIDE")
            .ok()
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|_| ConfigError::Invalid {
                        var: "NOW_OVERRIDE",
                        value: raw,
                    })
            })
            .transpose()?;

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            community_offset,
            now_override,
        })
    }

    /// Config for tests: local frontend, clock pinned to 2025-05-03 SGT.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:3000".to_string(),
            port: 8080,
            community_offset: default_offset(),
            now_override: DateTime::parse_from_rfc3339("2025-05-03T00:00:00+08:00")
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }

    /// Whether cookies should carry the `Secure` attribute.
    pub fn secure_cookies(&self) -> bool {
        self.frontend_url.starts_with("https://")
    }
}

/// Singapore time, where the walks take place.
fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(SGT_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
