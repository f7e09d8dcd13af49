// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Profile update model.

use serde::{Deserialize, Serialize};

/// A validated profile change, ready for the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Full name
    pub name: String,
    /// WhatsApp number with international code (e.g. "+65 9123 4567")
    pub whatsapp: String,
}
