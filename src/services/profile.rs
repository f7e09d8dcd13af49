// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile form validation.

use crate::error::{FieldErrorKind, FormErrors};
use crate::models::ProfileUpdate;
use serde::Deserialize;
use validator::Validate;

/// Profile form as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileForm {
    #[serde(default)]
    #[validate(custom(function = "crate::validation::not_blank"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validation::phone_number"))]
    pub whatsapp: String,
}

impl ProfileForm {
    /// Validate and produce the update for the persistence collaborator.
    pub fn submit(&self) -> Result<ProfileUpdate, FormErrors> {
        if let Err(e) = self.validate() {
            let mut errors = FormErrors::from(e);
            for error in &mut errors.fields {
                error.message = field_message(&error.field, error.kind, &error.message);
            }
            return Err(errors);
        }

        Ok(ProfileUpdate {
            name: self.name.trim().to_string(),
            whatsapp: self.whatsapp.trim().to_string(),
        })
    }
}

fn field_message(field: &str, kind: FieldErrorKind, fallback: &str) -> String {
    let message = match (field, kind) {
        ("name", _) => "Please enter your name",
        ("whatsapp", FieldErrorKind::MissingRequiredField) => {
            "WhatsApp number with international code is required"
        }
        ("whatsapp", _) => {
            "Please enter a valid phone number with international code (e.g., +65)"
        }
        _ => fallback,
    };
    message.to_string()
}
