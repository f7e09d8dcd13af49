// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared field validators and the bridge from `validator` errors to
//! field-level form errors.

use crate::error::{FieldError, FieldErrorKind, FormErrors};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use validator::{ValidationError, ValidationErrors};

/// Error code for required-but-blank fields.
pub const CODE_REQUIRED: &str = "required";
/// Error code for malformed values.
pub const CODE_INVALID_FORMAT: &str = "invalid_format";

/// Optional leading `+`, then digits, spaces, parentheses or hyphens.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[\d\s()\-]+$").expect("phone pattern compiles"));

/// Reject empty or whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(CODE_REQUIRED));
    }
    Ok(())
}

/// A phone number with international code, e.g. "+65 9123 4567".
pub fn phone_number(value: &str) -> Result<(), ValidationError> {
    not_blank(value)?;
    let trimmed = value.trim();
    if !PHONE_PATTERN.is_match(trimmed) || !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(CODE_INVALID_FORMAT));
    }
    Ok(())
}

/// Read a whole-number field posted either as a JSON number or as text.
///
/// Absent, null and blank values are missing; anything else that is not an
/// integer is malformed.
pub fn parse_count(value: Option<&Value>) -> Result<i64, FieldErrorKind> {
    match value {
        None | Some(Value::Null) => Err(FieldErrorKind::MissingRequiredField),
        Some(Value::Number(n)) => n.as_i64().ok_or(FieldErrorKind::InvalidFormat),
        Some(Value::String(text)) if text.trim().is_empty() => {
            Err(FieldErrorKind::MissingRequiredField)
        }
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| FieldErrorKind::InvalidFormat),
        Some(_) => Err(FieldErrorKind::InvalidFormat),
    }
}

fn kind_for_code(code: &str) -> FieldErrorKind {
    match code {
        CODE_REQUIRED => FieldErrorKind::MissingRequiredField,
        "range" => FieldErrorKind::OutOfRange,
        _ => FieldErrorKind::InvalidFormat,
    }
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter()
                    .map(move |e| FieldError::new(field.clone(), kind_for_code(&e.code)))
                    .collect::<Vec<_>>()
            })
            .collect();
        // field_errors() is a HashMap; keep output deterministic.
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        FormErrors { fields }
    }
}
