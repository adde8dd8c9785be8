//! Validation system
//!
//! Forms collect per-field failures into a [`FieldErrors`] map. Rules come
//! from two places: `validator` derives on plain structs (lengths, email) and
//! the closure validators in [`validators`] (formats, conditional rules).

pub mod validators;

use crate::core::error::{FieldValidationError, ValidationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-field validation messages, in the order the fields were checked.
///
/// Only the first failure of a field is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(IndexMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure unless the field already has one
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Run `validator` against `value` and record its failure under `field`
    pub fn check<V>(&mut self, field: &str, value: &str, validator: V)
    where
        V: Fn(&str, &str) -> Result<(), String>,
    {
        if let Err(message) = validator(field, value) {
            self.insert(field, message);
        }
    }

    /// Copy the first message of each listed field out of a `validator` run.
    ///
    /// `fields` maps struct field names to the public names used in errors.
    pub fn extend_from_validator(
        &mut self,
        result: &Result<(), validator::ValidationErrors>,
        fields: &[(&str, &str)],
    ) {
        let Err(errors) = result else {
            return;
        };
        let by_field = errors.field_errors();

        for (struct_field, public) in fields {
            if let Some(first) = by_field.get(*struct_field).and_then(|errs| errs.first()) {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                self.insert(*public, message);
            }
        }
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, message) in other.0 {
            self.insert(field, message);
        }
    }

    /// Drop messages for the given fields
    pub fn clear_fields(&mut self, fields: &[&str]) {
        self.0.retain(|field, _| !fields.contains(&field.as_str()));
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when empty, otherwise the collected errors
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.into())
        }
    }
}

impl From<FieldErrors> for ValidationError {
    fn from(errors: FieldErrors) -> Self {
        ValidationError::FieldErrors(
            errors
                .0
                .into_iter()
                .map(|(field, message)| FieldValidationError { field, message })
                .collect(),
        )
    }
}
