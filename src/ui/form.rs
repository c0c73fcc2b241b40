//! Shared form building blocks: the create/edit mode tag and the per-field
//! error map.

use std::collections::HashMap;

/// How a form page was opened.
///
/// Chosen once at construction from the navigation payload: `Edit` carries
/// the full entity (id included), `Create` starts from empty defaults. The
/// mode never changes while the form is open.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<T> {
    Create,
    Edit(T),
}

impl<T> FormMode<T> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Field-keyed validation errors.
///
/// Errors are per-field, not form-wide: editing a field clears only that
/// field's entry. Nothing in here ever reaches the table service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    map: HashMap<&'static str, String>,
}

impl FieldErrors {
    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.map.insert(field, message.into());
    }

    pub fn clear(&mut self, field: &'static str) {
        self.map.remove(field);
    }

    pub fn get(&self, field: &'static str) -> Option<&str> {
        self.map.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}
