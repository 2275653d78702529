//! Registration form state

use super::errors::{ErrorRefresh, ErrorSet};
use super::field::{FieldName, FieldSet};
use super::validation::{validate, ValidationIssue};

/// Trait for common form focus operations
pub trait Form {
    fn row_count(&self) -> usize;
    fn active_row(&self) -> usize;
    fn set_active_row(&mut self, index: usize);
    fn next_row(&mut self) {
        let count = self.row_count();
        let current = self.active_row();
        self.set_active_row((current + 1) % count);
    }
    fn prev_row(&mut self) {
        let count = self.row_count();
        let current = self.active_row();
        if current == 0 {
            self.set_active_row(count - 1);
        } else {
            self.set_active_row(current - 1);
        }
    }
}

/// Values, error slots and focus of the registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub fields: FieldSet,
    pub errors: ErrorSet,
    /// Rows 0..6 are fields, row 6 is the submit button
    pub active_row_index: usize,
    pub error_refresh: ErrorRefresh,
}

impl RegistrationForm {
    /// Row index of the submit button
    pub const SUBMIT_ROW: usize = FieldName::COUNT;

    pub fn new(error_refresh: ErrorRefresh) -> Self {
        Self {
            error_refresh,
            ..Self::default()
        }
    }

    /// Field under focus, `None` when the submit button is focused
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_row_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_row_index == Self::SUBMIT_ROW
    }

    /// Apply a new value for one field, re-validate the whole record and
    /// refresh error slots. Returns the issues of this pass.
    pub fn edit_field(&mut self, field: FieldName, new_value: String) -> Vec<ValidationIssue> {
        self.fields.on_field_change(field, new_value);
        let issues = validate(&self.fields);

        match self.error_refresh {
            ErrorRefresh::ChangedField => self.errors.refresh(field, &issues),
            ErrorRefresh::AllFields => self.errors.refresh_all(&issues),
        }

        tracing::debug!(
            field = %field,
            issues = issues.len(),
            slot = self.errors.get(field),
            "field changed"
        );
        issues
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            let mut value = self.fields.get(field).to_string();
            value.push(c);
            self.edit_field(field, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field() {
            let mut value = self.fields.get(field).to_string();
            if value.pop().is_some() {
                self.edit_field(field, value);
            }
        }
    }

    /// Show a message reported by the registration endpoint in a field's slot
    pub fn apply_remote_error(&mut self, field: FieldName, message: &str) {
        self.errors.set(field, message);
    }
}

impl Form for RegistrationForm {
    fn row_count(&self) -> usize {
        FieldName::COUNT + 1 // six fields, submit button
    }
    fn active_row(&self) -> usize {
        self.active_row_index
    }
    fn set_active_row(&mut self, index: usize) {
        self.active_row_index = index.min(Self::SUBMIT_ROW);
    }
}
