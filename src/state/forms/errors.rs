//! Per-field error slots and the mapping from validation issues into them

use super::field::FieldName;
use super::validation::ValidationIssue;
use serde::{Deserialize, Serialize};

/// Which error slots are rewritten after a field changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorRefresh {
    /// Only the edited field's slot is recomputed; other slots keep their last message
    #[default]
    ChangedField,
    /// Every slot is recomputed on every change
    AllFields,
}

/// Message currently shown under each field. An empty slot means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    slots: [String; FieldName::COUNT],
}

impl ErrorSet {
    pub fn get(&self, field: FieldName) -> &str {
        &self.slots[field.index()]
    }

    pub fn has_error(&self, field: FieldName) -> bool {
        !self.slots[field.index()].is_empty()
    }

    /// Overwrite one slot, replacing whatever it showed
    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        self.slots[field.index()] = message.into();
    }

    /// Recompute one slot from a fresh validation pass
    pub fn refresh(&mut self, field: FieldName, issues: &[ValidationIssue]) {
        self.set(field, derive_error_for(field, issues));
    }

    /// Recompute every slot from a fresh validation pass
    pub fn refresh_all(&mut self, issues: &[ValidationIssue]) {
        for field in FieldName::ALL {
            self.refresh(field, issues);
        }
    }

    /// Fields whose slot is non-empty, in display order
    pub fn fields_with_errors(&self) -> impl Iterator<Item = FieldName> + '_ {
        FieldName::ALL.into_iter().filter(|f| self.has_error(*f))
    }
}

/// Message a field's slot should show for the given issues.
///
/// Password failures are joined one per line; any other field shows the first
/// issue reported for it.
pub fn derive_error_for(field: FieldName, issues: &[ValidationIssue]) -> String {
    let mut matching = issues.iter().filter(|i| i.field == field);

    if field == FieldName::Password {
        return matching
            .map(|i| i.message.as_str())
            .collect::<Vec<_>>()
            .join("\n");
    }

    matching
        .next()
        .map(|i| i.message.clone())
        .unwrap_or_default()
}
