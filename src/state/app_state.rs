//! Application state definitions

use super::forms::{ErrorRefresh, RegistrationForm};
use std::collections::VecDeque;

/// Whole-application state owned by the event loop
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The registration form
    pub form: RegistrationForm,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Submissions sent but not yet answered
    pub pending_submissions: usize,
    /// Mask the password field when rendering
    pub mask_password: bool,
    /// Errors waiting to be shown in the error dialog, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(error_refresh: ErrorRefresh, mask_password: bool) -> Self {
        Self {
            form: RegistrationForm::new(error_refresh),
            mask_password,
            ..Self::default()
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_submissions > 0
    }
}
