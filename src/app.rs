//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::registration::{RegistrationClient, RegistrationClientTrait, SubmitError, SubmitReceipt};
use crate::state::{AppState, Form};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Result of one submission, delivered back to the event loop
type SubmitOutcome = Result<SubmitReceipt, SubmitError>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the registration endpoint
    client: Arc<dyn RegistrationClientTrait>,
    /// Finished submissions are sent here by their tasks
    outcome_tx: mpsc::UnboundedSender<SubmitOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App posting to the configured endpoint
    pub fn new(config: &TuiConfig) -> Self {
        let client = RegistrationClient::new(config.resolved_endpoint());
        Self::with_client(Arc::new(client), config)
    }

    /// Create an App around any registration client
    pub fn with_client(client: Arc<dyn RegistrationClientTrait>, config: &TuiConfig) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(config.error_refresh(), config.mask_password()),
            client,
            outcome_tx,
            outcome_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Endpoint submissions go to
    pub fn endpoint(&self) -> String {
        self.client.endpoint()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let on_submit_row = self.state.form.is_submit_row_active();

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('w') if key.modifiers.contains(SUBMIT_MODIFIER) => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_row(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_row(),
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => self.state.form.next_row(),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    /// Post the current record in the background.
    ///
    /// The form stays editable while the request is in flight and nothing
    /// prevents a second submission; outcomes are applied in arrival order.
    pub fn submit(&mut self) {
        let client = Arc::clone(&self.client);
        let fields = self.state.form.fields.clone();
        let tx = self.outcome_tx.clone();

        self.state.pending_submissions += 1;
        tracing::info!(endpoint = %client.endpoint(), "submitting registration");

        tokio::spawn(async move {
            let outcome = client.submit(&fields).await;
            // The receiver lives as long as the App
            let _ = tx.send(outcome);
        });
    }

    /// Apply every submission outcome that has arrived
    pub fn poll_submissions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        self.state.pending_submissions = self.state.pending_submissions.saturating_sub(1);

        match outcome {
            Ok(receipt) => {
                tracing::info!(status = %receipt.status, body = %receipt.body, "registration accepted");
                self.state.status_message = Some(format!("Registration sent ({})", receipt.status));
            }
            Err(err) => match err.field_error() {
                Some((field, message)) => {
                    tracing::warn!(field = %field, reason = message, "registration rejected");
                    self.state.form.apply_remote_error(field, message);
                    self.state.status_message =
                        Some(format!("Registration rejected: check {}", field.label()));
                }
                None => {
                    tracing::warn!(error = %err, "registration failed");
                    self.state.push_error(format!("Registration failed: {err}"));
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::MockRegistrationClientTrait;
    use crate::state::validation::EMAIL_INVALID;
    use crate::state::{ErrorRefresh, FieldName, RegistrationForm};
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    fn app_with(mock: MockRegistrationClientTrait) -> App {
        App::with_client(Arc::new(mock), &TuiConfig::default())
    }

    fn idle_app() -> App {
        let mut mock = MockRegistrationClientTrait::new();
        mock.expect_endpoint()
            .returning(|| "http://test/register".to_string());
        app_with(mock)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn focus(app: &mut App, field: FieldName) {
        app.state.form.set_active_row(field.index());
    }

    /// Wait for the next submission outcome and apply it
    async fn next_outcome(app: &mut App) {
        let outcome = app.outcome_rx.recv().await.expect("sender is held by the app");
        app.apply_outcome(outcome);
    }

    mod key_handling_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_should_quit_initially_false() {
            assert!(!idle_app().should_quit());
        }

        #[test]
        fn test_escape_quits() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }

        #[test]
        fn test_typing_edits_focused_field() {
            let mut app = idle_app();
            type_str(&mut app, "Ana");
            press(&mut app, KeyCode::Tab);
            type_str(&mut app, "Ru");
            press(&mut app, KeyCode::Backspace);

            assert_eq!(app.state.form.fields.get(FieldName::FirstName), "Ana");
            assert_eq!(app.state.form.fields.get(FieldName::LastName), "R");
            assert_eq!(
                app.state.form.errors.get(FieldName::LastName),
                "Last name must be at least 3 characters"
            );
        }

        #[test]
        fn test_control_chars_are_not_typed() {
            let mut app = idle_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
            assert_eq!(app.state.form.fields.get(FieldName::FirstName), "");
        }

        #[test]
        fn test_enter_on_field_moves_to_next_row() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.active_field(), Some(FieldName::LastName));
        }

        #[test]
        fn test_up_from_first_field_reaches_submit() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Up);
            assert!(app.state.form.is_submit_row_active());
        }

        #[test]
        fn test_error_dialog_is_modal() {
            let mut app = idle_app();
            app.state.push_error("boom".to_string());

            type_str(&mut app, "abc");
            assert_eq!(app.state.form.fields.get(FieldName::FirstName), "");

            press(&mut app, KeyCode::Esc);
            assert!(!app.state.has_errors());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_key_press_clears_status_message() {
            let mut app = idle_app();
            app.state.status_message = Some("Registration sent".to_string());
            press(&mut app, KeyCode::Tab);
            assert!(app.state.status_message.is_none());
        }
    }

    mod submission_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_submit_sends_current_values() {
            let mut mock = MockRegistrationClientTrait::new();
            mock.expect_endpoint()
                .returning(|| "http://test/register".to_string());
            mock.expect_submit()
                .withf(|fields| fields.get(FieldName::FirstName) == "Ana")
                .times(1)
                .returning(|_| {
                    Ok(SubmitReceipt {
                        status: StatusCode::CREATED,
                        body: serde_json::json!({"ok": true}),
                    })
                });

            let mut app = app_with(mock);
            type_str(&mut app, "Ana");
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            assert!(app.state.is_submitting());

            next_outcome(&mut app).await;
            assert!(!app.state.is_submitting());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Registration sent (201 Created)")
            );
        }

        #[tokio::test]
        async fn test_alternate_submit_shortcut() {
            let mut mock = MockRegistrationClientTrait::new();
            mock.expect_endpoint()
                .returning(|| "http://test/register".to_string());
            mock.expect_submit().times(1).returning(|_| {
                Ok(SubmitReceipt {
                    status: StatusCode::OK,
                    body: serde_json::Value::Null,
                })
            });

            let mut app = app_with(mock);
            app.handle_key(KeyEvent::new(KeyCode::Char('w'), SUBMIT_MODIFIER));
            assert!(app.state.is_submitting());
            assert_eq!(app.state.form.fields.get(FieldName::FirstName), "");

            next_outcome(&mut app).await;
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Registration sent (200 OK)")
            );
        }

        #[tokio::test]
        async fn test_remote_field_error_overwrites_slot() {
            let mut mock = MockRegistrationClientTrait::new();
            mock.expect_endpoint()
                .returning(|| "http://test/register".to_string());
            mock.expect_submit().times(1).returning(|_| {
                Err(SubmitError::Rejected {
                    field: FieldName::Email,
                    message: "taken".to_string(),
                })
            });

            let mut app = app_with(mock);
            focus(&mut app, FieldName::Email);
            type_str(&mut app, "x");
            assert_eq!(app.state.form.errors.get(FieldName::Email), EMAIL_INVALID);

            app.state.form.set_active_row(RegistrationForm::SUBMIT_ROW);
            press(&mut app, KeyCode::Enter);
            next_outcome(&mut app).await;

            assert_eq!(app.state.form.errors.get(FieldName::Email), "taken");
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_other_failures_leave_slots_alone() {
            let mut mock = MockRegistrationClientTrait::new();
            mock.expect_endpoint()
                .returning(|| "http://test/register".to_string());
            mock.expect_submit().times(1).returning(|_| {
                Err(SubmitError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                })
            });

            let mut app = app_with(mock);
            type_str(&mut app, "A");
            let before = app.state.form.errors.clone();

            app.submit();
            next_outcome(&mut app).await;

            assert_eq!(app.state.form.errors, before);
            assert_eq!(
                app.state.current_error(),
                Some("Registration failed: registration endpoint returned 500 Internal Server Error")
            );
        }

        #[tokio::test]
        async fn test_form_stays_editable_while_submitting() {
            let mut mock = MockRegistrationClientTrait::new();
            mock.expect_endpoint()
                .returning(|| "http://test/register".to_string());
            mock.expect_submit()
                .withf(|fields| fields.get(FieldName::FirstName) == "An")
                .returning(|_| {
                    Err(SubmitError::Rejected {
                        field: FieldName::FirstName,
                        message: "reserved".to_string(),
                    })
                });

            let mut app = app_with(mock);
            type_str(&mut app, "An");
            app.submit();
            type_str(&mut app, "a");
            assert_eq!(app.state.form.fields.get(FieldName::FirstName), "Ana");

            next_outcome(&mut app).await;
            assert_eq!(app.state.form.errors.get(FieldName::FirstName), "reserved");
        }

        #[test]
        fn test_last_applied_outcome_wins() {
            let mut app = idle_app();
            app.state.pending_submissions = 2;

            app.apply_outcome(Err(SubmitError::Rejected {
                field: FieldName::Email,
                message: "taken".to_string(),
            }));
            app.apply_outcome(Err(SubmitError::Rejected {
                field: FieldName::Email,
                message: "blocked".to_string(),
            }));

            assert_eq!(app.state.form.errors.get(FieldName::Email), "blocked");
            assert_eq!(app.state.pending_submissions, 0);
        }

        #[test]
        fn test_poll_without_outcomes_is_noop() {
            let mut app = idle_app();
            app.poll_submissions();
            assert!(!app.state.is_submitting());
            assert!(app.state.status_message.is_none());
        }

        #[test]
        fn test_all_fields_mode_from_config() {
            let config = TuiConfig {
                error_refresh: Some(ErrorRefresh::AllFields),
                ..Default::default()
            };
            let mut app = App::with_client(Arc::new(MockRegistrationClientTrait::new()), &config);
            type_str(&mut app, "A");
            assert_eq!(app.state.form.errors.get(FieldName::Email), EMAIL_INVALID);
        }
    }
}
