use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info, warn};
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};

use super::{App, Route};
use crate::components::TextInput;
use crate::pages::AdminSection;
use crate::records::FieldKind;
use crate::session::{AuthError, Credentials};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

/// Sign-in form plus the in-flight credential check, if any.
#[derive(Debug)]
pub struct LoginState {
    pub username: TextInput,
    pub password: TextInput,
    pub focus: LoginField,
    pub error: Option<String>,
    pending: Option<UnboundedReceiver<Result<(), AuthError>>>,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            username: TextInput::new(FieldKind::SingleLine),
            password: TextInput::new(FieldKind::SingleLine).masked(),
            focus: LoginField::Username,
            error: None,
            pending: None,
        }
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.value(),
            password: self.password.value(),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    /// Clears the form and drops any in-flight check so its result goes unobserved.
    pub fn reset(&mut self) {
        if self.pending.take().is_some() {
            debug!("Abandoning in-flight credential check");
        }
        *self = Self::default();
    }

    fn begin(&mut self, receiver: UnboundedReceiver<Result<(), AuthError>>) {
        self.error = None;
        self.pending = Some(receiver);
    }

    /// Result of the in-flight check once it has arrived.
    fn poll_outcome(&mut self) -> Option<Result<(), AuthError>> {
        let receiver = self.pending.as_mut()?;
        match receiver.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("Credential check ended without a result");
                self.pending = None;
                None
            }
        }
    }
}

impl App {
    /// Starts the asynchronous credential check. Ignored while one is running.
    pub(crate) fn submit_login(&mut self) {
        if self.login.is_pending() {
            return;
        }
        let credentials = self.login.credentials();
        let authenticator = Arc::clone(&self.authenticator);
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(async move {
            let outcome = authenticator.authenticate(&credentials).await;
            // The receiver is gone if the user left the login screen.
            let _ = tx.send(outcome);
        });
        self.login.begin(rx);
        self.status_message = self.locale.text("login.pending").into_owned();
    }

    /// Applies a finished credential check, if one arrived since the last tick.
    pub(crate) fn poll_login(&mut self) {
        let Some(outcome) = self.login.poll_outcome() else {
            return;
        };
        if self.route != Route::Login {
            debug!("Ignoring credential result outside the login screen");
            return;
        }
        match outcome {
            Ok(()) => {
                info!("Sign-in accepted");
                self.session.login();
                self.login.reset();
                self.navigate(Route::Admin(AdminSection::Dashboard));
                self.status_message = self.locale.text("login.success").into_owned();
            }
            Err(err) => {
                info!("Sign-in rejected: {err}");
                let message = format!("{}: {err}", self.locale.text("login.failed"));
                self.login.error = Some(message.clone());
                self.status_message = message;
            }
        }
    }

    pub(crate) fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.navigate(Route::default());
                return;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.login.toggle_focus();
                return;
            }
            KeyCode::Enter => {
                self.submit_login();
                return;
            }
            _ => {}
        }
        if self.login.is_pending() {
            return;
        }
        let input = self.login.focused_input();
        match key.code {
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_to_line_start(),
            KeyCode::End => input.move_to_line_end(),
            KeyCode::Char(ch)
                if !(key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT)) =>
            {
                input.insert_char(ch)
            }
            _ => return,
        }
        self.login.error = None;
    }
}
