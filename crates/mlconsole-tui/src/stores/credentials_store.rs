/// CredentialsStore holds the sign-in / sign-up form
use crate::actions::{Action, FieldId};
use crate::common::TextField;
use mlconsole_core::credentials::{
    AuthMode, ValidationError, validate_sign_in, validate_sign_up,
};
use std::sync::{Arc, PoisonError, RwLock};

/// Internal state for the credentials form. Field values and the error
/// survive switching between sign-in and sign-up.
#[derive(Debug, Clone, Default)]
pub struct CredentialsState {
    pub mode: AuthMode,
    pub username: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm_password: TextField,
    pub error: Option<String>,
}

impl CredentialsState {
    pub fn field(&self, id: FieldId) -> Option<&TextField> {
        match id {
            FieldId::Username => Some(&self.username),
            FieldId::Email => Some(&self.email),
            FieldId::Password => Some(&self.password),
            FieldId::ConfirmPassword => Some(&self.confirm_password),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut TextField> {
        match id {
            FieldId::Username => Some(&mut self.username),
            FieldId::Email => Some(&mut self.email),
            FieldId::Password => Some(&mut self.password),
            FieldId::ConfirmPassword => Some(&mut self.confirm_password),
            _ => None,
        }
    }

    /// Validate the form for the current mode and turn it into the action to dispatch
    pub fn submission(&self) -> Action {
        let outcome: Result<Action, ValidationError> = match self.mode {
            AuthMode::SignIn => {
                validate_sign_in(self.username.value(), self.password.value()).map(Action::Login)
            }
            AuthMode::SignUp => validate_sign_up(
                self.username.value(),
                self.email.value(),
                self.password.value(),
                self.confirm_password.value(),
            )
            .map(Action::SignUp),
        };
        outcome.unwrap_or_else(Action::CredentialsRejected)
    }
}

/// Store that holds credentials form state
#[derive(Clone, Default)]
pub struct CredentialsStore {
    state: Arc<RwLock<CredentialsState>>,
}

impl CredentialsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> CredentialsState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::ToggleAuthMode => {
                state.mode = state.mode.toggled();
            }

            Action::EditField(id, edit) => {
                if let Some(field) = state.field_mut(*id) {
                    field.apply(*edit);
                }
            }

            Action::CredentialsRejected(error) => {
                state.error = Some(error.to_string());
            }

            // the form goes away on login and comes back empty after logout
            Action::Login(_) | Action::SignUp(_) | Action::Logout => {
                *state = CredentialsState::default();
            }

            _ => {}
        }
    }
}
