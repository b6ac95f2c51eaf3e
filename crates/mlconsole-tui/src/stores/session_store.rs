/// SessionStore is the session gate: it decides between the credentials form and the dashboard
use crate::actions::Action;
use mlconsole_core::session::Session;
use std::sync::{Arc, PoisonError, RwLock};

/// Store that holds the logged-in flag
#[derive(Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> Session {
        *self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_logged_in(&self) -> bool {
        self.get_state().is_logged_in()
    }

    /// Reducer: login and logout are unconditional
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::Login(_) | Action::SignUp(_) => state.login(),
            Action::Logout => state.logout(),
            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }
}
