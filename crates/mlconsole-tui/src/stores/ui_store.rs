/// UIStore manages UI-specific state (active tab, focus, editing, overlays)
use crate::actions::{Action, TabId};
use std::sync::{Arc, PoisonError, RwLock};

/// Internal state for UI
#[derive(Debug, Clone, Default)]
pub struct UIState {
    /// Currently active dashboard tab
    pub active_tab: TabId,

    /// Index into the current view's focus order
    pub focus_index: usize,

    /// Whether the focused text field is being edited
    pub editing: bool,

    /// Whether the developer log overlay is visible
    pub show_logs: bool,

    /// Whether the application should exit
    pub should_exit: bool,
}

/// Store that holds UI-related state
#[derive(Clone, Default)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::SwitchTab(tab_id) => {
                state.active_tab = *tab_id;
                state.focus_index = 0;
                state.editing = false;
            }

            Action::FocusItem(index) => {
                state.focus_index = *index;
                state.editing = false;
            }

            Action::BeginEditing => {
                state.editing = true;
            }

            // committing a field ends editing, whatever else the commit does
            Action::StopEditing
            | Action::SelectFile(_)
            | Action::RequestTransform { .. }
            | Action::CredentialsRejected(_) => {
                state.editing = false;
            }

            Action::ToggleAuthMode => {
                state.focus_index = 0;
                state.editing = false;
            }

            // a fresh view mounts on both sides of the session gate
            Action::Login(_) | Action::SignUp(_) | Action::Logout => {
                *state = UIState::default();
            }

            Action::ToggleLogOverlay => {
                state.show_logs = !state.show_logs;
            }

            Action::Quit => {
                state.should_exit = true;
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Check if the application should exit
    pub fn should_exit(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .should_exit
    }
}
