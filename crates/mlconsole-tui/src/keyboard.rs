/// Keyboard input handling and key mapping
use crate::actions::{Action, ButtonId, FieldId, FocusItem, TabId};
use crate::focus::{View, current_view, focus_order};
use crate::common::InputEdit;
use crate::stores::credentials_store::CredentialsState;
use crate::stores::dashboard_store::DashboardState;
use crate::stores::{CredentialsStore, DashboardStore, SessionStore, UIStore};
use mlconsole_core::models::{Transformation, parse_feature_list};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Handle keyboard input and return the appropriate Action
pub fn handle_key_event(
    key_event: KeyEvent,
    session_store: &SessionStore,
    credentials_store: &CredentialsStore,
    dashboard_store: &DashboardStore,
    ui_store: &UIStore,
) -> Option<Action> {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(Action::Quit);
    }

    let ui_state = ui_store.get_state();
    let credentials = credentials_store.get_state();
    let view = current_view(&session_store.get_state(), &credentials, &ui_state);
    let items = focus_order(view);
    let focused = items.get(ui_state.focus_index).copied();

    // While editing, keys belong to the field
    if ui_state.editing {
        if let Some(FocusItem::Field(field_id)) = focused {
            return handle_editing_keys(key_event, field_id, &credentials, dashboard_store);
        }
    }

    if let View::Dashboard(_) = view {
        if ui_state.show_logs {
            return handle_log_overlay_keys(key_event);
        }
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),

        // Focus navigation (Tab/j/Down forward, BackTab/k/Up back)
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
            next_focus(ui_state.focus_index, items.len())
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
            previous_focus(ui_state.focus_index, items.len())
        }

        KeyCode::Enter => focused.map(|item| activate(item, &credentials)),

        _ => match view {
            View::Dashboard(_) => handle_dashboard_keys(key_event),
            View::Login(_) => None,
        },
    }
}

fn handle_dashboard_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        // Tab switching
        KeyCode::Char('1') => Some(Action::SwitchTab(TabId::DataIngestion)),
        KeyCode::Char('2') => Some(Action::SwitchTab(TabId::DataTransformation)),
        KeyCode::Char('3') => Some(Action::SwitchTab(TabId::AutoTrain)),
        KeyCode::Char('4') => Some(Action::SwitchTab(TabId::Freeze)),

        KeyCode::Char('o') | KeyCode::Char('O') => Some(Action::Logout),
        KeyCode::Char('L') => Some(Action::ToggleLogOverlay),

        _ => None,
    }
}

fn handle_log_overlay_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('L') | KeyCode::Esc => Some(Action::ToggleLogOverlay),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollLogs(1)),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollLogs(-1)),
        KeyCode::PageUp => Some(Action::ScrollLogs(10)),
        KeyCode::PageDown => Some(Action::ScrollLogs(-10)),
        _ => None,
    }
}

fn handle_editing_keys(
    key_event: KeyEvent,
    field_id: FieldId,
    credentials: &CredentialsState,
    dashboard_store: &DashboardStore,
) -> Option<Action> {
    match key_event.code {
        KeyCode::Enter => Some(commit_field(field_id, credentials, &dashboard_store.get_state())),
        KeyCode::Esc => Some(Action::StopEditing),
        KeyCode::Backspace => Some(Action::EditField(field_id, InputEdit::Backspace)),
        KeyCode::Left => Some(Action::EditField(field_id, InputEdit::CursorLeft)),
        KeyCode::Right => Some(Action::EditField(field_id, InputEdit::CursorRight)),
        KeyCode::Char(c) if !c.is_control() => {
            Some(Action::EditField(field_id, InputEdit::Insert(c)))
        }
        _ => None,
    }
}

/// What pressing Enter in a field means. Credential fields submit the form,
/// the path field selects the file and the feature fields fire their transform.
fn commit_field(
    field_id: FieldId,
    credentials: &CredentialsState,
    dashboard: &DashboardState,
) -> Action {
    match field_id {
        id if id.is_credential() => credentials.submission(),
        FieldId::FilePath => {
            let path = dashboard.file_path.value().trim();
            Action::SelectFile((!path.is_empty()).then(|| PathBuf::from(path)))
        }
        FieldId::RemoveFeatures => Action::RequestTransform {
            transformation: Transformation::RemoveFeatures,
            features: parse_feature_list(dashboard.remove_features.value()),
        },
        FieldId::ConvertToNumbers => Action::RequestTransform {
            transformation: Transformation::ConvertToNumbers,
            features: parse_feature_list(dashboard.convert_to_numbers.value()),
        },
        _ => Action::StopEditing,
    }
}

fn activate(item: FocusItem, credentials: &CredentialsState) -> Action {
    match item {
        FocusItem::Field(_) => Action::BeginEditing,
        FocusItem::Button(ButtonId::SubmitCredentials) => credentials.submission(),
        FocusItem::Button(ButtonId::ToggleAuthMode) => Action::ToggleAuthMode,
        FocusItem::Button(ButtonId::Ingest) => Action::RequestIngest,
        FocusItem::Button(ButtonId::CycleSourceModel) => Action::CycleSourceModel,
        FocusItem::Button(ButtonId::TrainModels) => Action::RequestTrain,
        FocusItem::Button(ButtonId::FreezeModels) => Action::RequestFreeze,
    }
}

/// Move focus forward, wrapping around
fn next_focus(current: usize, len: usize) -> Option<Action> {
    if len == 0 {
        return None;
    }
    Some(Action::FocusItem((current + 1) % len))
}

/// Move focus back, wrapping around
fn previous_focus(current: usize, len: usize) -> Option<Action> {
    if len == 0 {
        return None;
    }
    let prev = if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    };
    Some(Action::FocusItem(prev))
}
