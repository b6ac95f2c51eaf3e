/// Which view is on screen and the order keyboard focus moves through it
use crate::actions::{ButtonId, FieldId, FocusItem, TabId};
use crate::stores::credentials_store::CredentialsState;
use crate::stores::ui_store::UIState;
use mlconsole_core::credentials::AuthMode;
use mlconsole_core::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login(AuthMode),
    Dashboard(TabId),
}

/// The session gate: logged out shows the credentials form, logged in the active tab
pub fn current_view(session: &Session, credentials: &CredentialsState, ui: &UIState) -> View {
    if session.is_logged_in() {
        View::Dashboard(ui.active_tab)
    } else {
        View::Login(credentials.mode)
    }
}

pub fn focus_order(view: View) -> Vec<FocusItem> {
    use ButtonId::*;
    use FieldId::*;
    use FocusItem::{Button, Field};

    match view {
        View::Login(AuthMode::SignIn) => vec![
            Field(Username),
            Field(Password),
            Button(SubmitCredentials),
            Button(ToggleAuthMode),
        ],
        View::Login(AuthMode::SignUp) => vec![
            Field(Username),
            Field(Email),
            Field(Password),
            Field(ConfirmPassword),
            Button(SubmitCredentials),
            Button(ToggleAuthMode),
        ],
        View::Dashboard(TabId::DataIngestion) => vec![Field(FilePath), Button(Ingest)],
        View::Dashboard(TabId::DataTransformation) => vec![
            Field(RemoveFeatures),
            Field(ConvertToNumbers),
            Button(CycleSourceModel),
        ],
        View::Dashboard(TabId::AutoTrain) => vec![
            Field(TrainingPercentage),
            Field(TestingPercentage),
            Field(Criterion),
            Field(MaxDepth),
            Field(NEstimators),
            Button(TrainModels),
        ],
        View::Dashboard(TabId::Freeze) => vec![Button(FreezeModels)],
    }
}

/// The focused item, if the index is inside the view's focus order
pub fn focused_item(view: View, focus_index: usize) -> Option<FocusItem> {
    focus_order(view).get(focus_index).copied()
}
