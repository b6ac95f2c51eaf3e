/// DashboardStore holds all workflow state behind the four tabs
use crate::actions::{Action, FieldId, SessionEpoch};
use crate::common::TextField;
use mlconsole_core::{
    models::{ModelResults, NumberText, TrainingParameters},
    operations::MessageChannel,
};
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

/// Internal state for the dashboard. Nothing here depends on the active tab,
/// so switching tabs never loses results or messages.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Bumped on every logout. Request outcomes from an older epoch are dropped.
    pub epoch: SessionEpoch,

    /// Dataset committed on the ingestion tab
    pub selected_file: Option<PathBuf>,

    /// Latest results from ingest or train
    pub results: Option<ModelResults>,

    /// Model picked as the transform source, if the user picked one
    pub source_model: Option<String>,

    pub training_message: String,
    pub transformation_message: String,
    pub freeze_message: String,

    pub file_path: TextField,
    pub remove_features: TextField,
    pub convert_to_numbers: TextField,
    pub training_percentage: TextField,
    pub testing_percentage: TextField,
    pub criterion: TextField,
    pub max_depth: TextField,
    pub n_estimators: TextField,
}

impl Default for DashboardState {
    fn default() -> Self {
        let params = TrainingParameters::default();
        Self {
            epoch: 0,
            selected_file: None,
            results: None,
            source_model: None,
            training_message: String::new(),
            transformation_message: String::new(),
            freeze_message: String::new(),
            file_path: TextField::new(),
            remove_features: TextField::new(),
            convert_to_numbers: TextField::new(),
            training_percentage: TextField::with_value(params.training_percentage.as_str()),
            testing_percentage: TextField::with_value(params.testing_percentage.as_str()),
            criterion: TextField::with_value(params.criterion),
            max_depth: TextField::with_value(params.max_depth.as_str()),
            n_estimators: TextField::with_value(params.n_estimators.as_str()),
        }
    }
}

impl DashboardState {
    pub fn field(&self, id: FieldId) -> Option<&TextField> {
        match id {
            FieldId::FilePath => Some(&self.file_path),
            FieldId::RemoveFeatures => Some(&self.remove_features),
            FieldId::ConvertToNumbers => Some(&self.convert_to_numbers),
            FieldId::TrainingPercentage => Some(&self.training_percentage),
            FieldId::TestingPercentage => Some(&self.testing_percentage),
            FieldId::Criterion => Some(&self.criterion),
            FieldId::MaxDepth => Some(&self.max_depth),
            FieldId::NEstimators => Some(&self.n_estimators),
            _ => None,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> Option<&mut TextField> {
        match id {
            FieldId::FilePath => Some(&mut self.file_path),
            FieldId::RemoveFeatures => Some(&mut self.remove_features),
            FieldId::ConvertToNumbers => Some(&mut self.convert_to_numbers),
            FieldId::TrainingPercentage => Some(&mut self.training_percentage),
            FieldId::TestingPercentage => Some(&mut self.testing_percentage),
            FieldId::Criterion => Some(&mut self.criterion),
            FieldId::MaxDepth => Some(&mut self.max_depth),
            FieldId::NEstimators => Some(&mut self.n_estimators),
            _ => None,
        }
    }

    /// Training parameters exactly as typed
    pub fn training_parameters(&self) -> TrainingParameters {
        TrainingParameters {
            training_percentage: NumberText::new(self.training_percentage.value()),
            testing_percentage: NumberText::new(self.testing_percentage.value()),
            criterion: self.criterion.value().to_string(),
            max_depth: NumberText::new(self.max_depth.value()),
            n_estimators: NumberText::new(self.n_estimators.value()),
        }
    }

    pub fn message(&self, channel: MessageChannel) -> &str {
        match channel {
            MessageChannel::Training => &self.training_message,
            MessageChannel::Transformation => &self.transformation_message,
            MessageChannel::Freeze => &self.freeze_message,
        }
    }

    fn set_message(&mut self, channel: MessageChannel, message: impl Into<String>) {
        let slot = match channel {
            MessageChannel::Training => &mut self.training_message,
            MessageChannel::Transformation => &mut self.transformation_message,
            MessageChannel::Freeze => &mut self.freeze_message,
        };
        *slot = message.into();
    }

    /// The model a transform would currently take its path from
    pub fn transform_source(&self) -> Option<&str> {
        self.results
            .as_ref()
            .and_then(|r| r.resolve_source_model(self.source_model.as_deref()))
    }
}

/// Store that holds dashboard state
#[derive(Clone, Default)]
pub struct DashboardStore {
    state: Arc<RwLock<DashboardState>>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> DashboardState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        match action {
            Action::EditField(id, edit) => {
                if let Some(field) = state.field_mut(*id) {
                    field.apply(*edit);
                }
            }

            Action::SelectFile(path) => {
                state.selected_file = path.clone();
            }

            Action::CycleSourceModel => {
                let next = state
                    .results
                    .as_ref()
                    .and_then(|r| r.next_model_after(state.source_model.as_deref()))
                    .map(String::from);
                if next.is_some() {
                    state.source_model = next;
                }
            }

            Action::OperationRejected(op, failure) => {
                state.set_message(op.channel(), failure.to_string());
            }

            Action::ResultsLoaded(epoch, _, _)
            | Action::BackendMessageReceived(epoch, _, _)
            | Action::OperationFailed(epoch, _)
                if *epoch != state.epoch =>
            {
                log::debug!("Dropping outcome requested before the last logout");
            }

            Action::ResultsLoaded(_, op, results) => {
                // last response to resolve wins
                state.results = Some(results.clone());
                if let Some(message) = op.success_message() {
                    state.set_message(op.channel(), message);
                }
            }

            Action::BackendMessageReceived(_, op, message) => {
                state.set_message(op.channel(), message.clone());
            }

            Action::OperationFailed(_, op) => {
                state.set_message(op.channel(), op.failure_message());
            }

            Action::Logout => {
                *state = DashboardState {
                    epoch: state.epoch.wrapping_add(1),
                    ..DashboardState::default()
                };
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::TabId;
    use crate::common::InputEdit;
    use mlconsole_core::models::ModelMetrics;
    use mlconsole_core::operations::{Operation, PreconditionFailure};
    use std::collections::BTreeMap;

    fn results(names: &[&str]) -> ModelResults {
        let mut models = BTreeMap::new();
        for name in names {
            models.insert(
                name.to_string(),
                ModelMetrics {
                    accuracy: Some(serde_json::json!(0.9)),
                    rmse: Some(serde_json::json!(0.1)),
                    model_path: format!("uploads/{name}_model.pkl"),
                },
            );
        }
        ModelResults::new(models)
    }

    #[test]
    fn test_default_training_parameters() {
        let state = DashboardState::default();
        assert_eq!(state.training_parameters(), TrainingParameters::default());
        assert_eq!(state.criterion.value(), "gini");
    }

    #[test]
    fn test_edits_flow_into_training_parameters() {
        let store = DashboardStore::new();
        store.reduce(&Action::EditField(FieldId::MaxDepth, InputEdit::Backspace));
        store.reduce(&Action::EditField(FieldId::MaxDepth, InputEdit::Backspace));
        store.reduce(&Action::EditField(FieldId::MaxDepth, InputEdit::Insert('5')));

        assert_eq!(store.get_state().training_parameters().max_depth.as_str(), "5");
    }

    #[test]
    fn test_ingest_success_stores_results_and_message() {
        let store = DashboardStore::new();
        store.reduce(&Action::ResultsLoaded(
            0,
            Operation::Ingest,
            results(&["SVM"]),
        ));

        let state = store.get_state();
        assert_eq!(state.results.as_ref().map(|r| r.len()), Some(1));
        assert_eq!(
            state.training_message,
            "Data ingested and models trained successfully!"
        );
    }

    #[test]
    fn test_messages_go_to_their_channel() {
        let store = DashboardStore::new();
        store.reduce(&Action::OperationFailed(0, Operation::Train));
        store.reduce(&Action::BackendMessageReceived(
            0,
            Operation::Transform,
            "Features removed".to_string(),
        ));
        store.reduce(&Action::OperationRejected(
            Operation::Freeze,
            PreconditionFailure::NoResults,
        ));

        let state = store.get_state();
        assert_eq!(state.training_message, "Error training models.");
        assert_eq!(state.transformation_message, "Features removed");
        assert_eq!(state.freeze_message, "Please train models first.");
    }

    #[test]
    fn test_messages_are_overwritten_not_cleared() {
        let store = DashboardStore::new();
        store.reduce(&Action::OperationFailed(0, Operation::Ingest));
        store.reduce(&Action::SelectFile(Some(PathBuf::from("iris.csv"))));
        assert_eq!(store.get_state().training_message, "Error uploading file.");

        store.reduce(&Action::ResultsLoaded(0, Operation::Train, results(&["SVM"])));
        assert_eq!(store.get_state().training_message, "Models trained successfully!");
    }

    #[test]
    fn test_tab_switches_preserve_state() {
        let store = DashboardStore::new();
        store.reduce(&Action::ResultsLoaded(0, Operation::Ingest, results(&["SVM"])));
        store.reduce(&Action::BackendMessageReceived(
            0,
            Operation::Freeze,
            "frozen".to_string(),
        ));
        let before = store.get_state();

        for tab in TabId::ALL {
            store.reduce(&Action::SwitchTab(tab));
        }

        let after = store.get_state();
        assert_eq!(after.results, before.results);
        assert_eq!(after.freeze_message, "frozen");
        assert_eq!(after.training_message, before.training_message);
    }

    #[test]
    fn test_cycle_source_model() {
        let store = DashboardStore::new();
        // nothing to cycle through yet
        store.reduce(&Action::CycleSourceModel);
        assert_eq!(store.get_state().transform_source(), None);

        store.reduce(&Action::ResultsLoaded(
            0,
            Operation::Ingest,
            results(&["AdaBoost", "Random Forest", "SVM"]),
        ));
        assert_eq!(store.get_state().transform_source(), Some("Random Forest"));

        store.reduce(&Action::CycleSourceModel);
        assert_eq!(store.get_state().transform_source(), Some("SVM"));
        store.reduce(&Action::CycleSourceModel);
        assert_eq!(store.get_state().transform_source(), Some("AdaBoost"));
    }

    #[test]
    fn test_stale_source_model_falls_back() {
        let store = DashboardStore::new();
        store.reduce(&Action::ResultsLoaded(0, Operation::Ingest, results(&["Random Forest", "SVM"])));
        store.reduce(&Action::CycleSourceModel);
        assert_eq!(store.get_state().transform_source(), Some("SVM"));

        store.reduce(&Action::ResultsLoaded(0, Operation::Train, results(&["Bagging", "Random Forest"])));
        assert_eq!(store.get_state().transform_source(), Some("Random Forest"));
    }

    #[test]
    fn test_logout_discards_dashboard_state() {
        let store = DashboardStore::new();
        store.reduce(&Action::SelectFile(Some(PathBuf::from("iris.csv"))));
        store.reduce(&Action::ResultsLoaded(0, Operation::Ingest, results(&["SVM"])));
        store.reduce(&Action::Logout);

        let state = store.get_state();
        assert!(state.selected_file.is_none());
        assert!(state.results.is_none());
        assert!(state.training_message.is_empty());
    }

    #[test]
    fn test_outcome_from_before_logout_is_dropped() {
        let store = DashboardStore::new();
        store.reduce(&Action::SelectFile(Some(PathBuf::from("iris.csv"))));
        let sent_in = store.get_state().epoch;

        // logout happens while the ingest is still in flight
        store.reduce(&Action::Logout);
        store.reduce(&Action::ResultsLoaded(sent_in, Operation::Ingest, results(&["SVM"])));
        store.reduce(&Action::OperationFailed(sent_in, Operation::Freeze));
        store.reduce(&Action::Login(
            mlconsole_core::credentials::validate_sign_in("bob", "pw").unwrap(),
        ));

        let state = store.get_state();
        assert!(state.results.is_none());
        assert!(state.training_message.is_empty());
        assert!(state.freeze_message.is_empty());

        // the new session's own outcomes still land
        store.reduce(&Action::ResultsLoaded(state.epoch, Operation::Train, results(&["SVM"])));
        assert_eq!(store.get_state().training_message, "Models trained successfully!");
    }
}
