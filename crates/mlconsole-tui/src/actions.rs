/// Core Action types for the flux architecture.
/// All state mutations flow through Actions dispatched to the Dispatcher.
use std::path::PathBuf;

use mlconsole_core::{
    credentials::{Credentials, SignUpDetails, ValidationError},
    models::{ModelResults, Transformation},
    operations::{Operation, PreconditionFailure},
};

use crate::common::InputEdit;

/// Counts logouts. A request belongs to the epoch it was sent in.
pub type SessionEpoch = u64;

/// Represents all possible user intents and system events in the application
#[derive(Debug, Clone)]
pub enum Action {
    // ===== Session =====
    /// Sign-in form passed validation
    Login(Credentials),

    /// Sign-up form passed validation. Treated as a login by the session gate.
    SignUp(SignUpDetails),

    /// User logged out of the dashboard
    Logout,

    // ===== Credentials form =====
    /// User switched between the sign-in and sign-up forms
    ToggleAuthMode,

    /// Form submission failed local validation
    CredentialsRejected(ValidationError),

    // ===== Navigation & editing =====
    /// User switched to a different dashboard tab
    SwitchTab(TabId),

    /// Focus moved to the item at this index of the current view's focus order
    FocusItem(usize),

    /// Focused text field entered editing
    BeginEditing,

    /// Editing ended without any other effect
    StopEditing,

    /// A key edited a text field
    EditField(FieldId, InputEdit),

    /// User toggled the developer log overlay
    ToggleLogOverlay,

    /// Scroll the log overlay; positive is towards older lines
    ScrollLogs(i32),

    // ===== Dashboard intents =====
    /// Dataset path committed on the ingestion tab; `None` clears the selection
    SelectFile(Option<PathBuf>),

    /// Move the transform source to the next model
    CycleSourceModel,

    RequestIngest,
    RequestTrain,
    RequestFreeze,
    RequestTransform {
        transformation: Transformation,
        features: Vec<String>,
    },

    // ===== System/Effect Actions (emitted by Effects) =====
    /// Operation blocked before any request was made
    OperationRejected(Operation, PreconditionFailure),

    // Outcomes carry the dashboard session they were requested in so a
    // response landing after logout is dropped.
    /// Ingest or train came back with results
    ResultsLoaded(SessionEpoch, Operation, ModelResults),

    /// Transform or freeze came back with the backend's message
    BackendMessageReceived(SessionEpoch, Operation, String),

    /// Request was rejected, returned an error status or didn't parse
    OperationFailed(SessionEpoch, Operation),

    /// Application should exit
    Quit,
}

/// The four fixed dashboard tabs, in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TabId {
    #[default]
    DataIngestion,
    DataTransformation,
    AutoTrain,
    Freeze,
}

impl TabId {
    pub const ALL: [TabId; 4] = [
        TabId::DataIngestion,
        TabId::DataTransformation,
        TabId::AutoTrain,
        TabId::Freeze,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::DataIngestion => "Data Ingestion",
            Self::DataTransformation => "Data Transformation",
            Self::AutoTrain => "Auto Train ML models",
            Self::Freeze => "Freeze the learnings",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::DataIngestion => 0,
            Self::DataTransformation => 1,
            Self::AutoTrain => 2,
            Self::Freeze => 3,
        }
    }
}

/// Every editable text field in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Username,
    Email,
    Password,
    ConfirmPassword,
    FilePath,
    RemoveFeatures,
    ConvertToNumbers,
    TrainingPercentage,
    TestingPercentage,
    Criterion,
    MaxDepth,
    NEstimators,
}

impl FieldId {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::FilePath => "Upload File (path)",
            Self::RemoveFeatures => Transformation::RemoveFeatures.label(),
            Self::ConvertToNumbers => Transformation::ConvertToNumbers.label(),
            Self::TrainingPercentage => "Training Percentage",
            Self::TestingPercentage => "Testing Percentage",
            Self::Criterion => "Criterion",
            Self::MaxDepth => "Max Depth",
            Self::NEstimators => "Number of Estimators",
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Whether the field belongs to the credentials form rather than the dashboard
    pub fn is_credential(&self) -> bool {
        matches!(
            self,
            Self::Username | Self::Email | Self::Password | Self::ConfirmPassword
        )
    }
}

/// Every pressable button in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    SubmitCredentials,
    ToggleAuthMode,
    Ingest,
    CycleSourceModel,
    TrainModels,
    FreezeModels,
}

/// Something keyboard focus can rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusItem {
    Field(FieldId),
    Button(ButtonId),
}
