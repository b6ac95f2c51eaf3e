/// Effects module handles side effects (network calls to the ML backend)
/// Effects are triggered by Actions and dispatch new Actions with results
use crate::actions::{Action, SessionEpoch};
use crate::dispatcher::Dispatcher;
use crate::stores::DashboardStore;
use mlconsole_api::{ApiError, MlBackend};
use mlconsole_core::{
    models::{BackendMessage, FreezeRequest, TrainRequest, Transformation, TransformRequest},
    operations::{Operation, PreconditionFailure, require_file, require_results},
};
use std::future::Future;
use std::sync::Arc;
use tokio::task;

/// Effects handler that executes side effects based on actions
pub struct Effects {
    dispatcher: Dispatcher,
    backend: Arc<dyn MlBackend>,
    dashboard_store: DashboardStore,
}

impl Effects {
    pub fn new(
        dispatcher: Dispatcher,
        backend: Arc<dyn MlBackend>,
        dashboard_store: DashboardStore,
    ) -> Self {
        Self {
            dispatcher,
            backend,
            dashboard_store,
        }
    }

    /// Handle an action and execute any necessary side effects
    pub fn handle(&self, action: &Action) {
        match action {
            Action::Login(credentials) => {
                log::info!("Login attempt for user {}", credentials.username);
            }
            Action::SignUp(details) => {
                log::info!(
                    "Sign-up accepted for user {} <{}>",
                    details.username,
                    details.email
                );
            }
            Action::Logout => log::info!("User logged out"),

            Action::RequestIngest => self.ingest(),
            Action::RequestTrain => self.train(),
            Action::RequestFreeze => self.freeze(),
            Action::RequestTransform {
                transformation,
                features,
            } => self.transform(*transformation, features.clone()),

            _ => {
                // Most actions don't require side effects
            }
        }
    }

    /// Report a failed precondition. No request is made.
    fn reject(&self, op: Operation, failure: PreconditionFailure) {
        log::warn!("{} blocked: {}", op, failure);
        self.dispatcher
            .dispatch(Action::OperationRejected(op, failure));
    }

    fn ingest(&self) {
        let op = Operation::Ingest;
        let state = self.dashboard_store.get_state();
        let file = match require_file(op, state.selected_file) {
            Ok(file) => file,
            Err(failure) => return self.reject(op, failure),
        };

        let backend = self.backend.clone();
        self.spawn_request(
            op,
            async move { backend.upload(&file).await },
            Action::ResultsLoaded,
        );
    }

    fn train(&self) {
        let op = Operation::Train;
        let state = self.dashboard_store.get_state();
        let file = match require_file(op, state.selected_file.clone()) {
            Ok(file) => file,
            Err(failure) => return self.reject(op, failure),
        };
        let request = TrainRequest {
            file_path: file.display().to_string(),
            params: state.training_parameters(),
        };

        let backend = self.backend.clone();
        self.spawn_request(
            op,
            async move { backend.train(&request).await },
            Action::ResultsLoaded,
        );
    }

    fn transform(&self, transformation: Transformation, features: Vec<String>) {
        let op = Operation::Transform;
        let state = self.dashboard_store.get_state();
        let request = require_file(op, state.selected_file.clone())
            .and_then(|_| require_results(state.results.clone()))
            .and_then(|results| {
                TransformRequest::from_results(
                    transformation,
                    features,
                    &results,
                    state.source_model.as_deref(),
                )
            });
        let request = match request {
            Ok(request) => request,
            Err(failure) => return self.reject(op, failure),
        };

        let backend = self.backend.clone();
        self.spawn_request(
            op,
            async move { backend.transform(&request).await },
            |epoch, op, reply: BackendMessage| Action::BackendMessageReceived(epoch, op, reply.message),
        );
    }

    fn freeze(&self) {
        let op = Operation::Freeze;
        let results = match require_results(self.dashboard_store.get_state().results) {
            Ok(results) => results,
            Err(failure) => return self.reject(op, failure),
        };
        let request = FreezeRequest::from_results(&results);

        let backend = self.backend.clone();
        self.spawn_request(
            op,
            async move { backend.freeze(&request).await },
            |epoch, op, reply: BackendMessage| Action::BackendMessageReceived(epoch, op, reply.message),
        );
    }

    /// Run one request in the background and dispatch its outcome, tagged
    /// with the current session epoch. Nothing stops the same operation
    /// being in flight more than once.
    fn spawn_request<T, F, S>(&self, op: Operation, request: F, on_success: S)
    where
        T: Send + 'static,
        F: Future<Output = Result<T, ApiError>> + Send + 'static,
        S: FnOnce(SessionEpoch, Operation, T) -> Action + Send + 'static,
    {
        let dispatcher = self.dispatcher.clone();
        let epoch = self.dashboard_store.get_state().epoch;

        task::spawn(async move {
            log::info!("Sending {} request to {}...", op, op.endpoint());
            match request.await {
                Ok(response) => {
                    log::info!("{} request succeeded", op);
                    dispatcher.dispatch(on_success(epoch, op, response));
                }
                Err(e) => {
                    log::error!("{} request failed: {}", op, e);
                    dispatcher.dispatch(Action::OperationFailed(epoch, op));
                }
            }
        });
    }
}
