/// Headless runs of the four backend operations
use crate::api::{FreezeArgs, IngestArgs, TrainArgs, TransformArgs};
use log::{error, info};
use mlconsole_api::{ApiError, MlBackend};
use mlconsole_core::{
    exceptions::GenericError,
    models::{
        FreezeRequest, ModelResults, NumberText, TrainRequest, TrainingParameters,
        TransformRequest, parse_feature_list,
    },
    operations::{Operation, PreconditionFailure},
};
use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitCode;

pub async fn handle_ingest(backend: &dyn MlBackend, args: IngestArgs) -> ExitCode {
    report(Operation::Ingest, backend.upload(&args.file).await)
}

pub async fn handle_train(backend: &dyn MlBackend, args: TrainArgs) -> ExitCode {
    let request = TrainRequest {
        file_path: args.file.display().to_string(),
        params: TrainingParameters {
            training_percentage: NumberText::new(args.training_percentage),
            testing_percentage: NumberText::new(args.testing_percentage),
            criterion: args.criterion,
            max_depth: NumberText::new(args.max_depth),
            n_estimators: NumberText::new(args.n_estimators),
        },
    };
    report(Operation::Train, backend.train(&request).await)
}

pub async fn handle_transform(backend: &dyn MlBackend, args: TransformArgs) -> ExitCode {
    let request = TransformRequest {
        transformation: args.transformation.into(),
        features: parse_feature_list(&args.features),
        file_path: args.file_path,
    };
    report(Operation::Transform, backend.transform(&request).await)
}

pub async fn handle_freeze(backend: &dyn MlBackend, args: FreezeArgs) -> ExitCode {
    let results = match load_results(&args.results) {
        Ok(results) => results,
        Err(e) => {
            error!("Could not load results from {}: {}", args.results.display(), e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let request = FreezeRequest::from_results(&results);
    report(Operation::Freeze, backend.freeze(&request).await)
}

/// Read a results mapping saved from an earlier `ingest` or `train`
pub fn load_results(path: &Path) -> Result<ModelResults, GenericError> {
    let raw = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GenericError::Precondition(PreconditionFailure::NoResults),
        _ => GenericError::IoError(e.to_string()),
    })?;
    serde_json::from_str(&raw).map_err(|e| GenericError::ParseError(e.to_string()))
}

/// Print the response body as JSON on success. On failure only the fixed
/// message reaches stderr; the cause goes to the log.
fn report<T: Serialize>(op: Operation, result: Result<T, ApiError>) -> ExitCode {
    match result {
        Ok(body) => match serde_json::to_string_pretty(&body) {
            Ok(json) => {
                info!("{} request succeeded", op);
                if let Some(message) = op.success_message() {
                    eprintln!("{}", message);
                }
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Could not serialise {} response: {}", op, e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{} request failed: {}", op, e);
            eprintln!("{}", op.failure_message());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransformationArg;
    use async_trait::async_trait;
    use mlconsole_core::models::{BackendMessage, Transformation};
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingBackend {
        trains: Mutex<Vec<TrainRequest>>,
        transforms: Mutex<Vec<TransformRequest>>,
        freezes: Mutex<Vec<FreezeRequest>>,
    }

    #[async_trait]
    impl MlBackend for RecordingBackend {
        async fn upload(&self, file: &Path) -> Result<ModelResults, ApiError> {
            Err(ApiError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                file.display().to_string(),
            )))
        }

        async fn transform(&self, request: &TransformRequest) -> Result<BackendMessage, ApiError> {
            self.transforms.lock().unwrap().push(request.clone());
            Ok(BackendMessage::default())
        }

        async fn train(&self, request: &TrainRequest) -> Result<ModelResults, ApiError> {
            self.trains.lock().unwrap().push(request.clone());
            Ok(ModelResults::default())
        }

        async fn freeze(&self, request: &FreezeRequest) -> Result<BackendMessage, ApiError> {
            self.freezes.lock().unwrap().push(request.clone());
            Ok(BackendMessage::default())
        }
    }

    const SAVED_RESULTS: &str = r#"{
        "SVM": {"accuracy": 0.91, "rmse": 0.3, "model_path": "uploads/svm.pkl"},
        "Random Forest": {"accuracy": 0.95, "rmse": 0.2, "model_path": "uploads/rf.pkl"}
    }"#;

    #[test]
    fn test_load_results_missing_file_means_no_results() {
        let err = load_results(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(
            err,
            GenericError::Precondition(PreconditionFailure::NoResults)
        );
        assert_eq!(err.to_string(), "Please train models first.");
    }

    #[test]
    fn test_load_results_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            load_results(&path),
            Err(GenericError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn test_freeze_sends_every_saved_model_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(&path, SAVED_RESULTS).unwrap();
        let backend = RecordingBackend::default();

        let code = handle_freeze(&backend, FreezeArgs { results: path }).await;

        assert_eq!(code, ExitCode::SUCCESS);
        let freezes = backend.freezes.lock().unwrap();
        assert_eq!(freezes[0].model_paths.len(), 2);
        assert_eq!(freezes[0].model_paths["SVM"], "uploads/svm.pkl");
    }

    #[tokio::test]
    async fn test_freeze_without_results_file_never_calls_backend() {
        let backend = RecordingBackend::default();
        let code = handle_freeze(
            &backend,
            FreezeArgs {
                results: PathBuf::from("/definitely/not/here.json"),
            },
        )
        .await;

        assert_eq!(code, ExitCode::FAILURE);
        assert!(backend.freezes.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transform_splits_features() {
        let backend = RecordingBackend::default();
        let code = handle_transform(
            &backend,
            TransformArgs {
                transformation: TransformationArg::RemoveFeatures,
                features: "id, name,,".to_string(),
                file_path: "uploads/rf.pkl".to_string(),
            },
        )
        .await;

        assert_eq!(code, ExitCode::SUCCESS);
        let transforms = backend.transforms.lock().unwrap();
        assert_eq!(transforms[0].transformation, Transformation::RemoveFeatures);
        assert_eq!(transforms[0].features, vec!["id", "name"]);
    }

    #[tokio::test]
    async fn test_train_passes_parameters_verbatim() {
        let backend = RecordingBackend::default();
        handle_train(
            &backend,
            TrainArgs {
                file: PathBuf::from("data/iris.csv"),
                training_percentage: "70".to_string(),
                testing_percentage: "30".to_string(),
                criterion: "entropy".to_string(),
                max_depth: "abc".to_string(),
                n_estimators: "50".to_string(),
            },
        )
        .await;

        let trains = backend.trains.lock().unwrap();
        assert_eq!(trains[0].file_path, "data/iris.csv");
        assert_eq!(trains[0].params.max_depth.as_str(), "abc");
        assert_eq!(trains[0].params.criterion, "entropy");
    }

    #[tokio::test]
    async fn test_failed_request_exits_non_zero() {
        let backend = RecordingBackend::default();
        let code = handle_ingest(
            &backend,
            IngestArgs {
                file: PathBuf::from("iris.csv"),
            },
        )
        .await;
        assert_eq!(code, ExitCode::FAILURE);
    }
}
