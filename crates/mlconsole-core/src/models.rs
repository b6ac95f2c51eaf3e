/// Request and response shapes exchanged with the ML backend.
///
/// The backend owns these shapes; nothing coming back is validated beyond
/// what serde needs to read it.
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Model the transform source falls back to when the user hasn't picked one
pub const DEFAULT_TRANSFORM_MODEL: &str = "Random Forest";

/// Metrics the backend reports for one trained model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawModelMetrics")]
pub struct ModelMetrics {
    pub accuracy: Option<Value>,
    pub rmse: Option<Value>,
    pub model_path: String,
}

/// Wire form of [`ModelMetrics`]. The metrics arrive either flat or nested
/// under `evaluation`, and `rmse` is left out for pure classifiers.
#[derive(Deserialize)]
struct RawModelMetrics {
    #[serde(default)]
    accuracy: Option<Value>,
    #[serde(default)]
    rmse: Option<Value>,
    #[serde(default)]
    evaluation: Option<Evaluation>,
    #[serde(default)]
    model_path: String,
}

#[derive(Deserialize, Default)]
struct Evaluation {
    #[serde(default)]
    accuracy: Option<Value>,
    #[serde(default)]
    rmse: Option<Value>,
}

impl From<RawModelMetrics> for ModelMetrics {
    fn from(raw: RawModelMetrics) -> Self {
        let evaluation = raw.evaluation.unwrap_or_default();
        Self {
            accuracy: raw.accuracy.or(evaluation.accuracy),
            rmse: raw.rmse.or(evaluation.rmse),
            model_path: raw.model_path,
        }
    }
}

fn display_metric(metric: &Option<Value>) -> String {
    match metric {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::from("n/a"),
        Some(other) => other.to_string(),
    }
}

impl ModelMetrics {
    pub fn accuracy_display(&self) -> String {
        display_metric(&self.accuracy)
    }

    pub fn rmse_display(&self) -> String {
        display_metric(&self.rmse)
    }
}

/// Trained models keyed by name, as returned by `/upload` and `/train`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelResults(BTreeMap<String, ModelMetrics>);

impl ModelResults {
    pub fn new(models: BTreeMap<String, ModelMetrics>) -> Self {
        Self(models)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, model: &str) -> Option<&ModelMetrics> {
        self.0.get(model)
    }

    pub fn contains(&self, model: &str) -> bool {
        self.0.contains_key(model)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModelMetrics)> {
        self.0.iter()
    }

    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Name to model path for every model, the shape `/freeze` expects
    pub fn model_paths(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(name, metrics)| (name.clone(), metrics.model_path.clone()))
            .collect()
    }

    /// One line per model in the form shown on the ingestion and training tabs
    pub fn summary_lines(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|(name, metrics)| {
                format!(
                    "{}: Accuracy = {}, RMSE = {}",
                    name,
                    metrics.accuracy_display(),
                    metrics.rmse_display()
                )
            })
            .collect()
    }

    /// The model whose path a transform is sent with. A preferred model that is
    /// no longer present is ignored, then [`DEFAULT_TRANSFORM_MODEL`], then the
    /// first model by name.
    pub fn resolve_source_model<'a>(&'a self, preferred: Option<&str>) -> Option<&'a str> {
        preferred
            .and_then(|p| self.0.get_key_value(p))
            .or_else(|| self.0.get_key_value(DEFAULT_TRANSFORM_MODEL))
            .or_else(|| self.0.iter().next())
            .map(|(name, _)| name.as_str())
    }

    /// Model after `current` in name order, wrapping around
    pub fn next_model_after(&self, current: Option<&str>) -> Option<&str> {
        let current = self.resolve_source_model(current)?;
        self.0
            .range::<str, _>((
                std::ops::Bound::Excluded(current),
                std::ops::Bound::Unbounded,
            ))
            .next()
            .or_else(|| self.0.iter().next())
            .map(|(name, _)| name.as_str())
    }
}

/// Text typed into a numeric training field. Sent as a JSON number when it
/// reads as one and as the raw string otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberText(pub String);

impl NumberText {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for NumberText {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl Serialize for NumberText {
    /// A number goes out only when its JSON form is exactly the typed text,
    /// so "1e3", "007" or an integer past u64 stay strings.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.0.trim();
        if let Ok(i) = text.parse::<i64>() {
            if i.to_string() == text {
                return serializer.serialize_i64(i);
            }
        } else if let Ok(u) = text.parse::<u64>() {
            if u.to_string() == text {
                return serializer.serialize_u64(u);
            }
        } else if let Ok(f) = text.parse::<f64>() {
            let exact = serde_json::Number::from_f64(f).is_some_and(|n| n.to_string() == text);
            if exact {
                return serializer.serialize_f64(f);
            }
        }
        serializer.serialize_str(&self.0)
    }
}

/// Knobs sent with every training request. Only defaulted, never range checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingParameters {
    pub training_percentage: NumberText,
    pub testing_percentage: NumberText,
    pub criterion: String,
    pub max_depth: NumberText,
    pub n_estimators: NumberText,
}

impl Default for TrainingParameters {
    fn default() -> Self {
        Self {
            training_percentage: NumberText::from(80),
            testing_percentage: NumberText::from(20),
            criterion: String::from("gini"),
            max_depth: NumberText::from(10),
            n_estimators: NumberText::from(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
    RemoveFeatures,
    ConvertToNumbers,
}

impl Transformation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::RemoveFeatures => "Remove features (comma separated)",
            Self::ConvertToNumbers => "Convert to numbers (comma separated)",
        }
    }
}

/// Body of `POST /train`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainRequest {
    pub file_path: String,
    #[serde(flatten)]
    pub params: TrainingParameters,
}

/// Body of `POST /transform`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformRequest {
    pub transformation: Transformation,
    pub features: Vec<String>,
    pub file_path: String,
}

/// Body of `POST /freeze`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreezeRequest {
    pub model_paths: BTreeMap<String, String>,
}

impl FreezeRequest {
    pub fn from_results(results: &ModelResults) -> Self {
        Self {
            model_paths: results.model_paths(),
        }
    }
}

/// `{message}` reply of `/transform` and `/freeze`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackendMessage {
    #[serde(default)]
    pub message: String,
}

/// Split a comma separated feature list, trimming entries and dropping blanks
pub fn parse_feature_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn results(names: &[&str]) -> ModelResults {
        ModelResults::new(
            names
                .iter()
                .map(|n| {
                    (
                        n.to_string(),
                        ModelMetrics {
                            accuracy: Some(json!(0.9)),
                            rmse: None,
                            model_path: format!("uploads/{n}_model.pkl"),
                        },
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_parse_flat_results() {
        let payload = r#"{"SVM": {"accuracy": 0.81, "rmse": 0.43, "model_path": "uploads/SVM_model.pkl"}}"#;
        let parsed: ModelResults = serde_json::from_str(payload).unwrap();
        let svm = parsed.get("SVM").unwrap();
        assert_eq!(svm.accuracy, Some(json!(0.81)));
        assert_eq!(svm.rmse, Some(json!(0.43)));
        assert_eq!(svm.model_path, "uploads/SVM_model.pkl");
    }

    #[test]
    fn test_parse_nested_evaluation_results() {
        let payload = r#"{
            "Random Forest": {"evaluation": {"accuracy": 0.95}, "model_path": "uploads/Random Forest_model.pkl"}
        }"#;
        let parsed: ModelResults = serde_json::from_str(payload).unwrap();
        let rf = parsed.get("Random Forest").unwrap();
        assert_eq!(rf.accuracy, Some(json!(0.95)));
        assert_eq!(rf.rmse, None);
        assert_eq!(rf.rmse_display(), "n/a");
    }

    #[test]
    fn test_summary_lines_in_name_order() {
        let payload = r#"{
            "XGBoost": {"accuracy": 0.9, "rmse": 0.3, "model_path": "x"},
            "AdaBoost": {"accuracy": "0.7", "model_path": "a"}
        }"#;
        let parsed: ModelResults = serde_json::from_str(payload).unwrap();
        assert_eq!(
            parsed.summary_lines(),
            vec![
                "AdaBoost: Accuracy = 0.7, RMSE = n/a".to_string(),
                "XGBoost: Accuracy = 0.9, RMSE = 0.3".to_string(),
            ]
        );
    }

    #[test]
    fn test_freeze_request_carries_every_model_path() {
        let req = FreezeRequest::from_results(&results(&["SVM", "Bagging"]));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(
            body,
            json!({"model_paths": {
                "Bagging": "uploads/Bagging_model.pkl",
                "SVM": "uploads/SVM_model.pkl"
            }})
        );
    }

    #[test]
    fn test_source_model_prefers_selection_then_random_forest() {
        let r = results(&["AdaBoost", "Random Forest", "SVM"]);
        assert_eq!(r.resolve_source_model(Some("SVM")), Some("SVM"));
        assert_eq!(r.resolve_source_model(None), Some("Random Forest"));
        // stale selection falls back
        assert_eq!(r.resolve_source_model(Some("Gone")), Some("Random Forest"));
    }

    #[test]
    fn test_source_model_without_random_forest_uses_first_name() {
        let r = results(&["SVM", "Bagging"]);
        assert_eq!(r.resolve_source_model(None), Some("Bagging"));
        assert_eq!(ModelResults::default().resolve_source_model(None), None);
    }

    #[test]
    fn test_next_model_wraps_around() {
        let r = results(&["AdaBoost", "Random Forest", "SVM"]);
        assert_eq!(r.next_model_after(None), Some("SVM"));
        assert_eq!(r.next_model_after(Some("SVM")), Some("AdaBoost"));
        assert_eq!(r.next_model_after(Some("AdaBoost")), Some("Random Forest"));
    }

    #[test]
    fn test_training_parameters_default_payload() {
        let req = TrainRequest {
            file_path: "data/iris.csv".to_string(),
            params: TrainingParameters::default(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "file_path": "data/iris.csv",
                "training_percentage": 80,
                "testing_percentage": 20,
                "criterion": "gini",
                "max_depth": 10,
                "n_estimators": 100
            })
        );
    }

    #[test]
    fn test_number_text_sent_verbatim_when_not_numeric() {
        let params = TrainingParameters {
            training_percentage: NumberText::new("75.5"),
            max_depth: NumberText::new("none"),
            ..TrainingParameters::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["training_percentage"], json!(75.5));
        assert_eq!(body["max_depth"], json!("none"));
    }

    #[test]
    fn test_number_text_never_rewrites_digits() {
        let as_json = |text: &str| serde_json::to_string(&NumberText::new(text)).unwrap();

        assert_eq!(as_json("12345678901234567890"), "12345678901234567890");
        assert_eq!(as_json("-42"), "-42");
        assert_eq!(as_json("0.25"), "0.25");
        // would otherwise come out as 1000.0, 7 and a rounded float
        assert_eq!(as_json("1e3"), "\"1e3\"");
        assert_eq!(as_json("007"), "\"007\"");
        assert_eq!(
            as_json("123456789012345678901234"),
            "\"123456789012345678901234\""
        );
    }

    #[test]
    fn test_transform_request_payload() {
        let req = TransformRequest {
            transformation: Transformation::ConvertToNumbers,
            features: parse_feature_list("age, income,,"),
            file_path: "uploads/Random Forest_model.pkl".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "transformation": "convert_to_numbers",
                "features": ["age", "income"],
                "file_path": "uploads/Random Forest_model.pkl"
            })
        );
    }

    #[test]
    fn test_backend_message_defaults_when_absent() {
        let msg: BackendMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(msg.message, "");
    }
}
