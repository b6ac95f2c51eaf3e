use super::models::TransformationArg;
use std::path::PathBuf;

/// Upload a dataset and train the default set of models on it
#[derive(clap::Args, Debug)]
#[command(version, about, long_about = None)]
pub struct IngestArgs {
    /// CSV file to upload
    pub file: PathBuf,
}

/// Retrain every model on a dataset with explicit parameters
#[derive(clap::Args, Debug)]
#[command(version, about, long_about = None)]
pub struct TrainArgs {
    /// Dataset path, sent to the backend as-is
    pub file: PathBuf,

    #[arg(long, default_value = "80")]
    pub training_percentage: String,

    #[arg(long, default_value = "20")]
    pub testing_percentage: String,

    /// Split criterion for tree based models
    #[arg(long, default_value = "gini")]
    pub criterion: String,

    #[arg(long, default_value = "10")]
    pub max_depth: String,

    #[arg(long, default_value = "100")]
    pub n_estimators: String,
}

/// Apply a transformation to the dataset behind a trained model
#[derive(clap::Args, Debug)]
#[command(version, about, long_about = None)]
pub struct TransformArgs {
    #[arg(long, short, value_enum)]
    pub transformation: TransformationArg,

    /// Comma separated feature names
    #[arg(long, short)]
    pub features: String,

    /// model_path of the model whose data should be transformed
    #[arg(long)]
    pub file_path: String,
}

/// Persist every model listed in a saved results file
#[derive(clap::Args, Debug)]
#[command(version, about, long_about = None)]
pub struct FreezeArgs {
    /// JSON results as printed by `ingest` or `train`
    #[arg(long, short)]
    pub results: PathBuf,
}
