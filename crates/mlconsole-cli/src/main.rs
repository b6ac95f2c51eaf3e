use api::{FreezeArgs, IngestArgs, TrainArgs, TransformArgs};
use clap::{Parser, Subcommand};
use components::init::{InitArgs, handle_init};
use components::operations;
use dotenv::dotenv;
use log::error;
use mlconsole_api::BackendClient;
use mlconsole_tui::tui_main;
use std::process::ExitCode;
use std::sync::Arc;

mod api;
mod components;
mod models;

/// Terminal console for an ML training backend
#[derive(Parser, Debug)]
#[command(name = "mlconsole", version, about, long_about = None)]
struct Cli {
    /// Backend origin, overriding MLCONSOLE_BACKEND_URL
    #[arg(long, global = true)]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the interactive console (default)
    Tui,
    /// Write an example .env file
    Init(InitArgs),
    Ingest(IngestArgs),
    Train(TrainArgs),
    Transform(TransformArgs),
    Freeze(FreezeArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    let client = match &cli.backend_url {
        Some(url) => BackendClient::with_base_url(url),
        None => BackendClient::new(),
    };

    let command = cli.command.unwrap_or(Command::Tui);
    // the TUI installs its own in-memory logger
    if !matches!(command, Command::Tui) {
        env_logger::init();
    }

    match command {
        Command::Tui => match tui_main(Arc::new(client)).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(_) => ExitCode::FAILURE,
        },
        Command::Init(args) => match handle_init(args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("Failed to write example .env file: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Ingest(args) => operations::handle_ingest(&client, args).await,
        Command::Train(args) => operations::handle_train(&client, args).await,
        Command::Transform(args) => operations::handle_transform(&client, args).await,
        Command::Freeze(args) => operations::handle_freeze(&client, args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransformationArg;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["mlconsole"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.backend_url.is_none());
    }

    #[test]
    fn test_backend_url_is_global() {
        let cli = Cli::try_parse_from([
            "mlconsole",
            "ingest",
            "iris.csv",
            "--backend-url",
            "http://ml.internal:8080",
        ])
        .unwrap();
        assert_eq!(cli.backend_url.as_deref(), Some("http://ml.internal:8080"));
        assert!(matches!(cli.command, Some(Command::Ingest(_))));
    }

    #[test]
    fn test_train_defaults() {
        let cli = Cli::try_parse_from(["mlconsole", "train", "iris.csv"]).unwrap();
        let Some(Command::Train(args)) = cli.command else {
            panic!("expected train");
        };
        assert_eq!(args.training_percentage, "80");
        assert_eq!(args.testing_percentage, "20");
        assert_eq!(args.criterion, "gini");
        assert_eq!(args.max_depth, "10");
        assert_eq!(args.n_estimators, "100");
    }

    #[test]
    fn test_transform_args() {
        let cli = Cli::try_parse_from([
            "mlconsole",
            "transform",
            "--transformation",
            "convert-to-numbers",
            "--features",
            "sex,embarked",
            "--file-path",
            "uploads/rf.pkl",
        ])
        .unwrap();
        let Some(Command::Transform(args)) = cli.command else {
            panic!("expected transform");
        };
        assert_eq!(args.transformation, TransformationArg::ConvertToNumbers);
        assert_eq!(args.features, "sex,embarked");
    }

    #[test]
    fn test_freeze_requires_results() {
        assert!(Cli::try_parse_from(["mlconsole", "freeze"]).is_err());
    }
}
