/// The four dashboard operations and the fixed strings a user sees for them.
///
/// Every operation runs the same cycle: guard the precondition, build the
/// payload, send one request, then show either the result or the operation's
/// failure message. The underlying error only ever goes to the log.
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{ModelResults, Transformation, TransformRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Ingest,
    Transform,
    Train,
    Freeze,
}

/// The UI message strings. Ingest and train write to the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageChannel {
    Training,
    Transformation,
    Freeze,
}

impl Operation {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Ingest => "/upload",
            Self::Transform => "/transform",
            Self::Train => "/train",
            Self::Freeze => "/freeze",
        }
    }

    pub fn channel(&self) -> MessageChannel {
        match self {
            Self::Ingest | Self::Train => MessageChannel::Training,
            Self::Transform => MessageChannel::Transformation,
            Self::Freeze => MessageChannel::Freeze,
        }
    }

    /// Fixed success text. Transform and freeze show the backend's own message instead.
    pub fn success_message(&self) -> Option<&'static str> {
        match self {
            Self::Ingest => Some("Data ingested and models trained successfully!"),
            Self::Train => Some("Models trained successfully!"),
            Self::Transform | Self::Freeze => None,
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Ingest => "Error uploading file.",
            Self::Transform => "Error transforming data.",
            Self::Train => "Error training models.",
            Self::Freeze => "Error freezing models.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ingest => "ingest",
            Self::Transform => "transform",
            Self::Train => "train",
            Self::Freeze => "freeze",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PreconditionFailure {
    #[error("Please select a file to upload.")]
    NoFileToUpload,
    #[error("Please upload a file first.")]
    NoFile,
    #[error("Please train models first.")]
    NoResults,
}

/// Presence check for the selected dataset. Ingest words the failure differently.
pub fn require_file(op: Operation, file: Option<PathBuf>) -> Result<PathBuf, PreconditionFailure> {
    file.ok_or(match op {
        Operation::Ingest => PreconditionFailure::NoFileToUpload,
        _ => PreconditionFailure::NoFile,
    })
}

/// Presence check for stored results. An empty mapping still counts as present.
pub fn require_results(results: Option<ModelResults>) -> Result<ModelResults, PreconditionFailure> {
    results.ok_or(PreconditionFailure::NoResults)
}

impl TransformRequest {
    /// Build a transform against the resolved source model's path. Fails when
    /// there is no model to take a path from.
    pub fn from_results(
        transformation: Transformation,
        features: Vec<String>,
        results: &ModelResults,
        preferred_model: Option<&str>,
    ) -> Result<Self, PreconditionFailure> {
        let source = results
            .resolve_source_model(preferred_model)
            .and_then(|name| results.get(name))
            .ok_or(PreconditionFailure::NoResults)?;
        Ok(Self {
            transformation,
            features,
            file_path: source.model_path.clone(),
        })
    }
}
