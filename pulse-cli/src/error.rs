//! Error types emitted by the Pulse CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pulse_data::LoadError;
use thiserror::Error;

use crate::RequestValidationError;

/// Errors emitted by the Pulse CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the dispatch request file failed.
    #[error("failed to open dispatch request at {path:?}: {source}")]
    OpenDispatchRequest {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Dispatch request JSON could not be decoded.
    #[error("failed to parse dispatch request JSON at {path:?}: {source}")]
    ParseDispatchRequest {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The dispatch request payload failed validation.
    #[error("dispatch request in {path:?} failed validation: {source}")]
    InvalidDispatchRequest {
        path: Utf8PathBuf,
        #[source]
        source: RequestValidationError,
    },
    /// An order or courier table could not be loaded.
    #[error(transparent)]
    LoadData(#[from] LoadError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
