//! Error types for Gutendraft Core

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias using GutendraftError
pub type Result<T> = std::result::Result<T, GutendraftError>;

/// Top-level error type for all Gutendraft operations
#[derive(Debug, Error)]
pub enum GutendraftError {
    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Scaffold error: {0}")]
    Scaffold(#[from] ScaffoldError),

    #[error("Metadata injection error: {0}")]
    Inject(#[from] InjectError),

    #[error("Toolchain error: {0}")]
    Toolchain(#[from] ToolchainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while normalizing source documents into chapters
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("document is empty after boilerplate stripping")]
    EmptyDocument,
}

/// Errors that occur while creating the project skeleton
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("target directory already exists: {0}")]
    DirectoryExists(PathBuf),

    #[error("failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while injecting metadata into scaffolded templates
#[derive(Debug, Error)]
pub enum InjectError {
    #[error("placeholder token '{token}' not found in {path} (toolchain template mismatch?)")]
    TemplateMismatch { token: String, path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that occur while invoking the external publishing toolchain
#[derive(Debug, Error)]
pub enum ToolchainError {
    #[error("could not find the 'se' executable; install it from https://github.com/standardebooks/tools")]
    ExecutableNotFound,

    #[error("'{command}' failed with {status}\nstdout:\n{stdout}\nstderr:\n{stderr}")]
    CommandFailed {
        command: String,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
