//! Error types

use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SampleGenError>;

/// Main error type
#[derive(Debug, Error)]
pub enum SampleGenError {
    #[error("Config error: {message}")]
    Config { message: String },

    #[error("Input error: {message}")]
    Input { message: String },

    #[error("{tool} executable not found. Install it or set {hint}")]
    ToolNotFound { tool: &'static str, hint: &'static str },

    #[error("Failed to spawn {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with status {exit_code} on {path}\n{stderr}")]
    ToolFailed {
        tool: &'static str,
        exit_code: i32,
        path: PathBuf,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SampleGenError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config { message: msg.into() }
    }

    pub fn input<S: Into<String>>(msg: S) -> Self {
        Self::Input { message: msg.into() }
    }

    pub fn tool_failed(
        tool: &'static str,
        exit_code: i32,
        path: &Path,
        stderr: impl Into<String>,
    ) -> Self {
        Self::ToolFailed {
            tool,
            exit_code,
            path: path.to_path_buf(),
            stderr: stderr.into(),
        }
    }
}
