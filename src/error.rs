use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures from the rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("failed to load {path}: {message}")]
    Navigate { path: PathBuf, message: String },

    #[error("PDF generation failed: {0}")]
    Print(String),
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot determine executable directory: {0}")]
    ExeDir(#[source] io::Error),
}
