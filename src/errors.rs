//! Unified application error type.
//! All modules (core, cli, ui, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("No more input available on stdin")]
    InputClosed,

    // ---------------------------
    // Ledger-related
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Ledger {path} has {count} unreadable record(s); refusing to rewrite it")]
    UnreadableLedger { path: String, count: usize },

    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Activity description is required")]
    EmptyActivity,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<tempfile::PersistError> for AppError {
    fn from(e: tempfile::PersistError) -> Self {
        AppError::Io(e.error)
    }
}

pub type AppResult<T> = Result<T, AppError>;
