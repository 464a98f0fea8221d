//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so error
//! handling stays consistent across the crate.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Invalid shift status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Shift not found: {0}")]
    ShiftNotFound(i64),

    #[error("No active shift for {0}")]
    NoActiveShift(String),

    #[error("Clock transition not allowed: {0}")]
    Clock(String),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
