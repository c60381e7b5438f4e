// File: src/error.rs
use thiserror::Error;

/// Failures of the ambient operations around the engine: configuration,
/// snapshots, parsing of loosely-typed parameters and collaborator calls.
///
/// The analyzers themselves never return this type. Unrecognized words
/// degrade to low-confidence results and content defects land in the
/// validation report.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown age group '{0}' (expected 2-3, 3-4 or 4-6)")]
    UnknownAgeGroup(String),

    #[error("unknown language '{0}' (expected en or he)")]
    UnknownLanguage(String),

    #[error("unknown theme '{0}'")]
    UnknownTheme(String),

    #[error("unknown sound position '{0}'")]
    UnknownSoundPosition(String),

    #[error("unknown nikud level '{0}'")]
    UnknownNikudLevel(String),

    #[error("content source failed: {0}")]
    Source(String),

    #[error("persistence sink failed: {0}")]
    Sink(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
