//! # Error Module
//!
//! Error types for the digest recovery pipeline.
//!
//! ## Design Principles
//! - **Fail before searching** - configuration and target-file problems are
//!   reported before any search work begins
//! - **Never report partial results as success** - a worker fault fails the
//!   whole run instead of silently dropping its unit
//! - **Include context** - paths and unit indices, so the user can see what
//!   went wrong where

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum CrackerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("target loading error: {0}")]
    Targets(#[from] TargetError),

    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

/// Errors in the run configuration, detected before any search work
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,

    #[error("worker count must be at least 1 (got {requested})")]
    InvalidCores { requested: usize },
}

/// Errors while loading the target digest file
#[derive(Error, Debug)]
pub enum TargetError {
    #[error("failed to open digest file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read digest file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors during search execution
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("worker crashed while searching work unit {unit}")]
    WorkerPanicked { unit: usize },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, CrackerError>;
