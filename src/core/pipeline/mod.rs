//! # Pipeline Module
//!
//! End-to-end orchestration: load the target digest set, run the parallel
//! search, report statistics.
//!
//! ## Example
//! ```rust,ignore
//! use hashsmash::core::pipeline::Pipeline;
//!
//! let result = Pipeline::builder()
//!     .alphabet("ab".parse()?)
//!     .length(2)
//!     .cores(4)
//!     .targets_path("hashes.txt")
//!     .build()?
//!     .run()?;
//!
//! for candidate in &result.matches {
//!     println!("{candidate}");
//! }
//! ```

mod executor;

pub use executor::{CrackResult, Pipeline, PipelineBuilder, PipelineConfig};

use crate::core::targets::TargetSet;
use std::path::PathBuf;

/// Where the pipeline gets its target digests from.
#[derive(Debug, Clone)]
pub enum TargetSource {
    /// Load from a digest file when the pipeline runs
    Path(PathBuf),
    /// Use an already-loaded set (tests, embedding)
    Preloaded(TargetSet),
}
