//! # Core Module
//!
//! The digest recovery engine, independent of any front end.
//!
//! - `alphabet` - ordered candidate character set
//! - `enumerator` - lazy lexicographic candidate enumeration
//! - `hasher` - MD5 digest computation for candidates
//! - `targets` - target digest set loading and membership
//! - `search` - work-unit partitioning and the parallel coordinator
//! - `pipeline` - end-to-end orchestration with progress events

pub mod alphabet;
pub mod enumerator;
pub mod hasher;
pub mod pipeline;
pub mod search;
pub mod targets;
