//! # hashsmash
//!
//! Offline, dictionary-free MD5 digest recovery: exhaustively search the
//! space of fixed-length strings over a configurable alphabet, hash each
//! candidate, and report every candidate whose digest matches a target.
//!
//! ## Architecture
//! The library is split into a core engine (front-end agnostic) and
//! presentation layers:
//! - `core` - enumeration, hashing, and the parallel search coordinator
//! - `events` - event-driven progress reporting
//! - `error` - error types
//! - `cli` - command-line interface (in the binary)
//!
//! ## Guarantees
//! - The search is exhaustive: every candidate in the configured space is
//!   checked, even after all targets have matched.
//! - Result order is deterministic: partition order (alphabet order of the
//!   first character), then enumeration order within a partition,
//!   independent of worker count and completion order.

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use error::{CrackerError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point. Output goes to
/// stderr so recovered candidates on stdout stay machine-readable. With
/// `verbose`, the filter defaults to debug level; otherwise it follows
/// `RUST_LOG`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
