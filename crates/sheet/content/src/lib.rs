//! Host-boundary adapter for the sheet calculator.
//!
//! The host application persists actors as JSON documents and calls into
//! this crate from its document lifecycle: [`prepare::prepare_actor`]
//! parses a record into a [`sheet_core::ActorSnapshot`], runs the pure
//! calculator, and merges the derived fields back into the record;
//! [`roll::roll_context`] builds the flattened view the host's dice-formula
//! evaluator consumes. Host services are passed in explicitly - nothing in
//! this crate reaches for ambient globals.

pub mod config;
pub mod prepare;
pub mod record;
pub mod roll;

pub use config::{ConfigLoader, SystemConfig};
pub use prepare::prepare_actor;
pub use record::{RecordError, actor_kind, parse_snapshot};
pub use roll::roll_context;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
