//! Command implementations.

mod snapshot;

pub use snapshot::snapshot_execute;
