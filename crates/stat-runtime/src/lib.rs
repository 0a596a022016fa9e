//! Runtime layer for Baby Stat.
//!
//! Owns the process-wide state the display layer works against: the cached
//! analysis of the currently loaded file, keyed by content identity.

pub mod data_manager;

pub use stat_core as core;
pub use stat_data as data;
