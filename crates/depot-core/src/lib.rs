//! Core types and capability traits for depot.
//!
//! This crate provides the fundamental data structures shared across the
//! depot ecosystem: selection specifications, batch outcomes, configuration,
//! and the capability traits the engine calls through.

mod config;
mod error;
mod fs;
mod name;
mod selection;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use error::DepotError;
pub use fs::FileSystem;
pub use name::NameGenerator;
pub use selection::{AllToken, EntryFailure, SelectionSpec};
