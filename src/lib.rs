//! mle-console - Terminal reports for experiment logging
//!
//! Renders the console output of an experiment logger: a welcome banner,
//! a startup summary of the run configuration, one table row per logging
//! tick, a summary of stored artifacts and a reload notice. Report values
//! are supplied by the caller; only configuration and run descriptors are
//! read from TOML files.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod console;
pub mod report;
pub mod reporter;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use config::{ColorMode, ReporterConfig};
pub use console::{Console, Justify, Line, Panel, Renderable, Span, Style, Table};
pub use report::{
    CheckpointPolicy, FieldValue, RunDescriptor, SeedId, StoragePaths, Tick, TimeValue,
    PLACEHOLDER,
};
pub use reporter::Reporter;
