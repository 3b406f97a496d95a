//! Experiment logging reports
//!
//! Pure builders for the welcome banner, startup summary, tick update
//! table, storage summary and reload notice. Printing happens through
//! [`crate::reporter::Reporter`].

pub mod reload;
pub mod startup;
pub mod storage;
pub mod update;
pub mod value;
pub mod welcome;

pub use reload::reload_message;
pub use startup::{startup_panel, startup_rows, CheckpointPolicy, RunDescriptor};
pub use storage::{storage_rows, storage_table, StoragePaths};
pub use update::{tick_row, update_table, Tick};
pub use value::{format_stat, FieldValue, SeedId, TimeValue, PLACEHOLDER};
pub use welcome::{welcome_panel, VERSION};
