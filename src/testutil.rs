//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::config::{ColorMode, ReporterConfig};
use crate::report::{RunDescriptor, SeedId};
use crate::reporter::Reporter;

/// A reporter writing uncoloured output into memory
#[must_use]
pub fn plain_reporter(width: usize) -> Reporter<Vec<u8>> {
    let config = ReporterConfig {
        width,
        color: ColorMode::Never,
    };
    Reporter::new(Vec::new(), &config)
}

/// Everything a test reporter has written so far
#[must_use]
pub fn output(reporter: Reporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).expect("reporter output is UTF-8")
}

/// A typical run: two time and two stat variables, config file, seed 42,
/// torch model and no checkpoint cadence.
#[must_use]
pub fn make_test_run(experiment_dir: &str) -> RunDescriptor {
    RunDescriptor {
        config_fname: Some("base_config.yaml".to_string()),
        time_to_track: vec!["num_updates".to_string(), "num_epochs".to_string()],
        what_to_track: vec!["train_loss".to_string(), "test_loss".to_string()],
        model_type: "torch".to_string(),
        seed_id: SeedId::Number(42),
        ..RunDescriptor::new(experiment_dir)
    }
}
