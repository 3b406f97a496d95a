//! Notice printed when a previous log is picked up again

/// Message logged after reloading the log in `experiment_dir`
#[must_use]
pub fn reload_message(experiment_dir: &str) -> String {
    format!("Reloaded log from {experiment_dir}")
}
