//! Startup summary of a run's configuration
//!
//! Parses run descriptors (TOML) and lays their fields out as a grid of
//! labelled panels.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::value::{format_field, FieldValue, SeedId};
use crate::console::{Grid, Panel, Renderable, Text};

/// Time variables the logger tracks internally; never listed in the summary
pub const HIDDEN_TIME_VARS: [&str; 2] = ["time", "time_elapsed"];

/// How model checkpoints are retained
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointPolicy {
    /// Store a checkpoint every k-th update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every_k: Option<u32>,
    /// Keep the k best checkpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    /// Stat used to rank top-k checkpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k_metric_name: Option<String>,
    /// Whether lower is better for the top-k stat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k_minimize: Option<bool>,
    /// Time variable stored alongside each checkpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_track: Option<String>,
}

/// Everything the startup summary describes about a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunDescriptor {
    /// Base experiment directory
    pub experiment_dir: String,
    /// Name of the job configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_fname: Option<String>,
    /// Time variable names, in column order
    #[serde(default)]
    pub time_to_track: Vec<String>,
    /// Stat variable names, in column order
    #[serde(default)]
    pub what_to_track: Vec<String>,
    /// Model framework label
    #[serde(default = "default_model_type")]
    pub model_type: String,
    /// Random seed used in the run
    #[serde(default)]
    pub seed_id: SeedId,
    /// Whether a tensorboard log is written as well
    #[serde(default)]
    pub use_tboard: bool,
    /// Whether the log was reloaded from a previous run
    #[serde(default)]
    pub reload: bool,
    /// How often the logger prints a tick update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_every_k_updates: Option<u32>,
    /// Checkpoint retention policy
    #[serde(default)]
    pub checkpoint: CheckpointPolicy,
}

fn default_model_type() -> String {
    "no-model-type".to_string()
}

impl RunDescriptor {
    /// A run in `experiment_dir` with everything else defaulted
    #[must_use]
    pub fn new(experiment_dir: impl Into<String>) -> Self {
        Self {
            experiment_dir: experiment_dir.into(),
            config_fname: None,
            time_to_track: Vec::new(),
            what_to_track: Vec::new(),
            model_type: default_model_type(),
            seed_id: SeedId::default(),
            use_tboard: false,
            reload: false,
            print_every_k_updates: None,
            checkpoint: CheckpointPolicy::default(),
        }
    }

    /// Load a run descriptor from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read run descriptor: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse a run descriptor from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse run descriptor")
    }

    /// Time variables as listed in the summary
    #[must_use]
    pub fn displayed_time_vars(&self) -> Vec<&str> {
        self.time_to_track
            .iter()
            .map(String::as_str)
            .filter(|t| !HIDDEN_TIME_VARS.contains(t))
            .collect()
    }
}

fn field_panel(icon: &str, title: &str, value: &FieldValue) -> Panel {
    Panel::new(Text::new(format_field(icon, title, value)))
}

/// Every-k on the left, top-k on the right; empty when neither is set.
/// The top-k metric and its direction are not shown.
fn checkpoint_row(policy: &CheckpointPolicy) -> Vec<Panel> {
    let mut row = Vec::new();
    if let Some(k) = policy.every_k {
        row.push(field_panel("🕦", "Every k-th ckpt", &FieldValue::scalar(k)));
    }
    if let Some(k) = policy.top_k {
        row.push(field_panel("🔱", "Top k ckpt", &FieldValue::scalar(k)));
    }
    row
}

/// Rows of the startup grid: (log dir, config), (time, stats),
/// (seed, model) and, when a checkpoint cadence is configured, a fourth
/// row for it. A missing config filename leaves its cell empty.
#[must_use]
pub fn startup_rows(run: &RunDescriptor) -> Vec<Vec<Panel>> {
    let mut paths = vec![field_panel(
        "📖",
        "Log Dir",
        &FieldValue::scalar(&run.experiment_dir),
    )];
    if let Some(config) = &run.config_fname {
        paths.push(field_panel("📄", "Config", &FieldValue::scalar(config)));
    }

    let mut rows = vec![
        paths,
        vec![
            field_panel("⌚", "Time", &FieldValue::list(run.displayed_time_vars())),
            field_panel("📉", "Stats", &FieldValue::list(&run.what_to_track)),
        ],
        vec![
            field_panel("🌱", "Seed ID", &FieldValue::scalar(&run.seed_id)),
            field_panel("🚀", "Model", &FieldValue::scalar(&run.model_type)),
        ],
    ];

    let checkpoints = checkpoint_row(&run.checkpoint);
    if !checkpoints.is_empty() {
        rows.push(checkpoints);
    }
    rows
}

/// The startup grid wrapped in an outer panel
#[must_use]
pub fn startup_panel(run: &RunDescriptor) -> Panel {
    let mut grid = Grid::new(2);
    for row in startup_rows(run) {
        let cells: Vec<Box<dyn Renderable>> = row
            .into_iter()
            .map(|p| Box::new(p) as Box<dyn Renderable>)
            .collect();
        grid.add_row(cells);
    }
    Panel::new(grid)
}
