//! Summary of artifacts written to disk

use std::path::PathBuf;

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::console::{Column, Justify, Line, Style, Table};

/// Paths just written by the logger; absent entries are not reported
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoragePaths {
    /// Stored figure
    #[serde(default)]
    pub fig: Option<PathBuf>,
    /// Stored extra object
    #[serde(default)]
    pub extra: Option<PathBuf>,
    /// Initial model checkpoint
    #[serde(default)]
    pub init_model: Option<PathBuf>,
    /// Most recent model checkpoint
    #[serde(default)]
    pub final_model: Option<PathBuf>,
    /// Latest every-k checkpoint
    #[serde(default)]
    pub every_k_model: Option<PathBuf>,
    /// Latest top-k checkpoint
    #[serde(default)]
    pub top_k_model: Option<PathBuf>,
}

/// `(label, path)` rows in display order. Initial and final model paths are
/// only listed when `print_first` is set.
#[must_use]
pub fn storage_rows(paths: &StoragePaths, print_first: bool) -> Vec<(&'static str, String)> {
    [
        ("📩 - Figure", paths.fig.as_ref()),
        ("📩 - Extra", paths.extra.as_ref()),
        ("📩 - Model", paths.init_model.as_ref().filter(|_| print_first)),
        ("📩 - Model", paths.final_model.as_ref().filter(|_| print_first)),
        ("📩 - Every-K", paths.every_k_model.as_ref()),
        ("📩 - Top-K", paths.top_k_model.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, path)| path.map(|p| (label, p.display().to_string())))
    .collect()
}

/// Headerless two-column table, or `None` when there is nothing to report
#[must_use]
pub fn storage_table(paths: &StoragePaths, print_first: bool) -> Option<Table> {
    let rows = storage_rows(paths, print_first);
    if rows.is_empty() {
        return None;
    }

    let red = Style::new().fg(Color::Red);
    let mut table = Table::new()
        .show_header(false)
        .border_style(Style::new().fg(Color::White));
    table.add_column(Column::new("---", 16).justify(Justify::Left).style(red));
    table.add_column(Column::new("---", 64).justify(Justify::Left).style(red));
    for (label, path) in rows {
        table.add_row(vec![Line::raw(label), Line::raw(path)]);
    }
    Some(table)
}
