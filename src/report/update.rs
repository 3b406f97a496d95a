//! Per-tick update table
//!
//! Each call produces a fresh one-row table; nothing is retained between
//! ticks. The caller decides when a header row is worth repeating.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use colored::Color;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::{format_stat, TimeValue, PLACEHOLDER};
use crate::console::{Column, Justify, Line, Span, Style, Table};

/// Width of the first column in each group
pub const FIRST_COLUMN_WIDTH: usize = 14;
/// Width of every other column
pub const COLUMN_WIDTH: usize = 12;

/// Values of time and stat variables at one logging instant
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Time variable values by name
    #[serde(default)]
    pub time: HashMap<String, TimeValue>,
    /// Stat variable values by name
    #[serde(default)]
    pub stats: HashMap<String, f64>,
}

impl Tick {
    /// An empty tick
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set a time variable
    #[must_use]
    pub fn with_time(mut self, name: &str, value: impl Into<TimeValue>) -> Self {
        self.time.insert(name.to_string(), value.into());
        self
    }

    /// Builder: set a stat variable
    #[must_use]
    pub fn with_stat(mut self, name: &str, value: f64) -> Self {
        self.stats.insert(name.to_string(), value);
        self
    }

    /// Build a tick from two JSON objects.
    ///
    /// Time values may be numbers or strings; stat values must be numbers.
    /// Anything else is rejected as invalid input.
    pub fn from_json(time: &str, stats: &str) -> Result<Self> {
        let time: serde_json::Map<String, Value> =
            serde_json::from_str(time).context("Failed to parse time values as a JSON object")?;
        let stats: serde_json::Map<String, Value> =
            serde_json::from_str(stats).context("Failed to parse stat values as a JSON object")?;

        let mut tick = Self::new();
        for (name, value) in time {
            let value = match value {
                Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                    (Some(i), _) => TimeValue::Int(i),
                    (None, Some(f)) => TimeValue::Float(f),
                    (None, None) => bail!("invalid input: time variable '{name}' is out of range"),
                },
                Value::String(s) => TimeValue::Text(s),
                other => {
                    bail!("invalid input: time variable '{name}' must be a number or string, got {other}")
                }
            };
            tick.time.insert(name, value);
        }
        for (name, value) in stats {
            let Some(v) = value.as_f64() else {
                bail!("invalid input: stat '{name}' must be numeric, got {value}");
            };
            tick.stats.insert(name, v);
        }
        Ok(tick)
    }
}

/// Cell texts for one tick: time columns first, then stats. Names missing
/// from the tick become the placeholder, so the row is always as long as
/// the requested name lists combined.
#[must_use]
pub fn tick_row<T, S>(time_names: &[T], stat_names: &[S], tick: &Tick) -> Vec<String>
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    let time = time_names.iter().map(|name| {
        tick.time
            .get(name.as_ref())
            .map_or_else(|| PLACEHOLDER.to_string(), ToString::to_string)
    });
    let stats = stat_names.iter().map(|name| {
        tick.stats
            .get(name.as_ref())
            .map_or_else(|| PLACEHOLDER.to_string(), |v| format_stat(*v))
    });
    time.chain(stats).collect()
}

/// One-row table for a tick.
///
/// Time columns are red, the first one marked with a watch and left
/// justified. Stat headers are blue, the first one marked with a chart.
#[must_use]
pub fn update_table<T, S>(
    time_names: &[T],
    stat_names: &[S],
    tick: &Tick,
    print_header: bool,
) -> Table
where
    T: AsRef<str>,
    S: AsRef<str>,
{
    let red = Style::new().fg(Color::Red);
    let blue = Style::new().fg(Color::Blue);

    let mut table = Table::new()
        .show_header(print_header)
        .border_style(Style::new().fg(Color::White));

    for (i, name) in time_names.iter().enumerate() {
        let column = if i == 0 {
            Column::new(
                Line::raw("⌚ ").with(Span::styled(name.as_ref(), red)),
                FIRST_COLUMN_WIDTH,
            )
            .justify(Justify::Left)
        } else {
            Column::new(Line::styled(name.as_ref(), red), COLUMN_WIDTH).justify(Justify::Center)
        };
        table.add_column(column.style(red));
    }
    for (i, name) in stat_names.iter().enumerate() {
        let column = if i == 0 {
            Column::new(
                Line::raw("📉 ").with(Span::styled(name.as_ref(), blue)),
                FIRST_COLUMN_WIDTH,
            )
        } else {
            Column::new(Line::styled(name.as_ref(), blue), COLUMN_WIDTH)
        };
        table.add_column(column.justify(Justify::Center));
    }

    table.add_row(
        tick_row(time_names, stat_names, tick)
            .into_iter()
            .map(Line::from)
            .collect(),
    );
    table
}
