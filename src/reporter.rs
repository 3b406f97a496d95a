//! Console reporter for experiment loggers
//!
//! The five entry points a logger calls: welcome banner, startup summary,
//! tick update, storage summary and reload notice.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use chrono::{NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::config::ReporterConfig;
use crate::console::{Console, Justify};
use crate::report::{
    reload_message, startup_panel, storage_table, update_table, welcome_panel, RunDescriptor,
    StoragePaths, Tick,
};

/// Writes experiment reports to a console
pub struct Reporter<W: Write = Stdout> {
    console: Console<W>,
}

impl Reporter<Stdout> {
    /// Reporter on standard output
    #[must_use]
    pub fn stdout(config: &ReporterConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> Reporter<W> {
    /// Reporter on an arbitrary writer
    #[must_use]
    pub fn new(out: W, config: &ReporterConfig) -> Self {
        Self {
            console: Console::new(out, config.width, config.color.enabled()),
        }
    }

    /// Print the welcome banner stamped with the current local time
    pub fn print_welcome(&mut self) -> Result<()> {
        self.print_welcome_at(chrono::Local::now().naive_local())
    }

    /// Print the welcome banner stamped with `now`
    pub fn print_welcome_at(&mut self, now: NaiveDateTime) -> Result<()> {
        debug!(width = self.console.width(), "printing welcome banner");
        self.console.print(&welcome_panel(now), Justify::Left)
    }

    /// Print the startup summary for `run`
    pub fn print_startup(&mut self, run: &RunDescriptor) -> Result<()> {
        debug!(experiment_dir = %run.experiment_dir, "printing startup summary");
        self.console.print(&startup_panel(run), Justify::Left)
    }

    /// Print one tick as a centred table row
    pub fn print_update<T, S>(
        &mut self,
        time_names: &[T],
        stat_names: &[S],
        tick: &Tick,
        print_header: bool,
    ) -> Result<()>
    where
        T: AsRef<str>,
        S: AsRef<str>,
    {
        debug!(
            columns = time_names.len() + stat_names.len(),
            print_header, "printing tick update"
        );
        let table = update_table(time_names, stat_names, tick, print_header);
        self.console.print(&table, Justify::Center)
    }

    /// Print where artifacts were stored. Writes nothing when no path
    /// qualifies.
    pub fn print_storage(&mut self, paths: &StoragePaths, print_first: bool) -> Result<()> {
        let Some(table) = storage_table(paths, print_first) else {
            debug!("no stored artifacts to report");
            return Ok(());
        };
        debug!(rows = table.rows().len(), "printing storage summary");
        self.console.print(&table, Justify::Left)
    }

    /// Log that the log in `experiment_dir` was reloaded
    pub fn print_reload(&mut self, experiment_dir: &str) -> Result<()> {
        self.console.log(&reload_message(experiment_dir))
    }

    /// Log the reload notice stamped with `time`
    pub fn print_reload_at(&mut self, time: NaiveTime, experiment_dir: &str) -> Result<()> {
        self.console.log_at(time, &reload_message(experiment_dir))
    }

    /// The console reports are written to
    #[must_use]
    pub const fn console(&self) -> &Console<W> {
        &self.console
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.console.into_inner()
    }
}
