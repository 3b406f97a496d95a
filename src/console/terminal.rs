//! Output sink with an explicit display width

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveTime;

use super::layout::Renderable;
use super::style::{Justify, Line, Style};

/// Default display width for panels and tables
pub const DEFAULT_WIDTH: usize = 100;

/// Writes renderables to an output stream at a fixed width
pub struct Console<W: Write> {
    out: W,
    width: usize,
    color: bool,
}

impl<W: Write> Console<W> {
    /// Create a console writing to `out`
    #[must_use]
    pub const fn new(out: W, width: usize, color: bool) -> Self {
        Self { out, width, color }
    }

    /// Display width in columns
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether ANSI styling is emitted
    #[must_use]
    pub const fn color(&self) -> bool {
        self.color
    }

    /// Render `item` at the console width and write it, placing each line
    /// according to `justify`.
    pub fn print(&mut self, item: &dyn Renderable, justify: Justify) -> Result<()> {
        for line in item.render(self.width) {
            let gap = self.width.saturating_sub(line.width());
            let indent = match justify {
                Justify::Left => 0,
                Justify::Center => gap / 2,
                Justify::Right => gap,
            };
            writeln!(
                self.out,
                "{}{}",
                " ".repeat(indent),
                line.paint(self.color)
            )
            .context("Failed to write to console")?;
        }
        self.out.flush().context("Failed to flush console")?;
        Ok(())
    }

    /// Write `[HH:MM:SS] message` stamped with `time`
    pub fn log_at(&mut self, time: NaiveTime, message: &str) -> Result<()> {
        let stamp = Line::styled(
            format!("[{}]", time.format("%H:%M:%S")),
            Style::new().dim(),
        )
        .paint(self.color);
        writeln!(self.out, "{stamp} {message}").context("Failed to write to console")?;
        self.out.flush().context("Failed to flush console")?;
        Ok(())
    }

    /// Write a log line stamped with the current local time
    pub fn log(&mut self, message: &str) -> Result<()> {
        self.log_at(chrono::Local::now().time(), message)
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
