//! Fixed-width tables in the "simple" box style
//!
//! ```text
//!
//!   header     header
//!  ─────────────────────
//!   cell       cell
//!
//! ```
//!
//! A blank edge line above and below, an optional header row followed by
//! a rule, then data rows. Cells wrap inside their column.

use super::layout::{fit_widths, Renderable};
use super::style::{Justify, Line, Span, Style};

/// One table column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    header: Line,
    width: usize,
    justify: Justify,
    style: Style,
}

impl Column {
    /// A left-justified column of fixed `width`
    #[must_use]
    pub fn new(header: impl Into<Line>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            justify: Justify::Left,
            style: Style::default(),
        }
    }

    /// Set justification for header and cells
    #[must_use]
    pub const fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Style placed under every data cell
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Configured content width
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Header line
    #[must_use]
    pub const fn header(&self) -> &Line {
        &self.header
    }
}

/// A table of fixed-width columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Line>>,
    show_header: bool,
    border_style: Style,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// An empty table that shows its header
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            show_header: true,
            border_style: Style {
                fg: None,
                bg: None,
                bold: false,
                dim: false,
            },
        }
    }

    /// Whether to draw the header row and its rule
    #[must_use]
    pub const fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    /// Style of the header rule
    #[must_use]
    pub const fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Append a column
    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Append a data row. Missing trailing cells render blank and cells
    /// beyond the column count are ignored.
    pub fn add_row(&mut self, cells: Vec<Line>) {
        self.rows.push(cells);
    }

    /// Columns in display order
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Data rows in insertion order
    #[must_use]
    pub fn rows(&self) -> &[Vec<Line>] {
        &self.rows
    }

    /// Edge spaces, cell padding and separators around the content
    const fn overhead(&self) -> usize {
        let n = self.columns.len();
        2 + 2 * n + n.saturating_sub(1)
    }

    fn render_row(&self, cells: &[Line], widths: &[usize], header: bool) -> Vec<Line> {
        let wrapped: Vec<Vec<Line>> = self
            .columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (column, &w))| {
                let cell = cells.get(i).cloned().unwrap_or_default();
                let cell = if header { cell } else { cell.restyle(column.style) };
                cell.wrap(w)
            })
            .collect();
        let height = wrapped.iter().map(Vec::len).max().unwrap_or(0);

        (0..height)
            .map(|h| {
                let mut line = Line::raw(" ");
                for (i, ((column, &w), parts)) in
                    self.columns.iter().zip(widths).zip(&wrapped).enumerate()
                {
                    if i > 0 {
                        line.push(Span::raw(" "));
                    }
                    line.push(Span::raw(" "));
                    let part = parts
                        .get(h)
                        .map_or_else(Line::new, |l| l.truncate(w))
                        .pad(w, column.justify, Style::default());
                    line.spans.extend(part.spans);
                    line.push(Span::raw(" "));
                }
                line.push(Span::raw(" "));
                line
            })
            .collect()
    }
}

impl Renderable for Table {
    fn natural_width(&self) -> usize {
        if self.columns.is_empty() {
            return 0;
        }
        self.overhead() + self.columns.iter().map(|c| c.width).sum::<usize>()
    }

    fn render(&self, width: usize) -> Vec<Line> {
        if self.columns.is_empty() {
            return Vec::new();
        }

        let configured: Vec<usize> = self.columns.iter().map(|c| c.width).collect();
        // every column keeps one cell so cut-off values still show
        let widths: Vec<usize> = fit_widths(
            &configured,
            width.saturating_sub(self.overhead()),
            false,
        )
        .into_iter()
        .map(|w| w.max(1))
        .collect();
        let table_width = self.overhead() + widths.iter().sum::<usize>();
        let edge = Line::raw(" ".repeat(table_width));

        let mut lines = vec![edge.clone()];
        if self.show_header {
            let headers: Vec<Line> = self.columns.iter().map(|c| c.header.clone()).collect();
            lines.extend(self.render_row(&headers, &widths, true));
            lines.push(
                Line::raw(" ")
                    .with(Span::styled(
                        "─".repeat(table_width.saturating_sub(2)),
                        self.border_style,
                    ))
                    .with(Span::raw(" ")),
            );
        }
        for row in &self.rows {
            lines.extend(self.render_row(row, &widths, false));
        }
        lines.push(edge);
        lines
    }
}
