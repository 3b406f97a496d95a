//! Block layout: text, panels and borderless grids

use super::style::{Justify, Line, Span, Style};

/// Anything that can be laid out into terminal lines
pub trait Renderable {
    /// Width the content would like when unconstrained
    fn natural_width(&self) -> usize;

    /// Lay out into lines no wider than `width`
    fn render(&self, width: usize) -> Vec<Line>;
}

/// A single line of text that wraps to the available width
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    line: Line,
    justify: Justify,
}

impl Text {
    /// Left-justified text
    #[must_use]
    pub fn new(line: impl Into<Line>) -> Self {
        Self {
            line: line.into(),
            justify: Justify::Left,
        }
    }

    /// Set justification
    #[must_use]
    pub const fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }
}

impl Renderable for Text {
    fn natural_width(&self) -> usize {
        self.line.width()
    }

    fn render(&self, width: usize) -> Vec<Line> {
        self.line
            .wrap(width)
            .into_iter()
            .map(|l| l.pad(width, self.justify, Style::default()))
            .collect()
    }
}

/// A rounded border around a body, expanded to the full available width
pub struct Panel {
    body: Box<dyn Renderable>,
    style: Style,
}

impl Panel {
    /// Wrap `body` in a border
    #[must_use]
    pub fn new(body: impl Renderable + 'static) -> Self {
        Self {
            body: Box::new(body),
            style: Style::default(),
        }
    }

    /// Style placed underneath everything in the panel, border included
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Renderable for Panel {
    fn natural_width(&self) -> usize {
        self.body.natural_width() + 4
    }

    fn render(&self, width: usize) -> Vec<Line> {
        let width = width.max(4);
        let inner = width - 4;

        let mut lines = vec![Line::raw(format!("╭{}╮", "─".repeat(width - 2)))];
        for body_line in self.body.render(inner) {
            let mut row = Line::raw("│ ");
            row.spans.extend(
                body_line
                    .truncate(inner)
                    .pad(inner, Justify::Left, Style::default())
                    .spans,
            );
            row.push(Span::raw(" │"));
            lines.push(row);
        }
        lines.push(Line::raw(format!("╰{}╯", "─".repeat(width - 2))));

        lines.into_iter().map(|l| l.restyle(self.style)).collect()
    }
}

/// Borderless columns without padding.
///
/// Columns start at their natural width and share any remaining space in
/// proportion to that width. Rows shorter than the column count leave the
/// trailing cells blank.
pub struct Grid {
    columns: usize,
    rows: Vec<Vec<Box<dyn Renderable>>>,
}

impl Grid {
    /// An empty grid with `columns` columns
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row of cells
    pub fn add_row(&mut self, cells: Vec<Box<dyn Renderable>>) {
        self.rows.push(cells);
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.columns)
            .map(|c| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(c))
                    .map(|cell| cell.natural_width())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

impl Renderable for Grid {
    fn natural_width(&self) -> usize {
        self.column_widths().iter().sum()
    }

    fn render(&self, width: usize) -> Vec<Line> {
        if self.columns == 0 {
            return Vec::new();
        }

        let widths = fit_widths(&self.column_widths(), width, true);
        let mut lines = Vec::new();

        for row in &self.rows {
            let cells: Vec<Vec<Line>> = widths
                .iter()
                .enumerate()
                .map(|(c, &w)| row.get(c).map_or_else(Vec::new, |cell| cell.render(w)))
                .collect();
            let height = cells.iter().map(Vec::len).max().unwrap_or(0);

            for h in 0..height {
                let mut line = Line::new();
                for (cell, &w) in cells.iter().zip(&widths) {
                    let part = cell
                        .get(h)
                        .map_or_else(Line::new, |l| l.truncate(w))
                        .pad(w, Justify::Left, Style::default());
                    line.spans.extend(part.spans);
                }
                lines.push(line);
            }
        }
        lines
    }
}

/// Fit column widths into `max_width`.
///
/// Too wide: the widest column loses one column at a time. Too narrow and
/// `expand` set: the slack is shared in proportion to current widths.
pub(crate) fn fit_widths(widths: &[usize], max_width: usize, expand: bool) -> Vec<usize> {
    let mut widths = widths.to_vec();
    let total: usize = widths.iter().sum();

    if total > max_width {
        let mut excess = total - max_width;
        while excess > 0 {
            let Some(widest) = (0..widths.len()).max_by_key(|&i| widths[i]) else {
                break;
            };
            if widths[widest] == 0 {
                break;
            }
            widths[widest] -= 1;
            excess -= 1;
        }
    } else if expand && total < max_width {
        let extra = ratio_distribute(max_width - total, &widths);
        for (w, e) in widths.iter_mut().zip(extra) {
            *w += e;
        }
    }
    widths
}

/// Split `total` across slots in proportion to `ratios`, rounding up as
/// it goes so the shares always sum to `total`.
pub(crate) fn ratio_distribute(total: usize, ratios: &[usize]) -> Vec<usize> {
    let mut total_ratio: usize = ratios.iter().sum();
    let mut remaining = total;
    let mut shares = Vec::with_capacity(ratios.len());

    for &ratio in ratios {
        let share = if total_ratio > 0 {
            (ratio * remaining).div_ceil(total_ratio)
        } else {
            remaining
        };
        shares.push(share);
        total_ratio -= ratio;
        remaining -= share;
    }
    shares
}
