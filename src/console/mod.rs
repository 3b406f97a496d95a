//! Terminal rendering
//!
//! A small layout layer for styled console reports: spans and lines,
//! wrapped text, bordered panels, borderless grids and fixed-width
//! tables, written through a [`Console`] of explicit width.

pub mod layout;
pub mod style;
pub mod table;
pub mod terminal;

pub use layout::{Grid, Panel, Renderable, Text};
pub use style::{text_width, Justify, Line, Span, Style};
pub use table::{Column, Table};
pub use terminal::{Console, DEFAULT_WIDTH};
