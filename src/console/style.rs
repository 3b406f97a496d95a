//! Styled text primitives
//!
//! A [`Span`] is a run of text sharing one [`Style`]; a [`Line`] is an
//! ordered sequence of spans. Lines know their terminal display width and
//! can wrap, truncate, pad and paint themselves. All layout above this
//! module works in terms of lines.

use std::borrow::Cow;

use colored::Color;
use unicode_width::UnicodeWidthChar;

/// Horizontal placement of content inside a wider area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    /// Flush left
    #[default]
    Left,
    /// Centred, extra column goes to the right
    Center,
    /// Flush right
    Right,
}

/// Text attributes for a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground colour
    pub fg: Option<Color>,
    /// Background colour
    pub bg: Option<Color>,
    /// Bold weight
    pub bold: bool,
    /// Dimmed intensity
    pub dim: bool,
}

impl Style {
    /// An empty style (terminal defaults)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground colour
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background colour
    #[must_use]
    pub const fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Enable bold
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Enable dim
    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    /// Overlay `over` on top of `self`. Colours set in `over` win,
    /// attributes are combined.
    #[must_use]
    pub fn patch(self, over: Self) -> Self {
        Self {
            fg: over.fg.or(self.fg),
            bg: over.bg.or(self.bg),
            bold: self.bold || over.bold,
            dim: self.dim || over.dim,
        }
    }

    /// SGR parameters for this style, empty for the terminal defaults
    fn sgr(self) -> Vec<Cow<'static, str>> {
        let mut codes = Vec::new();
        if self.bold {
            codes.push(Cow::Borrowed("1"));
        }
        if self.dim {
            codes.push(Cow::Borrowed("2"));
        }
        if let Some(fg) = self.fg {
            codes.push(fg.to_fg_str());
        }
        if let Some(bg) = self.bg {
            codes.push(bg.to_bg_str());
        }
        codes
    }

    /// Wrap `text` in SGR escape codes, ignoring `colored`'s global switch
    fn apply(self, text: &str) -> String {
        let codes = self.sgr();
        if codes.is_empty() {
            return text.to_string();
        }
        format!("\x1b[{}m{text}\x1b[0m", codes.join(";"))
    }
}

/// A run of text with a single style and an optional hyperlink target
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    /// The text content
    pub text: String,
    /// Style applied to the whole span
    pub style: Style,
    /// Hyperlink target (emitted as OSC 8 when painting with colour)
    pub link: Option<String>,
}

impl Span {
    /// Unstyled span
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Span with the given style
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            link: None,
        }
    }

    /// Attach a hyperlink target
    #[must_use]
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}

/// Display width of a single character in terminal columns.
///
/// Control characters count as zero.
#[must_use]
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Display width of a string in terminal columns
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// One character together with the span attributes it came from
#[derive(Clone, Copy)]
struct Glyph<'a> {
    ch: char,
    style: Style,
    link: Option<&'a str>,
}

/// An ordered sequence of styled spans rendered on one terminal row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    /// Spans in display order
    pub spans: Vec<Span>,
}

impl Line {
    /// An empty line
    #[must_use]
    pub const fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// A line holding one unstyled span
    #[must_use]
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::raw(text)],
        }
    }

    /// A line holding one styled span
    #[must_use]
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(text, style)],
        }
    }

    /// Append a span
    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Builder form of [`Line::push`]
    #[must_use]
    pub fn with(mut self, span: Span) -> Self {
        self.push(span);
        self
    }

    /// Display width in terminal columns
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| text_width(&s.text)).sum()
    }

    /// True when the line has no visible text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }

    /// Text content without styling
    #[must_use]
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Put `base` underneath every span's own style
    #[must_use]
    pub fn restyle(&self, base: Style) -> Self {
        Self {
            spans: self
                .spans
                .iter()
                .map(|s| Span {
                    text: s.text.clone(),
                    style: base.patch(s.style),
                    link: s.link.clone(),
                })
                .collect(),
        }
    }

    fn glyphs(&self) -> Vec<Glyph<'_>> {
        self.spans
            .iter()
            .flat_map(|span| {
                span.text.chars().map(move |ch| Glyph {
                    ch,
                    style: span.style,
                    link: span.link.as_deref(),
                })
            })
            .collect()
    }

    fn from_glyphs(glyphs: &[Glyph<'_>]) -> Self {
        let mut line = Self::new();
        for glyph in glyphs {
            match line.spans.last_mut() {
                Some(last) if last.style == glyph.style && last.link.as_deref() == glyph.link => {
                    last.text.push(glyph.ch);
                }
                _ => line.push(Span {
                    text: glyph.ch.to_string(),
                    style: glyph.style,
                    link: glyph.link.map(str::to_string),
                }),
            }
        }
        line
    }

    /// Greedily wrap into lines no wider than `width`.
    ///
    /// Breaks after the last space when one is available, otherwise
    /// mid-word. Always returns at least one line.
    #[must_use]
    pub fn wrap(&self, width: usize) -> Vec<Self> {
        if width == 0 || self.width() <= width {
            return vec![self.clone()];
        }

        let glyphs = self.glyphs();
        let mut lines = Vec::new();
        let mut start = 0;
        let mut used = 0;
        let mut last_space: Option<usize> = None;
        let mut i = 0;

        while i < glyphs.len() {
            let w = char_width(glyphs[i].ch);
            if used + w > width && i > start {
                let break_at = match last_space {
                    Some(space) if space > start => space + 1,
                    _ => i,
                };
                let mut end = break_at;
                while end > start && glyphs[end - 1].ch == ' ' {
                    end -= 1;
                }
                lines.push(Self::from_glyphs(&glyphs[start..end]));

                start = break_at;
                while start < glyphs.len() && glyphs[start].ch == ' ' {
                    start += 1;
                }
                i = start;
                used = 0;
                last_space = None;
                continue;
            }
            if glyphs[i].ch == ' ' {
                last_space = Some(i);
            }
            used += w;
            i += 1;
        }

        if start < glyphs.len() || lines.is_empty() {
            lines.push(Self::from_glyphs(&glyphs[start..]));
        }
        lines
    }

    /// Cut the line to at most `width` columns, ending in `…` when cut
    #[must_use]
    pub fn truncate(&self, width: usize) -> Self {
        if self.width() <= width {
            return self.clone();
        }
        if width == 0 {
            return Self::new();
        }

        let glyphs = self.glyphs();
        let mut used = 0;
        let mut end = 0;
        for glyph in &glyphs {
            let w = char_width(glyph.ch);
            if used + w > width - 1 {
                break;
            }
            used += w;
            end += 1;
        }

        let ellipsis_style = glyphs.get(end).map_or_else(Style::default, |g| g.style);
        let mut line = Self::from_glyphs(&glyphs[..end]);
        line.push(Span::styled("…", ellipsis_style));
        line
    }

    /// Pad with spaces to exactly `width` columns. Lines already at
    /// least that wide are returned unchanged.
    #[must_use]
    pub fn pad(&self, width: usize, justify: Justify, fill: Style) -> Self {
        let current = self.width();
        if current >= width {
            return self.clone();
        }

        let gap = width - current;
        let (left, right) = match justify {
            Justify::Left => (0, gap),
            Justify::Right => (gap, 0),
            Justify::Center => (gap / 2, gap - gap / 2),
        };

        let mut spans = Vec::with_capacity(self.spans.len() + 2);
        if left > 0 {
            spans.push(Span::styled(" ".repeat(left), fill));
        }
        spans.extend(self.spans.iter().cloned());
        if right > 0 {
            spans.push(Span::styled(" ".repeat(right), fill));
        }
        Self { spans }
    }

    /// Render to a terminal string. Without colour this is [`Line::plain`].
    #[must_use]
    pub fn paint(&self, color: bool) -> String {
        if !color {
            return self.plain();
        }
        self.spans
            .iter()
            .map(|span| {
                let body = span.style.apply(&span.text);
                match &span.link {
                    Some(url) => format!("\x1b]8;;{url}\x1b\\{body}\x1b]8;;\x1b\\"),
                    None => body,
                }
            })
            .collect()
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Self::raw(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Self::raw(text)
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}
