//! Welcome banner shown when a logger starts

use chrono::NaiveDateTime;
use colored::Color;

use crate::console::{Grid, Justify, Line, Panel, Renderable, Span, Style, Text};

/// Version printed in the banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `DD/MM/YY HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M:%S";

const AUTHOR_URL: &str = "https://twitter.com/RobertTLange";
const DOCS_URL: &str =
    "https://github.com/RobertTLange/mle-logging/blob/main/examples/getting_started.ipynb";
const REPO_URL: &str = "https://github.com/RobertTLange/mle-logging/";

const LOGO: [&str; 5] = [
    r#" __    __  __      ______  __      ______  ______"#,
    r#"/\ "-./  \/\ \    /\  ___\/\ \    /\  __ \/\  ___\"#,
    r#"\ \ \-./\ \ \ \___\ \  __\  \ \___\ \ \/\ \ \ \__ \"#,
    r#" \ \_\ \ \_\ \_____\ \_____\ \_____\ \_____\ \_____\"#,
    r#"  \/_/  \/_/\/_____/\/_____/\/_____/\/_____/\/_____/"#,
];

fn link_line(text: &str, url: &str, icon: &str) -> Line {
    Line::raw("  ")
        .with(Span::raw(text).link(url))
        .with(Span::raw(format!(" {icon}")))
}

/// Logo on the left; clock, version and links right-justified beside it,
/// white on blue.
#[must_use]
pub fn welcome_panel(now: NaiveDateTime) -> Panel {
    let info = [
        Line::raw(now.format(TIMESTAMP_FORMAT).to_string()),
        Line::raw(format!("Logger v{VERSION} 🔏")),
        link_line("@RobertTLange", AUTHOR_URL, "🐦"),
        link_line("MLE-Log Docs", DOCS_URL, "📓"),
        link_line("MLE-Log Repo", REPO_URL, "📝"),
    ];

    let mut grid = Grid::new(2);
    for (logo, info) in LOGO.into_iter().zip(info) {
        let cells = vec![
            Box::new(Text::new(logo)) as Box<dyn Renderable>,
            Box::new(Text::new(info).justify(Justify::Right)),
        ];
        grid.add_row(cells);
    }

    Panel::new(grid).style(Style::new().fg(Color::White).on(Color::Blue))
}
