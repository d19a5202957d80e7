//! Top header with endpoint, last update time and key hints.

use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::{TICK_FG, TITLE_FG};

pub fn header_text(endpoint: &str, last_update: Option<&DateTime<Local>>) -> String {
    let status = match last_update {
        Some(ts) => format!("updated {}", ts.format("%H:%M:%S")),
        None => "waiting for first update...".into(),
    };
    format!("{endpoint} | {status}")
}

pub fn draw_header(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    endpoint: &str,
    last_update: Option<&DateTime<Local>>,
) {
    let line = Line::from(vec![
        Span::styled(
            "sysdash ",
            Style::default().fg(TITLE_FG).add_modifier(Modifier::BOLD),
        ),
        Span::raw(header_text(endpoint, last_update)),
        Span::styled(
            "  (1-4 open, Tab focus, m max, n min, x close, q quit)",
            Style::default().fg(TICK_FG),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
