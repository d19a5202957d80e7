//! Memory panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

use crate::dashboard::Dashboard;
use crate::ui::util::field_line;

pub fn draw_mem(f: &mut ratatui::Frame<'_>, area: Rect, d: &Dashboard) {
    let fields = d.fields();
    let mut lines = vec![
        field_line("Usage", format!("{}%", fields.mem_percent)),
        field_line("Used", format!("{} / {}", fields.mem_used, fields.mem_total)),
    ];
    if let Some(avail) = &fields.mem_available {
        lines.push(field_line("Available", avail.clone()));
    }
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(lines.len() as u16), Constraint::Min(0)])
        .split(area);
    f.render_widget(Paragraph::new(lines), parts[0]);

    let title = format!(" now: {}% ", fields.mem_percent);
    d.mem_chart.render(f, parts[1], &title);
}
