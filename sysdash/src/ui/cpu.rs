//! CPU panel: percent, frequency and temperature above the CPU chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

use crate::dashboard::Dashboard;
use crate::ui::util::field_line;

pub fn draw_cpu(f: &mut ratatui::Frame<'_>, area: Rect, d: &Dashboard) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let fields = d.fields();
    let lines = vec![
        field_line("Usage", format!("{}%", fields.cpu_percent)),
        field_line("Freq", fields.cpu_freq.clone()),
        field_line("Temp", fields.cpu_temp.clone()),
    ];
    f.render_widget(Paragraph::new(lines), parts[0]);

    let title = format!(" now: {}% ", fields.cpu_percent);
    d.cpu_chart.render(f, parts[1], &title);
}
