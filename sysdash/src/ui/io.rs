//! Disk IO totals.

use ratatui::{layout::Rect, widgets::Paragraph};

use crate::dashboard::Dashboard;
use crate::ui::util::field_line;

pub fn draw_io(f: &mut ratatui::Frame<'_>, area: Rect, d: &Dashboard) {
    let fields = d.fields();
    let mut lines = vec![
        field_line("Read", fields.io_read.clone()),
        field_line("Write", fields.io_write.clone()),
    ];
    if let (Some(r), Some(w)) = (fields.io_read_count, fields.io_write_count) {
        lines.push(field_line("Ops", format!("{r} reads / {w} writes")));
    }
    f.render_widget(Paragraph::new(lines), area);
}
