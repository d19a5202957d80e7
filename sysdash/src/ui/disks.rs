//! Disk cards with per-mount gauge and title line.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::dashboard::DiskRow;
use crate::ui::theme::{BORDER, TICK_FG};
use crate::ui::util::{disk_icon, truncate_middle};

pub fn gauge_color(percent: f64) -> Color {
    if percent < 70.0 { Color::Green } else if percent < 90.0 { Color::Yellow } else { Color::Red }
}

pub fn draw_disks(f: &mut ratatui::Frame<'_>, area: Rect, rows: &[DiskRow]) {
    if rows.is_empty() {
        f.render_widget(
            Paragraph::new("no disks reported").style(Style::default().fg(TICK_FG)),
            area,
        );
        return;
    }
    if area.height < 3 { return; }

    let per_disk_h = 3u16;
    let max_cards = (area.height / per_disk_h).min(rows.len() as u16) as usize;

    let constraints: Vec<Constraint> = (0..max_cards).map(|_| Constraint::Length(per_disk_h)).collect();
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (d, slot) in rows.iter().zip(slots.iter()) {
        let mut title = format!(
            "{} {}   {}",
            disk_icon(&d.device),
            truncate_middle(&d.label, (slot.width.saturating_sub(6)) as usize / 2),
            d.usage,
        );
        if let Some(free) = &d.free {
            title.push_str(&format!("  ({free} free)"));
        }

        let card = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER))
            .title(title);
        let inner_card = card.inner(*slot);
        f.render_widget(card, *slot);
        if inner_card.height == 0 { continue; }

        let gauge_rect = Rect {
            x: inner_card.x,
            y: inner_card.y + inner_card.height / 2,
            width: inner_card.width,
            height: 1,
        };

        let g = Gauge::default()
            .ratio(d.fill_ratio())
            .label(format!("{}%", d.percent))
            .gauge_style(Style::default().fg(gauge_color(d.percent)));

        f.render_widget(g, gauge_rect);
    }
}
