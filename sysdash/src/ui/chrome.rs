//! Window chrome: frame, title and the `[_][□][x]` controls, plus dock tabs for minimized windows.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::ui::theme::{BORDER, BORDER_ACTIVE, DOCK_FG, TITLE_FG};
use crate::ui::util::truncate_middle;
use crate::window::{controls_rect, DisplayMode, Window};

pub fn controls_line(w: &Window) -> Line<'static> {
    Line::from(format!("[_][{}][x]", w.icon().glyph()))
}

/// Clear the frame, draw border, title and controls. Returns the content area,
/// which is empty for minimized windows.
pub fn draw_window_frame(
    f: &mut ratatui::Frame<'_>,
    frame: Rect,
    w: &Window,
    active: bool,
) -> Rect {
    f.render_widget(Clear, frame);
    let border = if active { BORDER_ACTIVE } else { BORDER };

    if w.mode() == DisplayMode::Minimized {
        let width = frame.width.saturating_sub(controls_rect(frame).width + 2) as usize;
        let tab = Line::from(Span::styled(
            format!(" ▸ {}", truncate_middle(w.title(), width.saturating_sub(3))),
            Style::default().fg(if active { BORDER_ACTIVE } else { DOCK_FG }),
        ));
        f.render_widget(Paragraph::new(tab), frame);
        f.render_widget(Paragraph::new(controls_line(w)), controls_rect(frame));
        return Rect::default();
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if active { BorderType::Thick } else { BorderType::Rounded })
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", w.title()),
            Style::default().fg(TITLE_FG).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(frame);
    f.render_widget(block, frame);
    f.render_widget(
        Paragraph::new(controls_line(w)).style(Style::default().fg(border)),
        controls_rect(frame),
    );
    inner
}
