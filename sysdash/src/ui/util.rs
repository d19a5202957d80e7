//! Small UI helpers: truncation, icons, label/value lines.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::ui::theme::{TEXT_FG, TICK_FG};

pub fn truncate_middle(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max { return s.to_string(); }
    if max <= 3 { return "...".into(); }
    let keep = max - 3;
    let left = keep / 2;
    let right = keep - left;
    let head: String = s.chars().take(left).collect();
    let tail: String = s.chars().skip(len - right).collect();
    format!("{head}...{tail}")
}

pub fn disk_icon(device: &str) -> &'static str {
    let n = device.to_ascii_lowercase();
    if n.contains(':') { "🗄️" }
    else if n.contains("nvme") { "⚡" }
    else if n.contains("/sd") || n.starts_with("sd") { "💽" }
    else if n.contains("overlay") { "📦" }
    else { "🖴" }
}

/// "label  value" with a dim label and bold value.
pub fn field_line<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<10}"), Style::default().fg(TICK_FG)),
        Span::styled(
            value.into(),
            Style::default().fg(TEXT_FG).add_modifier(Modifier::BOLD),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_both_ends() {
        assert_eq!(truncate_middle("/dev/nvme0n1p2", 9), "/de...1p2");
        assert_eq!(truncate_middle("short", 9), "short");
        assert_eq!(truncate_middle("anything", 2), "...");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_middle("ääääääää", 7), "ää...ää");
    }
}
