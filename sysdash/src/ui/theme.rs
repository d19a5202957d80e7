//! Shared UI theme constants.

use ratatui::style::Color;

// Slate background the charts and tooltips sit on
pub const BG: Color = Color::Rgb(15, 23, 42);
pub const TITLE_FG: Color = Color::Rgb(248, 250, 252);
pub const TEXT_FG: Color = Color::Rgb(203, 213, 225);
pub const TICK_FG: Color = Color::Rgb(100, 116, 139);

pub const CPU_LINE: Color = Color::Rgb(56, 189, 248);
pub const MEM_LINE: Color = Color::Rgb(168, 85, 247);

// Window chrome
pub const BORDER: Color = Color::Rgb(71, 85, 105);
pub const BORDER_ACTIVE: Color = Color::Rgb(56, 189, 248);
pub const DOCK_FG: Color = Color::Rgb(148, 163, 184);

/// Linear blend of `fg` over `bg`; non-RGB colors are returned unchanged.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| -> u8 {
                (f as f32 * alpha + b as f32 * (1.0 - alpha)).round().clamp(0.0, 255.0) as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ => fg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_halfway() {
        assert_eq!(
            blend(Color::Rgb(200, 100, 0), Color::Rgb(0, 0, 0), 0.5),
            Color::Rgb(100, 50, 0)
        );
        assert_eq!(blend(Color::Red, BG, 0.5), Color::Red);
    }
}
