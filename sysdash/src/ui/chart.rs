//! Live line chart: filled area under a braille line, y fixed to 0..100.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::history::{RollingSeries, SERIES_LEN};
use crate::ui::theme::{blend, BG, BORDER, TICK_FG};

/// Options shared by every chart instance.
#[derive(Debug, Clone, Copy)]
pub struct ChartOptions {
    pub y_bounds: [f64; 2],
    pub show_legend: bool,
    pub show_x_axis: bool,
    pub y_ticks: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            y_bounds: [0.0, 100.0],
            show_legend: false,
            show_x_axis: false,
            y_ticks: true,
        }
    }
}

/// Line color plus the area fill derived from it against the chart background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub line: Color,
    pub fill: Color,
}

impl SeriesStyle {
    pub fn new(line: Color) -> Self {
        Self {
            line,
            fill: blend(line, BG, 0.35),
        }
    }
}

pub struct LiveChart {
    label: String,
    options: ChartOptions,
    style: SeriesStyle,
    points: Vec<(f64, f64)>,
    dirty: bool,
}

impl LiveChart {
    pub fn new(label: impl Into<String>, line: Color, options: ChartOptions) -> Self {
        Self {
            label: label.into(),
            options,
            style: SeriesStyle::new(line),
            points: RollingSeries::new(SERIES_LEN).to_points(),
            dirty: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> SeriesStyle {
        self.style
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Replace the backing data with the series' current window.
    pub fn set_series(&mut self, series: &RollingSeries) {
        self.points = series.to_points();
    }

    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the pending redraw request and clears it.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn render(&self, f: &mut ratatui::Frame<'_>, area: Rect, title: &str) {
        let [y_lo, y_hi] = self.options.y_bounds;
        let x_hi = self.points.len().saturating_sub(1).max(1) as f64;

        let datasets = vec![
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Bar)
                .style(Style::default().fg(self.style.fill))
                .data(&self.points),
            Dataset::default()
                .name(self.label.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(self.style.line))
                .data(&self.points),
        ];

        let mut x_axis = Axis::default().bounds([0.0, x_hi]);
        if self.options.show_x_axis {
            x_axis = x_axis.labels(vec![Span::raw(""), Span::raw("now")]);
        }
        let mut y_axis = Axis::default()
            .bounds([y_lo, y_hi])
            .style(Style::default().fg(TICK_FG));
        if self.options.y_ticks {
            y_axis = y_axis.labels(vec![
                Span::raw(format!("{y_lo:.0}")),
                Span::raw(format!("{:.0}", (y_lo + y_hi) / 2.0)),
                Span::raw(format!("{y_hi:.0}")),
            ]);
        }

        let mut chart = Chart::new(datasets)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(BORDER))
                    .title(title.to_string()),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);
        if !self.options.show_legend {
            chart = chart.legend_position(None);
        }
        f.render_widget(chart, area);
    }
}
