//! Floating window manager: z-order, focus and display modes for the dashboard panels.
//!
//! The manager owns an ordered registry of windows plus a single counter for the
//! highest z-index handed out so far. Every raise takes the next counter value, so
//! z-indexes are never reused and the most recently raised window is always on top.
//! At most one window is active at a time; the active id lives on the manager, not
//! on the windows.
//!
//! Display-mode transitions are plain methods on [`DisplayMode`] so they can be
//! exercised without any terminal.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Counter starts here; every raise lands strictly above it.
pub const Z_FLOOR: u32 = 2000;

/// Width of one minimized-window tab in the dock row.
pub const DOCK_TAB_WIDTH: u16 = 22;

/// Width of the `[_][□][x]` control strip on the title row.
pub const CONTROLS_WIDTH: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

impl DisplayMode {
    /// Maximized -> Normal; Normal or Minimized -> Maximized.
    pub fn toggled_maximize(self) -> Self {
        match self {
            DisplayMode::Maximized => DisplayMode::Normal,
            DisplayMode::Normal | DisplayMode::Minimized => DisplayMode::Maximized,
        }
    }

    /// Minimized -> Normal; Normal or Maximized -> Minimized.
    pub fn toggled_minimize(self) -> Self {
        match self {
            DisplayMode::Minimized => DisplayMode::Normal,
            DisplayMode::Normal | DisplayMode::Maximized => DisplayMode::Minimized,
        }
    }
}

/// Glyph on the maximize control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaximizeIcon {
    #[default]
    Square,
    Restore,
}

impl MaximizeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            MaximizeIcon::Square => "□",
            MaximizeIcon::Restore => "❐",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleControl {
    Minimize,
    Maximize,
    Close,
}

/// How a command names its window: by id, or by any screen cell inside the
/// window (content or title-bar control), which resolves to the topmost
/// visible window covering that cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowTarget {
    Id(String),
    At { column: u16, row: u16 },
}

impl From<&str> for WindowTarget {
    fn from(id: &str) -> Self {
        WindowTarget::Id(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCommand {
    Focus(WindowTarget),
    ToggleMaximize(WindowTarget),
    ToggleMinimize(WindowTarget),
    Close(WindowTarget),
    Show(String),
    CycleFocus,
}

#[derive(Debug, Clone)]
pub struct Window {
    id: String,
    title: String,
    z: u32,
    mode: DisplayMode,
    hidden: bool,
    home: Rect,
}

impl Window {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn z(&self) -> u32 {
        self.z
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn icon(&self) -> MaximizeIcon {
        if self.mode == DisplayMode::Maximized {
            MaximizeIcon::Restore
        } else {
            MaximizeIcon::Square
        }
    }
}

#[derive(Debug, Clone)]
pub struct WindowManager {
    windows: Vec<Window>,
    highest_z: u32,
    active: Option<String>,
    desktop: Rect,
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            highest_z: Z_FLOOR,
            active: None,
            desktop: Rect::default(),
        }
    }

    /// Register a window. Initial z sits below the floor in registration order,
    /// so untouched windows stack in the order they were added.
    pub fn add(&mut self, id: impl Into<String>, title: impl Into<String>) {
        let z = self.windows.len() as u32;
        self.windows.push(Window {
            id: id.into(),
            title: title.into(),
            z,
            mode: DisplayMode::Normal,
            hidden: false,
            home: Rect::default(),
        });
        self.relayout();
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn highest_z(&self) -> u32 {
        self.highest_z
    }

    pub fn desktop(&self) -> Rect {
        self.desktop
    }

    /// Set the area windows live in and recompute their home slots.
    pub fn set_desktop(&mut self, area: Rect) {
        if self.desktop != area {
            self.desktop = area;
            self.relayout();
        }
    }

    // Two-column grid above the dock row; an odd last window spans both columns.
    fn relayout(&mut self) {
        let n = self.windows.len();
        if n == 0 {
            return;
        }
        let work = self.work_area();
        let rows = n.div_ceil(2);
        let row_rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
            .split(work);
        for (i, w) in self.windows.iter_mut().enumerate() {
            let row = row_rects[i / 2];
            let alone = i / 2 == rows - 1 && n % 2 == 1;
            w.home = if alone {
                row
            } else {
                let cols = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(row);
                cols[i % 2]
            };
        }
    }

    fn work_area(&self) -> Rect {
        Rect {
            height: self.desktop.height.saturating_sub(1),
            ..self.desktop
        }
    }

    fn dock_slot(&self, rank: usize) -> Rect {
        let x = self
            .desktop
            .x
            .saturating_add((rank as u16).saturating_mul(DOCK_TAB_WIDTH));
        let slot = Rect {
            x,
            y: self.desktop.bottom().saturating_sub(1),
            width: DOCK_TAB_WIDTH,
            height: 1.min(self.desktop.height),
        };
        slot.intersection(self.desktop)
    }

    /// On-screen frame of the window at `idx`; `None` while it is closed.
    fn frame_at(&self, idx: usize) -> Option<Rect> {
        let w = self.windows.get(idx)?;
        if w.hidden {
            return None;
        }
        Some(match w.mode {
            DisplayMode::Normal => w.home,
            DisplayMode::Maximized => self.work_area(),
            DisplayMode::Minimized => {
                let rank = self.windows[..idx]
                    .iter()
                    .filter(|o| !o.hidden && o.mode == DisplayMode::Minimized)
                    .count();
                self.dock_slot(rank)
            }
        })
    }

    pub fn frame(&self, id: &str) -> Option<Rect> {
        let idx = self.index_of(id)?;
        self.frame_at(idx)
    }

    /// Visible windows, lowest z first.
    pub fn draw_order(&self) -> Vec<&Window> {
        let mut order: Vec<&Window> = self.windows.iter().filter(|w| !w.hidden).collect();
        order.sort_by_key(|w| w.z);
        order
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn index_at(&self, column: u16, row: u16) -> Option<usize> {
        (0..self.windows.len())
            .filter_map(|i| self.frame_at(i).map(|r| (i, r)))
            .filter(|(_, r)| contains(*r, column, row))
            .max_by_key(|(i, _)| self.windows[*i].z)
            .map(|(i, _)| i)
    }

    fn resolve(&self, target: &WindowTarget) -> Option<usize> {
        match target {
            WindowTarget::Id(id) => self.index_of(id),
            WindowTarget::At { column, row } => self.index_at(*column, *row),
        }
    }

    pub fn window_at(&self, column: u16, row: u16) -> Option<&Window> {
        self.index_at(column, row).map(|i| &self.windows[i])
    }

    /// Which title-bar control, if any, the topmost window shows at this cell.
    pub fn control_at(&self, column: u16, row: u16) -> Option<TitleControl> {
        let idx = self.index_at(column, row)?;
        let strip = controls_rect(self.frame_at(idx)?);
        if !contains(strip, column, row) {
            return None;
        }
        match (column - strip.x) / 3 {
            0 => Some(TitleControl::Minimize),
            1 => Some(TitleControl::Maximize),
            2 => Some(TitleControl::Close),
            _ => None,
        }
    }

    fn raise(&mut self, idx: usize) {
        self.highest_z += 1;
        let w = &mut self.windows[idx];
        w.z = self.highest_z;
        self.active = Some(w.id.clone());
    }

    /// Give the window a fresh highest z and make it the only active window.
    /// Unknown targets are ignored.
    pub fn bring_to_front(&mut self, target: &WindowTarget) {
        if let Some(idx) = self.resolve(target) {
            self.raise(idx);
        }
    }

    /// Maximize, or restore if already maximized. Raises the window either way.
    pub fn toggle_maximize(&mut self, target: &WindowTarget) {
        let Some(idx) = self.resolve(target) else {
            return;
        };
        let w = &mut self.windows[idx];
        w.mode = w.mode.toggled_maximize();
        self.raise(idx);
    }

    /// Minimize, or restore if already minimized. Only restoring raises the
    /// window; minimizing leaves z and focus where they are.
    pub fn toggle_minimize(&mut self, target: &WindowTarget) {
        let Some(idx) = self.resolve(target) else {
            return;
        };
        let w = &mut self.windows[idx];
        w.mode = w.mode.toggled_minimize();
        if w.mode == DisplayMode::Normal {
            self.raise(idx);
        }
    }

    pub fn close(&mut self, target: &WindowTarget) {
        let Some(idx) = self.resolve(target) else {
            return;
        };
        let w = &mut self.windows[idx];
        w.hidden = true;
        if self.active.as_deref() == Some(w.id.as_str()) {
            self.active = None;
        }
    }

    /// Reopen a closed window (if needed) and raise it.
    pub fn show(&mut self, id: &str) {
        if let Some(idx) = self.index_of(id) {
            self.windows[idx].hidden = false;
            self.raise(idx);
        }
    }

    /// Raise the next visible window after the active one, in registry order.
    pub fn cycle_focus(&mut self) {
        let n = self.windows.len();
        if n == 0 {
            return;
        }
        let start = self
            .active
            .as_deref()
            .and_then(|id| self.index_of(id))
            .map(|i| i + 1)
            .unwrap_or(0);
        if let Some(idx) = (0..n)
            .map(|k| (start + k) % n)
            .find(|&i| !self.windows[i].hidden)
        {
            self.raise(idx);
        }
    }

    pub fn dispatch(&mut self, cmd: &WindowCommand) {
        match cmd {
            WindowCommand::Focus(t) => self.bring_to_front(t),
            WindowCommand::ToggleMaximize(t) => self.toggle_maximize(t),
            WindowCommand::ToggleMinimize(t) => self.toggle_minimize(t),
            WindowCommand::Close(t) => self.close(t),
            WindowCommand::Show(id) => self.show(id),
            WindowCommand::CycleFocus => self.cycle_focus(),
        }
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Control strip on the title row, right-aligned inside the frame's corner.
pub fn controls_rect(frame: Rect) -> Rect {
    let width = CONTROLS_WIDTH.min(frame.width);
    Rect {
        x: frame.x + frame.width.saturating_sub(CONTROLS_WIDTH + 1),
        y: frame.y,
        width,
        height: 1.min(frame.height),
    }
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
}
