//! Maps terminal input to commands. No state lives here; the app applies what comes back.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::window::{TitleControl, WindowCommand, WindowManager, WindowTarget};

pub const CPU_WINDOW: &str = "cpu";
pub const MEMORY_WINDOW: &str = "memory";
pub const IO_WINDOW: &str = "io";
pub const DISK_WINDOW: &str = "disk";

/// Window ids in registry order, bound to keys 1..=4.
pub const WINDOW_IDS: [&str; 4] = [CPU_WINDOW, MEMORY_WINDOW, IO_WINDOW, DISK_WINDOW];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Window(WindowCommand),
}

pub fn command_for_key(k: KeyEvent, active: Option<&str>) -> Option<Command> {
    if k.kind == KeyEventKind::Release {
        return None;
    }
    let on_active = |make: fn(WindowTarget) -> WindowCommand| {
        active.map(|id| Command::Window(make(WindowTarget::Id(id.to_string()))))
    };
    match k.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Tab => Some(Command::Window(WindowCommand::CycleFocus)),
        KeyCode::Char('m') => on_active(WindowCommand::ToggleMaximize),
        KeyCode::Char('n') => on_active(WindowCommand::ToggleMinimize),
        KeyCode::Char('x') => on_active(WindowCommand::Close),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as u8 - b'1') as usize;
            Some(Command::Window(WindowCommand::Show(WINDOW_IDS[idx].to_string())))
        }
        _ => None,
    }
}

/// Left press on a title-bar control toggles that control; a left press
/// anywhere else inside a window raises it.
pub fn command_for_mouse(windows: &WindowManager, m: MouseEvent) -> Option<Command> {
    if m.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let (column, row) = (m.column, m.row);
    windows.window_at(column, row)?;
    let target = WindowTarget::At { column, row };
    let cmd = match windows.control_at(column, row) {
        Some(TitleControl::Minimize) => WindowCommand::ToggleMinimize(target),
        Some(TitleControl::Maximize) => WindowCommand::ToggleMaximize(target),
        Some(TitleControl::Close) => WindowCommand::Close(target),
        None => WindowCommand::Focus(target),
    };
    Some(Command::Window(cmd))
}
