//! Key and mouse mapping into commands, and their effect on the app.
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use sysdash::app::App;
use sysdash::input::{command_for_key, command_for_mouse, Command};
use sysdash::window::{DisplayMode, WindowCommand, WindowManager, WindowTarget};

fn key(c: KeyCode) -> KeyEvent {
    KeyEvent::new(c, KeyModifiers::NONE)
}

fn press(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn manager() -> WindowManager {
    let mut wm = WindowManager::new();
    wm.add("cpu", "CPU");
    wm.add("memory", "Memory");
    wm.set_desktop(Rect::new(0, 1, 80, 25));
    wm
}

#[test]
fn quit_keys() {
    for c in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
        assert_eq!(command_for_key(key(c), None), Some(Command::Quit));
    }
}

#[test]
fn window_keys_target_the_active_window() {
    assert_eq!(command_for_key(key(KeyCode::Char('m')), None), None);
    assert_eq!(
        command_for_key(key(KeyCode::Char('m')), Some("cpu")),
        Some(Command::Window(WindowCommand::ToggleMaximize(WindowTarget::Id("cpu".into()))))
    );
    assert_eq!(
        command_for_key(key(KeyCode::Char('n')), Some("io")),
        Some(Command::Window(WindowCommand::ToggleMinimize(WindowTarget::Id("io".into()))))
    );
    assert_eq!(
        command_for_key(key(KeyCode::Char('x')), Some("disk")),
        Some(Command::Window(WindowCommand::Close(WindowTarget::Id("disk".into()))))
    );
    assert_eq!(
        command_for_key(key(KeyCode::Tab), None),
        Some(Command::Window(WindowCommand::CycleFocus))
    );
}

#[test]
fn number_keys_show_windows() {
    assert_eq!(
        command_for_key(key(KeyCode::Char('1')), None),
        Some(Command::Window(WindowCommand::Show("cpu".into())))
    );
    assert_eq!(
        command_for_key(key(KeyCode::Char('4')), None),
        Some(Command::Window(WindowCommand::Show("disk".into())))
    );
    assert_eq!(command_for_key(key(KeyCode::Char('5')), None), None);
}

#[test]
fn press_inside_content_focuses() {
    let wm = manager();
    assert_eq!(
        command_for_mouse(&wm, press(10, 5)),
        Some(Command::Window(WindowCommand::Focus(WindowTarget::At { column: 10, row: 5 })))
    );
}

#[test]
fn press_on_controls_toggles() {
    let wm = manager();
    // cpu frame is (0,1,40,12); controls start at 40 - 10 = 30
    assert!(matches!(
        command_for_mouse(&wm, press(30, 1)),
        Some(Command::Window(WindowCommand::ToggleMinimize(_)))
    ));
    assert!(matches!(
        command_for_mouse(&wm, press(33, 1)),
        Some(Command::Window(WindowCommand::ToggleMaximize(_)))
    ));
    assert!(matches!(
        command_for_mouse(&wm, press(36, 1)),
        Some(Command::Window(WindowCommand::Close(_)))
    ));
}

#[test]
fn press_outside_windows_and_other_buttons_ignored() {
    let wm = manager();
    assert_eq!(command_for_mouse(&wm, press(10, 0)), None);
    let right = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        ..press(10, 5)
    };
    assert_eq!(command_for_mouse(&wm, right), None);
}

#[test]
fn app_routes_events_to_the_window_manager() {
    let mut app = App::new("http://127.0.0.1:5000/api/metrics");
    app.handle_event(Event::Key(key(KeyCode::Char('2'))));
    assert_eq!(app.windows().active(), Some("memory"));
    app.handle_event(Event::Key(key(KeyCode::Char('m'))));
    assert_eq!(app.windows().get("memory").unwrap().mode(), DisplayMode::Maximized);
    app.handle_event(Event::Key(key(KeyCode::Char('n'))));
    assert_eq!(app.windows().get("memory").unwrap().mode(), DisplayMode::Minimized);
    assert!(!app.should_quit());
    app.handle_event(Event::Key(key(KeyCode::Char('q'))));
    assert!(app.should_quit());
}
