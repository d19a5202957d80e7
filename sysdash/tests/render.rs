//! Drawing the whole app into a test backend.
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use sysdash::app::App;
use sysdash::poller::PollUpdate;
use sysdash::types::MetricsSnapshot;

fn snapshot(cpu: f64, used: &str) -> MetricsSnapshot {
    serde_json::from_value(serde_json::json!({
        "cpu": {"percent": cpu, "freq": "2400.00Mhz", "temp_c": 55.0, "temp_f": 131.0},
        "memory": {"percent": 70, "used": used, "total": "8GB"},
        "io": {"read_bytes": "120MB", "write_bytes": "30MB"},
        "disk": [{"mountpoint": "/", "device": "sda1", "used": "20GB", "total": "50GB", "percent": 40}]
    }))
    .unwrap()
}

fn screen(buf: &Buffer) -> String {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    screen(terminal.backend().buffer())
}

#[test]
fn draws_header_and_all_panels() {
    let mut app = App::new("http://host:5000/api/metrics");
    let text = render(&mut app);
    assert!(text.contains("sysdash"));
    assert!(text.contains("waiting for first update"));
    for title in [" CPU ", " Memory ", " Disk IO ", " Disk Usage "] {
        assert!(text.contains(title), "missing {title}\n{text}");
    }
    assert!(text.contains("[_][□][x]"));
    assert!(text.contains("no disks reported"));
}

#[test]
fn draws_values_from_applied_snapshot() {
    let mut app = App::new("http://host:5000/api/metrics");
    assert!(app.apply_update(PollUpdate { seq: 1, snapshot: snapshot(42.0, "5.6GB") }));
    let text = render(&mut app);
    assert!(text.contains("42%"));
    assert!(text.contains("2400.00Mhz"));
    assert!(text.contains("55.0°C / 131.0°F"));
    assert!(text.contains("5.6GB / 8GB"));
    assert!(text.contains("120MB"));
    assert!(text.contains("20GB / 50GB"));
    assert!(text.contains("updated "));
}

#[test]
fn stale_updates_are_discarded() {
    let mut app = App::new("http://host:5000/api/metrics");
    assert!(app.apply_update(PollUpdate { seq: 5, snapshot: snapshot(50.0, "new") }));
    assert!(!app.apply_update(PollUpdate { seq: 3, snapshot: snapshot(10.0, "old") }));
    assert!(!app.apply_update(PollUpdate { seq: 5, snapshot: snapshot(10.0, "old") }));
    assert_eq!(app.dashboard().field("mem-used"), Some("new"));
    assert_eq!(app.dashboard().cpu_series().latest(), Some(50.0));
    assert!(app.apply_update(PollUpdate { seq: 6, snapshot: snapshot(60.0, "newer") }));
    assert_eq!(app.dashboard().field("mem-used"), Some("newer"));
}

#[test]
fn maximized_window_shows_restore_glyph() {
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    let mut app = App::new("http://host:5000/api/metrics");
    let _ = render(&mut app);
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE)));
    app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE)));
    let text = render(&mut app);
    assert!(text.contains("[_][❐][x]"));
    // the other panels are covered
    assert!(!text.contains(" Disk Usage "));
}
