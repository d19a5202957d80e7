//! App state and main loop: input handling, applying polled metrics, and drawing.

use std::{io, time::Duration};

use chrono::{DateTime, Local};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::dashboard::Dashboard;
use crate::http::MetricsClient;
use crate::input::{
    command_for_key, command_for_mouse, Command, CPU_WINDOW, DISK_WINDOW, IO_WINDOW, MEMORY_WINDOW,
};
use crate::poller::{spawn_poller, PollUpdate, SequenceGate};
use crate::ui::{
    chrome::draw_window_frame, cpu::draw_cpu, disks::draw_disks, header::draw_header, io::draw_io,
    mem::draw_mem,
};
use crate::window::WindowManager;

// UI loop sleep between input/redraw passes
const TICK: Duration = Duration::from_millis(50);

pub struct App {
    dashboard: Dashboard,
    windows: WindowManager,
    gate: SequenceGate,

    endpoint: String,
    last_update: Option<DateTime<Local>>,

    // Quit flag
    should_quit: bool,
    // Something other than the charts changed (input, resize, header)
    dirty: bool,
}

impl App {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let mut windows = WindowManager::new();
        windows.add(CPU_WINDOW, "CPU");
        windows.add(MEMORY_WINDOW, "Memory");
        windows.add(IO_WINDOW, "Disk IO");
        windows.add(DISK_WINDOW, "Disk Usage");
        Self {
            dashboard: Dashboard::new(),
            windows,
            gate: SequenceGate::new(),
            endpoint: endpoint.into(),
            last_update: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub async fn run(&mut self, client: MetricsClient, interval: Duration) -> anyhow::Result<()> {
        let (tx, mut rx) = unbounded_channel();
        info!(endpoint = %client.endpoint(), ?interval, "starting poller");
        let poller = spawn_poller(client, interval, tx);

        // Terminal setup
        enable_raw_mode()?;
        let mut terminal = match setup_or_restore(setup_terminal, restore_terminal) {
            Ok(terminal) => terminal,
            Err(e) => {
                poller.abort();
                return Err(e);
            }
        };

        // Main loop
        let res = self.event_loop(&mut terminal, &mut rx).await;
        poller.abort();

        // Teardown
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, DisableMouseCapture, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        rx: &mut UnboundedReceiver<PollUpdate>,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                let ev = event::read()?;
                self.handle_event(ev);
            }
            if self.should_quit {
                break;
            }

            // Apply whatever the poller delivered since the last pass
            while let Ok(update) = rx.try_recv() {
                self.apply_update(update);
            }

            // Draw
            if self.take_redraw() {
                terminal.draw(|f| self.draw(f))?;
            }

            sleep(TICK).await;
        }

        Ok(())
    }

    pub fn handle_event(&mut self, ev: Event) {
        let cmd = match ev {
            Event::Key(k) => command_for_key(k, self.windows.active()),
            Event::Mouse(m) => command_for_mouse(&self.windows, m),
            Event::Resize(_, _) => {
                self.dirty = true;
                None
            }
            _ => None,
        };
        match cmd {
            Some(Command::Quit) => self.should_quit = true,
            Some(Command::Window(wc)) => {
                debug!(?wc, "window command");
                self.windows.dispatch(&wc);
                self.dirty = true;
            }
            None => {}
        }
    }

    /// Apply a polled snapshot unless a newer one was already applied.
    pub fn apply_update(&mut self, update: PollUpdate) -> bool {
        if !self.gate.admit(update.seq) {
            return false;
        }
        self.dashboard.apply(&update.snapshot);
        self.last_update = Some(Local::now());
        true
    }

    fn take_redraw(&mut self) -> bool {
        let charts = self.dashboard.take_redraw_request();
        std::mem::take(&mut self.dirty) || charts
    }

    pub fn draw(&mut self, f: &mut ratatui::Frame<'_>) {
        let area = f.area();

        // Root rows: header, desktop (windows + dock)
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        draw_header(f, rows[0], &self.endpoint, self.last_update.as_ref());
        self.windows.set_desktop(rows[1]);

        // Lowest z first so raised windows cover the rest
        for w in self.windows.draw_order() {
            let Some(frame) = self.windows.frame(w.id()) else {
                continue;
            };
            let inner = draw_window_frame(f, frame, w, self.windows.is_active(w.id()));
            if inner.width == 0 || inner.height == 0 {
                continue;
            }
            match w.id() {
                CPU_WINDOW => draw_cpu(f, inner, &self.dashboard),
                MEMORY_WINDOW => draw_mem(f, inner, &self.dashboard),
                IO_WINDOW => draw_io(f, inner, &self.dashboard),
                DISK_WINDOW => draw_disks(f, inner, self.dashboard.disks()),
                _ => {}
            }
        }
    }
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
    disable_raw_mode()
}

/// Run `setup`; if it fails, undo whatever raw-mode state was already entered
/// before handing the error back.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> anyhow::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> anyhow::Result<T> {
    setup().map_err(|e| {
        if let Err(re) = restore() {
            warn!("restoring terminal after failed setup: {re}");
        }
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let res: anyhow::Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no tty")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(res.unwrap_err().to_string(), "no tty");
        assert!(restored.get());
    }

    #[test]
    fn successful_setup_leaves_terminal_alone() {
        let restored = Cell::new(false);
        let res = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(res.unwrap(), 7);
        assert!(!restored.get());
    }
}
