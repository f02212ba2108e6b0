//! Interactive terminal UI
//!
//! Single-threaded event loop: draw, drain progress from the active job,
//! poll one key event. Filesystem work always runs on a worker task.

pub mod item;
pub mod state;
pub mod theme;
pub mod view;

pub use state::{Action, App};
pub use theme::Theme;

use crate::worker::{self, SpawnJob};
use anyhow::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;
use tracing::Dispatch;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Raw-mode alternate-screen terminal, restored on drop
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl Tui {
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        install_panic_hook();
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn restore(&mut self) -> Result<()> {
        if !self.restored {
            self.restored = true;
            disable_raw_mode()?;
            execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
            self.terminal.show_cursor()?;
        }
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}

/// Run the UI until the user quits
///
/// Materializations are spawned relative to `base`.
pub async fn run(app: &mut App, theme: &Theme, base: PathBuf, dispatch: Dispatch) -> Result<()> {
    let mut tui = Tui::enter()?;
    let mut job: Option<SpawnJob> = None;

    loop {
        tui.terminal.draw(|frame| view::render(frame, app, theme))?;

        if let Some(active) = job.as_mut() {
            if drain_events(active, app) {
                if let Some(done) = job.take() {
                    let result = done.finish().await;
                    if let Err(e) = &result {
                        tracing::warn!(error = %e, "spawn failed");
                    }
                    app.on_spawn_finished(result);
                }
                continue;
            }
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match app.handle_key(key) {
                        Action::Quit => break,
                        Action::Spawn {
                            template,
                            repetitions,
                        } => {
                            tracing::info!(
                                template = %template.name,
                                repetitions,
                                "spawn requested"
                            );
                            job = Some(worker::spawn_template(
                                template,
                                repetitions,
                                base.clone(),
                                dispatch.clone(),
                            ));
                        }
                        Action::None => {}
                    }
                }
            }
        }

        tokio::task::yield_now().await;
    }

    tui.restore()
}

/// Move queued progress into the app; true once the channel has closed
fn drain_events(job: &mut SpawnJob, app: &mut App) -> bool {
    loop {
        match job.events.try_recv() {
            Ok(event) => app.on_progress(event),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => return true,
        }
    }
}
