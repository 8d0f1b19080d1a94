// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Playlist Reorder TUI.
//!
//! A terminal-based editor for the track order of playlists kept on a
//! playlist server.
//!
//! Tracks are reordered locally with grab, move and drop gestures. Each
//! gesture that changes a track's position is recorded as a move, and saving
//! sends the whole sequence of moves to the server, which replays them
//! against its stored order.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering and the
//!   editing session.
//! * A **Background Worker** performs server requests and reports their
//!   results as events.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the worker is handled via `std::sync::mpsc` channels.

mod backend;
mod commander;
mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod session;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{info, warn};

use crate::{
    backend::http::HttpBackend,
    commander::Commander,
    components::{PlaylistView, PlaylistsView},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::PlaylistId,
    session::{EditSession, SessionState},
    tasks::AppTask,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MainView {
    Playlist,
    Playlists,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub commander: Commander,
    pub playlists_view: PlaylistsView,
    pub playlist_view: PlaylistView,

    /// Editing session for the open playlist.
    pub session: Option<EditSession>,
    /// A playlist load is outstanding.
    pub loading: bool,
    /// Last background error.
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            main_view: MainView::Playlists,
            event_tx,
            event_rx,
            task_tx,
            commander: Commander::new(),
            playlists_view: PlaylistsView::new(),
            playlist_view: PlaylistView::new(),
            session: None,
            loading: false,
            status: None,
        }
    }

    /// Tracks may only be moved once the playlist has loaded and while no
    /// order change is in flight.
    pub fn sync_reorder_enabled(&mut self) {
        self.playlist_view.reorder_enabled = !self.loading
            && self.playlist_view.playlist.is_some()
            && self
                .session
                .as_ref()
                .is_some_and(|s| s.state() != SessionState::Submitting);
    }
}

/// The entry point of the application.
///
/// Sets up logging, the server backend and the communication channels,
/// initializes the application state, manages the terminal lifecycle, and
/// returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // Held until exit so buffered log lines are flushed.
    let _log_guard = logging::init(&config).context("Failed to initialise logging")?;

    info!(server = %config.server_url, "starting");

    let backend = HttpBackend::new(&config.server_url).context("Invalid server configuration")?;

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx);
    tasks::spawn_task_worker(Box::new(backend), task_rx, app.event_tx.clone());

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        warn!(error = %e, "exiting with error");
    }

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the user's colour
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&mut io::stdout(), &hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It is best-effort
/// and does not return a result, as it runs during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(&mut io::stdout()).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    app.task_tx.send(AppTask::LoadPlaylists)?;
    if let Some(id) = app.config.playlist.clone() {
        app.event_tx.send(AppEvent::OpenPlaylist(PlaylistId::new(id)))?;
    }

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
