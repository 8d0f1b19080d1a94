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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard), background worker results (server
//! responses) and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: [`handle_event`] updates the [`App`] state and queues tasks
//!    for the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! # Organization
//!
//! * [`handlers`]: State changes for each [`AppEvent`], including the only
//!   code that changes the editing session.
//! * [`key_handlers`]: Keyboard routing between the command line, a held
//!   track, global keys and the active view.
//!
//! Every event ends with reordering being enabled or disabled to match the
//! load and submission state, so a component never decides that on its own.

mod handlers;
mod key_handlers;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView,
    backend::BackendError,
    model::{Playlist, PlaylistId, PlaylistTracks},
    render::draw,
};

use handlers::*;
use key_handlers::process_key_event;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),

    RefreshPlaylists,
    PlaylistsLoaded(Vec<Playlist>),

    OpenPlaylist(PlaylistId),
    ReloadPlaylist,
    PlaylistLoaded(PlaylistTracks),
    PlaylistLoadFailed {
        playlist: PlaylistId,
        message: String,
    },

    ReorderCompleted {
        old_index: usize,
        new_index: usize,
        len: usize,
    },

    ConfirmOrder,
    OrderSubmitted(Result<(), BackendError>),

    Tick,

    ExitApplication,

    Error(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::SetMainView(main_view) => app.main_view = main_view,

        AppEvent::RefreshPlaylists => handle_refresh_playlists(app)?,
        AppEvent::PlaylistsLoaded(playlists) => app.playlists_view.set_playlists(playlists),

        AppEvent::OpenPlaylist(id) => handle_open_playlist(app, id)?,
        AppEvent::ReloadPlaylist => handle_reload_playlist(app)?,
        AppEvent::PlaylistLoaded(loaded) => handle_playlist_loaded(app, loaded),
        AppEvent::PlaylistLoadFailed { playlist, message } => {
            handle_playlist_load_failed(app, playlist, message)
        }

        AppEvent::ReorderCompleted { old_index, new_index, len } => {
            handle_reorder_completed(app, old_index, new_index, len)
        }

        AppEvent::ConfirmOrder => handle_confirm_order(app)?,
        AppEvent::OrderSubmitted(result) => handle_order_submitted(app, result)?,

        AppEvent::Error(message) => handle_error(app, message),

        AppEvent::Tick | AppEvent::ExitApplication => {}
    }

    app.sync_reorder_enabled();

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::{
        config::AppConfig,
        model::{Track, moves::Move},
        session::{Indicators, SessionState},
        tasks::AppTask,
    };

    fn playlist_tracks(names: &[&str]) -> PlaylistTracks {
        PlaylistTracks {
            playlist: Playlist {
                id: PlaylistId::new("42"),
                name: "Mix".to_string(),
                description: String::new(),
                link: String::new(),
            },
            tracks: names
                .iter()
                .map(|name| Track {
                    id: name.to_string(),
                    name: name.to_string(),
                    artists: vec![],
                    album: String::new(),
                    added_by: String::new(),
                    preview_url: None,
                    url: String::new(),
                })
                .collect(),
        }
    }

    /// An app with playlist 42 open and loaded.
    fn open_app(names: &[&str]) -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let config = AppConfig {
            playlist: Some("42".to_string()),
            ..AppConfig::default()
        };
        let mut app = App::new(config, task_tx);

        handle_event(&mut app, AppEvent::OpenPlaylist(PlaylistId::new("42"))).unwrap();
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadPlaylist(_))));
        assert!(!app.playlist_view.reorder_enabled);

        handle_event(&mut app, AppEvent::PlaylistLoaded(playlist_tracks(names))).unwrap();
        assert!(app.playlist_view.reorder_enabled);

        (app, task_rx)
    }

    /// Feeds a key press and then every event it causes, like the main loop.
    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
        while let Ok(event) = app.event_rx.try_recv() {
            handle_event(app, event).unwrap();
        }
    }

    fn submitted(task_rx: &Receiver<AppTask>) -> Vec<String> {
        match task_rx.try_recv() {
            Ok(AppTask::SubmitOrder(change)) => {
                assert_eq!(change.playlist, PlaylistId::new("42"));
                change.encoded_moves()
            }
            other => panic!("expected an order submission, got {other:?}"),
        }
    }

    fn session(app: &App) -> &crate::session::EditSession {
        app.session.as_ref().unwrap()
    }

    fn type_command(app: &mut App, command: &str) {
        press(app, KeyCode::Char(':'));
        for c in command.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    /// Opens playlist 7 without loading it.
    fn open_other(app: &mut App, task_rx: &Receiver<AppTask>) {
        // already remembered, so nothing is written to the config file
        app.config.playlist = Some("7".to_string());
        handle_event(app, AppEvent::OpenPlaylist(PlaylistId::new("7"))).unwrap();
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadPlaylist(id)) if id == PlaylistId::new("7")));
    }

    fn load_failed(id: &str) -> AppEvent {
        AppEvent::PlaylistLoadFailed {
            playlist: PlaylistId::new(id),
            message: "server responded with status 404".to_string(),
        }
    }

    #[test]
    fn gestures_are_recorded_and_submitted() {
        let (mut app, task_rx) = open_app(&["a", "b", "c", "d"]);

        // grab c, carry it to the top, drop
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Char(' '));

        // a grab dropped where it started is not a move
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));

        // shift a down twice from position 1
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::Char('J'));

        assert_eq!(session(&app).moves().moves(), &[Move::new(2, 0), Move::new(1, 2), Move::new(2, 3)]);
        assert_eq!(app.playlist_view.table_state.track_ids(), vec!["c", "b", "d", "a"]);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(submitted(&task_rx), vec!["2-0", "1-2", "2-3"]);
    }

    #[test]
    fn confirm_without_moves_sends_nothing() {
        let (mut app, task_rx) = open_app(&["a", "b"]);

        press(&mut app, KeyCode::Char('s'));

        assert!(task_rx.try_recv().is_err());
        assert_eq!(session(&app).state(), SessionState::Idle);
    }

    #[test]
    fn confirm_while_holding_a_track_is_ignored() {
        let (mut app, task_rx) = open_app(&["a", "b"]);
        press(&mut app, KeyCode::Char('J'));

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('s'));
        assert!(task_rx.try_recv().is_err());

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(submitted(&task_rx), vec!["0-1"]);
    }

    #[test]
    fn reordering_is_locked_while_submitting() {
        let (mut app, task_rx) = open_app(&["a", "b", "c"]);
        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::Char('s'));
        submitted(&task_rx);

        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::Char('s'));

        assert!(task_rx.try_recv().is_err());
        assert_eq!(session(&app).moves().len(), 1);
        assert_eq!(app.playlist_view.table_state.track_ids(), vec!["b", "a", "c"]);
    }

    #[test]
    fn failed_submission_keeps_moves_and_retry_resends_them() {
        let (mut app, task_rx) = open_app(&["a", "b"]);
        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(submitted(&task_rx), vec!["0-1"]);

        handle_event(&mut app, AppEvent::OrderSubmitted(Err(BackendError::Rejected(500)))).unwrap();

        assert_eq!(session(&app).indicators(), Indicators { success: false, error: true });
        assert_eq!(session(&app).moves().moves(), &[Move::new(0, 1)]);
        assert!(app.playlist_view.reorder_enabled);

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(submitted(&task_rx), vec!["0-1"]);

        handle_event(&mut app, AppEvent::OrderSubmitted(Ok(()))).unwrap();

        assert_eq!(session(&app).indicators(), Indicators { success: true, error: false });
        assert!(session(&app).moves().is_empty());
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadPlaylist(id)) if id == PlaylistId::new("42")));
        assert!(app.loading);
    }

    #[test]
    fn saved_order_is_reloaded_from_the_server() {
        let (mut app, task_rx) = open_app(&["a", "b"]);
        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::Char('s'));
        submitted(&task_rx);

        handle_event(&mut app, AppEvent::OrderSubmitted(Ok(()))).unwrap();
        assert!(!app.playlist_view.reorder_enabled);

        handle_event(&mut app, AppEvent::PlaylistLoaded(playlist_tracks(&["b", "a"]))).unwrap();

        assert!(!app.loading);
        assert!(app.playlist_view.reorder_enabled);
        assert_eq!(session(&app).state(), SessionState::Idle);
        assert_eq!(app.playlist_view.table_state.track_ids(), vec!["b", "a"]);
    }

    #[test]
    fn stale_playlist_loads_are_ignored() {
        let (mut app, _task_rx) = open_app(&["a", "b"]);

        let mut other = playlist_tracks(&["x"]);
        other.playlist.id = PlaylistId::new("7");
        handle_event(&mut app, AppEvent::PlaylistLoaded(other)).unwrap();

        assert_eq!(app.playlist_view.table_state.track_ids(), vec!["a", "b"]);
    }

    #[test]
    fn failed_open_leaves_nothing_to_reorder() {
        let (mut app, task_rx) = open_app(&["a", "b", "c"]);
        open_other(&mut app, &task_rx);

        assert!(app.playlist_view.playlist.is_none());
        assert!(app.playlist_view.table_state.track_ids().is_empty());

        handle_event(&mut app, load_failed("7")).unwrap();
        assert!(!app.loading);
        assert!(app.status.is_some());
        assert!(!app.playlist_view.reorder_enabled);

        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::Char('s'));

        assert!(session(&app).moves().is_empty());
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn unrelated_failures_do_not_end_a_pending_load() {
        let (mut app, task_rx) = open_app(&["a", "b", "c"]);
        open_other(&mut app, &task_rx);

        handle_event(&mut app, AppEvent::Error("playlists unavailable".to_string())).unwrap();
        handle_event(&mut app, load_failed("42")).unwrap();

        assert!(app.loading);
        assert!(!app.playlist_view.reorder_enabled);

        let mut loaded = playlist_tracks(&["x", "y"]);
        loaded.playlist.id = PlaylistId::new("7");
        handle_event(&mut app, AppEvent::PlaylistLoaded(loaded)).unwrap();

        assert!(!app.loading);
        assert!(app.playlist_view.reorder_enabled);
        assert_eq!(app.playlist_view.table_state.track_ids(), vec!["x", "y"]);
    }

    #[test]
    fn reload_while_holding_a_track_drops_the_gesture() {
        let (mut app, task_rx) = open_app(&["a", "b", "c"]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('j'));
        assert!(app.playlist_view.is_grabbing());

        type_command(&mut app, "e!");
        assert!(!app.playlist_view.is_grabbing());
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadPlaylist(id)) if id == PlaylistId::new("42")));

        press(&mut app, KeyCode::Char(' '));
        assert!(session(&app).moves().is_empty());

        handle_event(&mut app, AppEvent::PlaylistLoaded(playlist_tracks(&["a", "b", "c"]))).unwrap();
        press(&mut app, KeyCode::Char('s'));

        assert_eq!(app.playlist_view.table_state.track_ids(), vec!["a", "b", "c"]);
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn opening_another_playlist_while_holding_a_track_drops_the_gesture() {
        let (mut app, task_rx) = open_app(&["a", "b", "c"]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('j'));

        app.config.playlist = Some("7".to_string());
        type_command(&mut app, "e 7");
        press(&mut app, KeyCode::Char(' '));

        assert!(!app.playlist_view.is_grabbing());
        assert_eq!(session(&app).playlist(), &PlaylistId::new("7"));
        assert!(session(&app).moves().is_empty());
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadPlaylist(id)) if id == PlaylistId::new("7")));
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn reorders_are_ignored_while_a_playlist_loads() {
        let (mut app, task_rx) = open_app(&["a", "b"]);
        press(&mut app, KeyCode::Char('J'));
        press(&mut app, KeyCode::Char('s'));
        submitted(&task_rx);
        handle_event(&mut app, AppEvent::OrderSubmitted(Ok(()))).unwrap();
        assert!(app.loading);

        handle_event(
            &mut app,
            AppEvent::ReorderCompleted {
                old_index: 0,
                new_index: 1,
                len: 2,
            },
        )
        .unwrap();

        assert!(session(&app).moves().is_empty());
    }
}
