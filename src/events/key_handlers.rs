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

//! Keyboard routing.
//!
//! Decides which part of the application a key press belongs to. Global keys
//! that act on the editing session, such as saving, are translated into
//! [`AppEvent`]s rather than handled in place.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{App, MainView, events::{AppEvent, AppEventProcessor}};

/// Maps keyboard input to application actions.
///
/// Keys go to the command line first when it is active. While a track is held
/// every key belongs to the playlist editor so the gesture can be completed or
/// cancelled. Otherwise global keys are handled here and anything else is
/// passed to the active view.
///
/// # Errors
///
/// Returns an error if an event fails to send.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    if app.main_view == MainView::Playlist && app.playlist_view.is_grabbing() {
        return app.playlist_view.process_event(event, &app.event_tx);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => app.event_tx.send(AppEvent::ExitApplication)?,

        (KeyCode::Char('1'), _) => app.main_view = MainView::Playlist,
        (KeyCode::Char('2'), _) => app.main_view = MainView::Playlists,

        (KeyCode::Char('s'), KeyModifiers::NONE) | (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ConfirmOrder)?
        }

        (KeyCode::Char('r'), _) if app.main_view == MainView::Playlists => {
            app.event_tx.send(AppEvent::RefreshPlaylists)?
        }

        _ => match app.main_view {
            MainView::Playlist => app.playlist_view.process_event(event, &app.event_tx)?,
            MainView::Playlists => app.playlists_view.process_event(event, &app.event_tx)?,
        },
    }

    Ok(())
}
