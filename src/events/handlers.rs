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

//! Handlers for application events.
//!
//! The editing session lives on the [`App`]; these functions are the only
//! code that records moves in it or submits it.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::{
    App, MainView,
    backend::BackendError,
    config,
    model::{PlaylistId, PlaylistTracks},
    session::{EditSession, SubmitDecision, SubmitOutcome},
    tasks::AppTask,
};

pub(super) fn handle_refresh_playlists(app: &mut App) -> Result<()> {
    app.task_tx.send(AppTask::LoadPlaylists)?;

    Ok(())
}

/// Starts a new editing session for `id`, abandoning any unsaved moves.
pub(super) fn handle_open_playlist(app: &mut App, id: PlaylistId) -> Result<()> {
    if let Some(session) = &app.session {
        if !session.moves().is_empty() {
            warn!(
                playlist = %session.playlist(),
                moves = session.moves().len(),
                "discarding unsaved moves"
            );
        }
    }

    info!(playlist = %id, "opening playlist");

    app.session = Some(EditSession::new(id.clone()));
    app.playlist_view.clear();
    app.loading = true;
    app.status = None;
    app.main_view = MainView::Playlist;
    app.task_tx.send(AppTask::LoadPlaylist(id.clone()))?;

    if app.config.playlist.as_deref() != Some(id.as_str()) {
        app.config.playlist = Some(id.to_string());
        if let Err(e) = config::save_config(&app.config) {
            warn!(error = %e, "failed to remember playlist");
        }
    }

    Ok(())
}

pub(super) fn handle_reload_playlist(app: &mut App) -> Result<()> {
    match app.session.as_ref().map(|s| s.playlist().clone()) {
        Some(id) => handle_open_playlist(app, id),
        None => Ok(()),
    }
}

pub(super) fn handle_playlist_loaded(app: &mut App, loaded: PlaylistTracks) {
    let current = app.session.as_ref().map(EditSession::playlist);
    if current != Some(&loaded.playlist.id) {
        debug!(playlist = %loaded.playlist.id, "ignoring stale playlist");
        return;
    }

    app.loading = false;
    app.playlist_view.set_playlist(loaded);
}

pub(super) fn handle_reorder_completed(app: &mut App, old_index: usize, new_index: usize, len: usize) {
    // The table no longer shows the order the gesture was made against.
    if app.loading {
        debug!(old_index, new_index, "ignoring reorder while a playlist is loading");
        return;
    }

    match app.session.as_mut() {
        Some(session) => {
            session.record_move(old_index, new_index, len);
        }
        None => debug!(old_index, new_index, "reorder without an open playlist"),
    }
}

/// Submits the move log of the current session, if there is anything to
/// submit and nothing already in flight.
pub(super) fn handle_confirm_order(app: &mut App) -> Result<()> {
    if app.playlist_view.is_grabbing() {
        debug!("ignoring confirm while a track is held");
        return Ok(());
    }

    let Some(session) = app.session.as_mut() else {
        debug!("no playlist open");
        return Ok(());
    };

    let current_order = app.playlist_view.table_state.track_ids();
    match session.begin_submission(&current_order) {
        SubmitDecision::Send(change) => app.task_tx.send(AppTask::SubmitOrder(change))?,
        SubmitDecision::NoMoves | SubmitDecision::AlreadySubmitting => {}
    }

    Ok(())
}

/// Applies the server's answer. A saved order discards the session and
/// reloads the playlist; a failed one keeps the moves for another attempt.
pub(super) fn handle_order_submitted(app: &mut App, result: Result<(), BackendError>) -> Result<()> {
    let Some(session) = app.session.as_mut() else {
        warn!("order submitted without a session");
        return Ok(());
    };

    match session.complete_submission(&result) {
        SubmitOutcome::Reload => {
            let reloaded = app.session.take().map(EditSession::reload);
            if let Some(session) = &reloaded {
                app.task_tx.send(AppTask::LoadPlaylist(session.playlist().clone()))?;
                app.loading = true;
            }
            app.session = reloaded;
        }
        SubmitOutcome::Retry => {}
    }

    Ok(())
}

pub(super) fn handle_playlist_load_failed(app: &mut App, id: PlaylistId, message: String) {
    let current = app.session.as_ref().map(EditSession::playlist);
    if current != Some(&id) {
        debug!(playlist = %id, "ignoring failure of a stale playlist load");
        return;
    }

    warn!(playlist = %id, error = %message, "playlist failed to load");
    app.loading = false;
    app.status = Some(message);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(error = %message, "background task failed");
    app.status = Some(message);
}
