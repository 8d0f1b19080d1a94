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

//! Playlist editor view.
//!
//! This module coordinates the `TrackTableState` for the open playlist,
//! holding the tracks in their current, possibly unsaved, order.

mod event;
mod render;

use crate::{
    components::TrackTableState,
    model::{Playlist, PlaylistTracks},
};

pub(crate) struct PlaylistView {
    pub(crate) playlist: Option<Playlist>,
    pub(crate) table_state: TrackTableState,
    /// Cleared while an order change is in flight.
    pub(crate) reorder_enabled: bool,
}

impl PlaylistView {
    pub(crate) fn new() -> Self {
        Self {
            playlist: None,
            table_state: TrackTableState::new(),
            reorder_enabled: true,
        }
    }

    pub(crate) fn set_playlist(&mut self, loaded: PlaylistTracks) {
        self.playlist = Some(loaded.playlist);
        self.table_state.set_tracks(loaded.tracks);
    }

    /// Forgets the open playlist, including any track being held.
    pub(crate) fn clear(&mut self) {
        self.playlist = None;
        self.table_state.set_tracks(vec![]);
    }

    pub(crate) fn is_grabbing(&self) -> bool {
        self.table_state.is_grabbing()
    }

    pub(crate) fn track_count(&self) -> usize {
        self.table_state.tracks.len()
    }
}
