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

//! Reusable UI components.
//!
//! Each component owns its widget state and handles the terminal events routed
//! to it. Components never change the editing session
//! directly; they report what happened as an [`AppEvent`](crate::events::AppEvent).
//!
//! # Organization
//!
//! * [`track_table`]: the reorderable table of tracks.
//! * [`playlist`]: the editor view for a single playlist.
//! * [`playlists`]: the list of the user's playlists.

mod playlist;
mod playlists;
mod track_table;

pub(crate) use playlist::PlaylistView;
pub(crate) use playlists::PlaylistsView;
pub(crate) use track_table::{TrackTable, TrackTableAction, TrackTableState};
