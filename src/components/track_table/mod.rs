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

//! Interactive track table widget and state management.
//!
//! This module provides the reorderable table of playlist tracks. It separates
//! persistent state (`TrackTableState`) from the transient widget view
//! (`TrackTable`).
//!
//! Tracks are reordered by grabbing the current row, moving it with the
//! navigation keys and dropping it. The rows move live while a track is held;
//! dropping reports a [`TrackTableAction::ReorderCompleted`] with the index the
//! track was grabbed from and the index it was dropped at. Cancelling a grab
//! puts the track back where it came from.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{Track, moves::Move};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TrackTableAction {
    ReorderCompleted { old_index: usize, new_index: usize },
}

pub(crate) struct TrackTableState {
    pub(crate) tracks: Vec<Track>,
    pub(crate) table_state: TableState,
    /// Index the held track was grabbed from.
    pub(crate) grabbed_from: Option<usize>,
}

impl TrackTableState {
    pub(crate) fn new() -> Self {
        Self {
            tracks: vec![],
            table_state: TableState::new(),
            grabbed_from: None,
        }
    }

    /// Replaces the tracks, keeping the cursor where possible.
    pub(crate) fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        self.grabbed_from = None;

        let selected = match self.table_state.selected() {
            _ if self.tracks.is_empty() => None,
            Some(i) => Some(i.min(self.tracks.len() - 1)),
            None => Some(0),
        };
        self.table_state.select(selected);
    }

    pub(crate) fn is_grabbing(&self) -> bool {
        self.grabbed_from.is_some()
    }

    /// Track ids in display order.
    pub(crate) fn track_ids(&self) -> Vec<&str> {
        self.tracks.iter().map(|t| t.id.as_str()).collect()
    }

    pub(crate) fn as_widget(&mut self) -> TrackTable<'_> {
        TrackTable {
            tracks: &mut self.tracks,
            table_state: &mut self.table_state,
            grabbed_from: &mut self.grabbed_from,
        }
    }
}

pub(crate) struct TrackTable<'a> {
    tracks: &'a mut Vec<Track>,
    table_state: &'a mut TableState,
    grabbed_from: &'a mut Option<usize>,
}

impl<'a> TrackTable<'a> {
    fn goto_next(&mut self) {
        let len = self.tracks.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.tracks.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        self.table_state.select_first();
    }

    fn goto_last(&mut self) {
        self.table_state.select(self.tracks.len().checked_sub(1));
    }

    fn grab_current(&mut self) {
        if let Some(i) = self.table_state.selected().filter(|&i| i < self.tracks.len()) {
            *self.grabbed_from = Some(i);
        }
    }

    /// Moves the held track to `to`, clamped to the table. The cursor follows
    /// the track.
    fn carry_to(&mut self, to: usize) {
        let Some(from) = self.table_state.selected() else { return };
        let len = self.tracks.len();
        if len == 0 || from >= len { return; }

        let to = to.min(len - 1);
        Move::new(from, to).apply(&mut *self.tracks);
        self.table_state.select(Some(to));
    }

    fn carry_down(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.carry_to(i + 1);
        }
    }

    fn carry_up(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.carry_to(i.saturating_sub(1));
        }
    }

    fn drop_held(&mut self) -> Option<TrackTableAction> {
        let old_index = self.grabbed_from.take()?;
        let new_index = self.table_state.selected()?;

        Some(TrackTableAction::ReorderCompleted { old_index, new_index })
    }

    fn cancel_grab(&mut self) {
        if let Some(origin) = self.grabbed_from.take() {
            self.carry_to(origin);
        }
    }

    /// A grab, a single step and a drop in one gesture.
    fn shift(&mut self, down: bool) -> Option<TrackTableAction> {
        let old_index = self.table_state.selected()?;
        *self.grabbed_from = Some(old_index);
        if down {
            self.carry_down();
        } else {
            self.carry_up();
        }
        self.drop_held()
    }
}
