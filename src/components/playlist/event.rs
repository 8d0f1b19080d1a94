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

//! Event routing for the playlist view.
//!
//! This module implements the application event processor for the playlist
//! editor, delegating keyboard input to the underlying track table and
//! forwarding completed reorders to the application.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::Event;

use crate::{
    components::{PlaylistView, TrackTableAction},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for PlaylistView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let action = self
            .table_state
            .as_widget()
            .process_event(&event, self.reorder_enabled);

        if let Some(action) = action {
            match action {
                TrackTableAction::ReorderCompleted { old_index, new_index } => {
                    event_tx.send(AppEvent::ReorderCompleted {
                        old_index,
                        new_index,
                        len: self.track_count(),
                    })?;
                }
            }
        }

        Ok(())
    }
}
