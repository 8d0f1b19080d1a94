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

//! Event routing for the playlists view.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::PlaylistsView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for PlaylistsView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.next(),
                KeyCode::Char('k') | KeyCode::Up => self.previous(),

                KeyCode::Enter => {
                    if let Some(id) = self.selected_id() {
                        event_tx.send(AppEvent::OpenPlaylist(id.clone()))?;
                    }
                }

                _ => {}
            }
        }

        Ok(())
    }
}
