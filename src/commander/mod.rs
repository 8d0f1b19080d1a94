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

//! Command line.
//!
//! Pressing `:` activates a vi-style command line. Commands:
//!
//! * `q` - quit.
//! * `w` - save the current order.
//! * `e <playlist>` - open a playlist by id.
//! * `e!` - reload the open playlist, discarding unsaved moves.
//! * `ls` - show and refresh the playlists.
//! * `1`, `2` - switch between the editor and the playlists.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, events::AppEvent, model::PlaylistId};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` if the command line consumed
    /// it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;
                if !buffer.is_empty() {
                    self.run_command(&buffer, event_tx)?;
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] => event_tx.send(AppEvent::ExitApplication)?,

            ["w"] => event_tx.send(AppEvent::ConfirmOrder)?,

            ["e", id] => event_tx.send(AppEvent::OpenPlaylist(PlaylistId::new(*id)))?,
            ["e!"] => event_tx.send(AppEvent::ReloadPlaylist)?,

            ["ls"] => {
                event_tx.send(AppEvent::SetMainView(MainView::Playlists))?;
                event_tx.send(AppEvent::RefreshPlaylists)?;
            }

            ["1"] => event_tx.send(AppEvent::SetMainView(MainView::Playlist))?,
            ["2"] => event_tx.send(AppEvent::SetMainView(MainView::Playlists))?,

            _ => {
                debug!(command = buffer, "unknown command");
                event_tx.send(AppEvent::Error(format!("Unknown command: {buffer}")))?;
            }
        }

        Ok(())
    }
}
