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

//! Input handling and event processing for the track table.
//!
//! This module maps raw terminal keyboard events to table navigation and the
//! grab, carry and drop gestures used to reorder tracks.

use crossterm::event::{Event, KeyCode};

use crate::components::{TrackTable, TrackTableAction};

impl TrackTable<'_> {
    /// Processes a terminal event.
    ///
    /// When `allow_reorder` is false only navigation is handled. A held track
    /// can always be carried, dropped or put back.
    pub(crate) fn process_event(&mut self, event: &Event, allow_reorder: bool) -> Option<TrackTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if self.grabbed_from.is_some() {
            match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.carry_down(),
                KeyCode::Char('k') | KeyCode::Up => self.carry_up(),
                KeyCode::Char('g') | KeyCode::Home => self.carry_to(0),
                KeyCode::Char('G') | KeyCode::End => self.carry_to(usize::MAX),

                KeyCode::Char(' ') | KeyCode::Enter => return self.drop_held(),
                KeyCode::Esc => self.cancel_grab(),

                _ => {}
            }

            return None;
        }

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') | KeyCode::Home => self.goto_first(),
            KeyCode::Char('G') | KeyCode::End => self.goto_last(),

            KeyCode::Char(' ') if allow_reorder => self.grab_current(),

            KeyCode::Char('J') if allow_reorder => return self.shift(true),
            KeyCode::Char('K') if allow_reorder => return self.shift(false),

            _ => {}
        }

        None
    }
}
