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

//! UI rendering logic for the playlist view.
//!
//! This module draws the playlist header, with the unsaved move count and
//! save state, and delegates the track list to the track table widget.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::PlaylistView,
    render::Render,
    session::{EditSession, SessionState},
    theme::Theme,
};

impl PlaylistView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, session: Option<&EditSession>, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let mut header_text = match &self.playlist {
            Some(playlist) => format!("{} | {} tracks", playlist, self.track_count()),
            None => "No playlist open".to_string(),
        };

        if let Some(session) = session {
            let moves = session.moves().len();
            match session.state() {
                SessionState::Idle => {}
                SessionState::Dirty => {
                    let _ = write!(header_text, " | {} unsaved moves", moves);
                }
                SessionState::Submitting => {
                    let _ = write!(header_text, " | saving {} moves...", moves);
                }
            }
        }

        if self.is_grabbing() {
            header_text.push_str(" | moving");
        }

        let header = Paragraph::new(header_text)
            .style(Style::default().fg(theme.accent_colour))
            .block(header_block);

        f.render_widget(header, chunks[0]);
        self.table_state.as_widget().draw(f, chunks[1], theme);
    }
}
