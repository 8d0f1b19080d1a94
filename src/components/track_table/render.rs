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

//! UI rendering logic for the track table.
//!
//! This module handles the visual representation of track data, including
//! column layout, the held track and theme application using the Ratatui
//! widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::TrackTable, render::Render, theme::Theme};

impl Render for TrackTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_table(f, area, theme);
    }
}

impl TrackTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let holding = self.grabbed_from.is_some();
        let width = self.tracks.len().to_string().len().max(2);

        let rows = self.tracks.iter().enumerate().map(|(index, item)| {
            let position = format!("{:0width$}", index + 1);

            Row::new(vec![
                Cell::from(Line::from(position).style(Style::default().fg(theme.table_position_fg)).alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from(Line::from(item.name.as_str()).style(Style::default().fg(theme.table_track_fg))),
                Cell::from(Line::from(item.artist_names()).style(Style::default().fg(theme.table_artist_fg))),
                Cell::from(Line::from(item.album.as_str()).style(Style::default().fg(theme.table_album_fg))),
                Cell::from(Line::from(item.added_by.as_str()).style(Style::default().fg(theme.table_added_by_fg))),
            ])
        });

        // The held track stands out from the ordinary cursor.
        let highlight = if holding {
            Style::default().bg(theme.accent_colour).fg(Color::Black).bold()
        } else {
            Style::default().bg(Color::Blue).fg(Color::White)
        };

        let table = Table::new(
            rows,
            [
                Constraint::Length(width as u16),
                Constraint::Length(1),
                Constraint::Percentage(35),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(15),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("#").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Title"),
                Cell::from("Artists"),
                Cell::from("Album"),
                Cell::from("Added by"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(highlight)
        .highlight_symbol(if holding { "= " } else { "  " })
        .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}
