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

//! User interface rendering logic.
//!
//! This module translates the [`App`] state into widgets using the `ratatui`
//! framework. The screen is split into the active main view (the playlist
//! editor or the playlist list), a status line and the command line.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Components implement [`Render`] or expose their own
//! `draw` method when they need more of the application state than their own.
//!
//! # Sub-modules
//!
//! * [`status`]: The save indicators, load progress and the last error.
//! * [`commander`]: The `:` prompt and its cursor.

mod commander;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    App, MainView,
    render::{commander::draw_commander, status::draw_status},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: main, status, commander
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    match app.main_view {
        MainView::Playlist => {
            app.playlist_view
                .draw(f, outer[0], app.session.as_ref(), &app.theme)
        }
        MainView::Playlists => app.playlists_view.draw(f, outer[0], &app.theme),
    };

    draw_status(f, outer[1], app);

    draw_commander(f, outer[2], app);
}
