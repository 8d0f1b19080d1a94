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

//! Visual styling and colour configuration for the TUI.
//!
//! This module defines the application's colour palette, including the colours
//! of the saved and not-saved indicators, and converts colours from Ratatui's
//! representation into the hexadecimal strings used to set the background of
//! the terminal emulator itself.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,

    pub(crate) success_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) commander_colour: Color,
    pub(crate) commander_bg_colour: Color,

    pub(crate) table_position_fg: Color,
    pub(crate) table_track_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_album_fg: Color,
    pub(crate) table_added_by_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),

            success_colour: Color::Rgb(120, 200, 120),
            error_colour: Color::Rgb(230, 90, 90),

            commander_colour: Color::Rgb(255, 255, 255),
            commander_bg_colour: Color::Rgb(50, 30, 60),

            table_position_fg: Color::Rgb(162, 161, 166),
            table_track_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(255, 215, 0),
            table_album_fg: Color::Rgb(179, 157, 219),
            table_added_by_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background colour via
    /// escape sequences. Colours other than [`Color::Rgb`] have no hex form.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
