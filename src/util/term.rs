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

//! Terminal emulator background colour.
//!
//! The TUI paints its own background, but the emulator's padding around the
//! cell grid keeps the user's colour. OSC 11 sets the emulator background and
//! OSC 111 restores the user's configured one. Most modern terminals (XTerm,
//! iTerm2, Alacritty, Kitty) understand both; others ignore them.

use std::io::{self, Write};

/// Writes an OSC 11 sequence setting the background to `hex_colour`
/// (e.g. `"#1e1e1e"`) and flushes.
pub(crate) fn set_terminal_bg(out: &mut impl Write, hex_colour: &str) -> io::Result<()> {
    write!(out, "\x1b]11;{}\x07", hex_colour)?;
    out.flush()
}

/// Writes an OSC 111 sequence restoring the configured background and
/// flushes.
pub(crate) fn reset_terminal_bg(out: &mut impl Write) -> io::Result<()> {
    out.write_all(b"\x1b]111\x07")?;
    out.flush()
}
