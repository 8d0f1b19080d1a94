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

//! Track moves and the move log.
//!
//! Every completed reorder gesture in the track table becomes a [`Move`]. The
//! [`MoveLog`] keeps the moves in the order they happened so the server can
//! replay them against its own copy of the playlist.
//!
//! Moves are expressed in a live index space: each move refers to positions
//! in the order produced by all of the moves before it.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MoveError {
    #[error("move {from}-{to} is outside a playlist of {len} tracks")]
    IndexOutOfRange { from: usize, to: usize, len: usize },
}

/// The track at position `from` was moved to position `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Move {
    pub(crate) from: usize,
    pub(crate) to: usize,
}

impl Move {
    pub(crate) fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Replays this move against `items`, removing the element at `from` and
    /// inserting it at `to`.
    ///
    /// Out of range moves leave `items` unchanged.
    pub(crate) fn apply<T>(&self, items: &mut Vec<T>) {
        if self.from >= items.len() || self.to >= items.len() {
            return;
        }
        let item = items.remove(self.from);
        items.insert(self.to, item);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Append-only log of the moves made since the playlist was last loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a completed reorder gesture.
    ///
    /// Returns `Ok(false)` when the track ended up where it started, in which
    /// case nothing is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IndexOutOfRange`] if either index does not address
    /// a track in a playlist of `len` tracks. The log is left unchanged.
    pub(crate) fn record(&mut self, from: usize, to: usize, len: usize) -> Result<bool, MoveError> {
        if from >= len || to >= len {
            return Err(MoveError::IndexOutOfRange { from, to, len });
        }

        if from == to {
            return Ok(false);
        }

        self.moves.push(Move::new(from, to));
        Ok(true)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.moves.len()
    }

    pub(crate) fn moves(&self) -> &[Move] {
        &self.moves
    }
}
