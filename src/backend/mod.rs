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

//! Playlist server access.
//!
//! The [`OrderBackend`] trait is the seam between the application and the
//! playlist server. The production implementation is [`http::HttpBackend`];
//! tests substitute an in-memory fake.

pub(crate) mod http;

use thiserror::Error;

use crate::model::{Playlist, PlaylistId, PlaylistTracks, moves::Move};

#[derive(Debug, Error)]
pub(crate) enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Rejected(u16),

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid server url: {0}")]
    InvalidUrl(String),
}

/// A request to persist a new playlist order.
///
/// The moves are replayed by the server, in order, against its stored order
/// for `playlist`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderChange {
    pub(crate) playlist: PlaylistId,
    pub(crate) moves: Vec<Move>,
}

impl OrderChange {
    pub(crate) fn new(playlist: PlaylistId, moves: Vec<Move>) -> Self {
        Self { playlist, moves }
    }

    /// The moves formatted the way the server expects them, `"<from>-<to>"`.
    pub(crate) fn encoded_moves(&self) -> Vec<String> {
        self.moves.iter().map(Move::to_string).collect()
    }

    /// Form fields of the change order request: one `moves[]` entry per move
    /// followed by the playlist identifier.
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields: Vec<(&'static str, String)> = self
            .encoded_moves()
            .into_iter()
            .map(|m| ("moves[]", m))
            .collect();
        fields.push(("playlist", self.playlist.to_string()));
        fields
    }
}

pub(crate) trait OrderBackend: Send {
    fn fetch_playlists(&self) -> Result<Vec<Playlist>, BackendError>;

    fn fetch_playlist(&self, id: &PlaylistId) -> Result<PlaylistTracks, BackendError>;

    /// Submits an order change. Any failure, whether in transport or reported
    /// by the server, is an error.
    fn change_order(&self, change: &OrderChange) -> Result<(), BackendError>;
}

#[cfg(test)]
pub(crate) mod fake {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::model::Track;

    /// In-memory backend that records every order change it receives.
    #[derive(Clone, Default)]
    pub(crate) struct FakeBackend {
        pub(crate) playlists: Vec<Playlist>,
        pub(crate) tracks: Vec<Track>,
        pub(crate) fail_next: Arc<Mutex<Vec<u16>>>,
        pub(crate) received: Arc<Mutex<Vec<OrderChange>>>,
    }

    impl FakeBackend {
        pub(crate) fn with_tracks(playlist: Playlist, names: &[&str]) -> Self {
            let tracks = names
                .iter()
                .map(|name| Track {
                    id: format!("id-{name}"),
                    name: name.to_string(),
                    artists: vec!["Artist".to_string()],
                    album: "Album".to_string(),
                    added_by: "someone".to_string(),
                    preview_url: None,
                    url: String::new(),
                })
                .collect();

            Self {
                playlists: vec![playlist],
                tracks,
                ..Default::default()
            }
        }

        /// Makes the next request fail with `status`.
        pub(crate) fn fail_with(&self, status: u16) {
            self.fail_next.lock().unwrap().push(status);
        }

        fn injected_failure(&self) -> Result<(), BackendError> {
            match self.fail_next.lock().unwrap().pop() {
                Some(status) => Err(BackendError::Rejected(status)),
                None => Ok(()),
            }
        }

        pub(crate) fn received(&self) -> Vec<OrderChange> {
            self.received.lock().unwrap().clone()
        }
    }

    impl OrderBackend for FakeBackend {
        fn fetch_playlists(&self) -> Result<Vec<Playlist>, BackendError> {
            self.injected_failure()?;
            Ok(self.playlists.clone())
        }

        fn fetch_playlist(&self, id: &PlaylistId) -> Result<PlaylistTracks, BackendError> {
            self.injected_failure()?;
            let playlist = self
                .playlists
                .iter()
                .find(|p| &p.id == id)
                .cloned()
                .ok_or(BackendError::Rejected(404))?;

            Ok(PlaylistTracks {
                playlist,
                tracks: self.tracks.clone(),
            })
        }

        fn change_order(&self, change: &OrderChange) -> Result<(), BackendError> {
            self.received.lock().unwrap().push(change.clone());
            self.injected_failure()
        }
    }
}
