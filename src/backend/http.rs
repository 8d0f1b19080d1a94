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

//! HTTP implementation of the playlist server backend.
//!
//! Requests are blocking; the backend is only ever driven from the task
//! worker thread, never from the UI thread.

use reqwest::{
    Url,
    blocking::{Client, RequestBuilder, Response},
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    backend::{BackendError, OrderBackend, OrderChange},
    model::{Playlist, PlaylistId, PlaylistTracks},
};

const CHANGE_ORDER_PATH: &str = "change_order";
const PLAYLISTS_PATH: &str = "api/playlists";
const PLAYLIST_PATH: &str = "api/playlist";

pub(crate) struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    /// Creates a backend for the server at `server_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `server_url` is not an absolute URL or the HTTP
    /// client cannot be built.
    pub(crate) fn new(server_url: &str) -> Result<Self, BackendError> {
        // A trailing slash makes relative joins append rather than replace
        // the last path segment.
        let normalised = format!("{}/", server_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| BackendError::InvalidUrl(format!("{server_url}: {e}")))?;

        // The change order request runs until the server answers.
        let client = Client::builder().timeout(None).build()?;

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::InvalidUrl(format!("{path}: {e}")))
    }

    pub(crate) fn change_order_request(&self, change: &OrderChange) -> Result<RequestBuilder, BackendError> {
        Ok(self
            .client
            .post(self.url(CHANGE_ORDER_PATH)?)
            .form(&change.form_fields()))
    }
}

/// Decodes the JSON body of a successful response.
fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
    let status = response.status();
    if !status.is_success() {
        return Err(BackendError::Rejected(status.as_u16()));
    }

    response.json().map_err(|e| {
        if e.is_decode() {
            BackendError::Decode(e)
        } else {
            BackendError::Transport(e)
        }
    })
}

impl OrderBackend for HttpBackend {
    fn fetch_playlists(&self) -> Result<Vec<Playlist>, BackendError> {
        let response = self.client.get(self.url(PLAYLISTS_PATH)?).send()?;
        read_json(response)
    }

    fn fetch_playlist(&self, id: &PlaylistId) -> Result<PlaylistTracks, BackendError> {
        let mut url = self.url(PLAYLIST_PATH)?;
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidUrl(self.base_url.to_string()))?
            .push(id.as_str());

        let response = self.client.get(url).send()?;
        read_json(response)
    }

    fn change_order(&self, change: &OrderChange) -> Result<(), BackendError> {
        debug!(playlist = %change.playlist, moves = ?change.encoded_moves(), "submitting order change");

        let response = self.change_order_request(change)?.send()?;
        let status = response.status();
        if !status.is_success() {
            warn!(playlist = %change.playlist, status = status.as_u16(), "order change rejected");
            return Err(BackendError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}
