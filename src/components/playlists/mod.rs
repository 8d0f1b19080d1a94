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

//! The user's playlists.
//!
//! A simple selectable list; activating an entry opens that playlist in the
//! editor.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::{Playlist, PlaylistId};

#[derive(Default)]
pub(crate) struct PlaylistsView {
    pub(crate) playlists: Vec<Playlist>,
    pub(crate) list_state: ListState,
}

impl PlaylistsView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_playlists(&mut self, playlists: Vec<Playlist>) {
        self.playlists = playlists;
        self.list_state
            .select(if self.playlists.is_empty() { None } else { Some(0) });
    }

    pub(crate) fn selected_id(&self) -> Option<&PlaylistId> {
        let index = self.list_state.selected()?;
        self.playlists.get(index).map(|playlist| &playlist.id)
    }

    fn next(&mut self) {
        let len = self.playlists.len();
        if len == 0 { return; }
        let i = self.list_state.selected().map_or(0, |i| (i + 1) % len);
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        let len = self.playlists.len();
        if len == 0 { return; }
        let i = self.list_state.selected().map_or(0, |i| (i + len - 1) % len);
        self.list_state.select(Some(i));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::events::{AppEvent, AppEventProcessor};

    fn playlist(id: &str) -> Playlist {
        Playlist {
            id: PlaylistId::new(id),
            name: id.to_uppercase(),
            description: String::new(),
            link: String::new(),
        }
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn enter_opens_the_selected_playlist() {
        let (tx, rx) = mpsc::channel();
        let mut view = PlaylistsView::new();
        view.set_playlists(vec![playlist("a"), playlist("b"), playlist("c")]);

        view.process_event(key(KeyCode::Char('k')), &tx).unwrap();
        assert_eq!(view.selected_id(), Some(&PlaylistId::new("c")));

        view.process_event(key(KeyCode::Char('j')), &tx).unwrap();
        view.process_event(key(KeyCode::Char('j')), &tx).unwrap();
        view.process_event(key(KeyCode::Enter), &tx).unwrap();

        match rx.try_recv() {
            Ok(AppEvent::OpenPlaylist(id)) => assert_eq!(id, PlaylistId::new("b")),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn enter_on_an_empty_list_does_nothing() {
        let (tx, rx) = mpsc::channel();
        let mut view = PlaylistsView::new();

        view.process_event(key(KeyCode::Enter), &tx).unwrap();

        assert!(rx.try_recv().is_err());
    }
}
