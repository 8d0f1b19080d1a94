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

//! Playlist editing session.
//!
//! An [`EditSession`] owns everything that belongs to one round of editing a
//! playlist: the move log, the playlist identifier and the save status
//! indicators. The session moves through these states:
//!
//! * [`SessionState::Idle`] - nothing to save.
//! * [`SessionState::Dirty`] - one or more moves recorded.
//! * [`SessionState::Submitting`] - an order change is in flight.
//!
//! A successful submission ends the session; the caller reloads the playlist
//! and continues with [`EditSession::reload`]. A failed submission returns to
//! `Dirty` with the move log untouched so the user can try again.

use tracing::{debug, info, warn};

use crate::{
    backend::{BackendError, OrderChange},
    model::{PlaylistId, moves::MoveLog},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    Idle,
    Dirty,
    Submitting,
}

/// Visibility of the two save status indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Indicators {
    pub(crate) success: bool,
    pub(crate) error: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SubmitDecision {
    /// The move log is empty, there is nothing to send.
    NoMoves,
    /// A previous submission has not completed yet.
    AlreadySubmitting,
    /// Send this order change.
    Send(OrderChange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubmitOutcome {
    /// The order was saved, discard the session and reload the playlist.
    Reload,
    /// The order was not saved, the move log is kept for another attempt.
    Retry,
}

#[derive(Debug)]
pub(crate) struct EditSession {
    playlist: PlaylistId,
    moves: MoveLog,
    submitting: bool,
    indicators: Indicators,
}

impl EditSession {
    pub(crate) fn new(playlist: PlaylistId) -> Self {
        Self {
            playlist,
            moves: MoveLog::new(),
            submitting: false,
            indicators: Indicators::default(),
        }
    }

    pub(crate) fn playlist(&self) -> &PlaylistId {
        &self.playlist
    }

    pub(crate) fn moves(&self) -> &MoveLog {
        &self.moves
    }

    pub(crate) fn indicators(&self) -> Indicators {
        self.indicators
    }

    pub(crate) fn state(&self) -> SessionState {
        if self.submitting {
            SessionState::Submitting
        } else if self.moves.is_empty() {
            SessionState::Idle
        } else {
            SessionState::Dirty
        }
    }

    /// Records a completed reorder gesture in a playlist of `len` tracks.
    ///
    /// Returns `true` if a move was recorded. Gestures that leave the track in
    /// place, gestures with indices outside the playlist and gestures made
    /// while a submission is in flight are ignored.
    pub(crate) fn record_move(&mut self, old_index: usize, new_index: usize, len: usize) -> bool {
        if self.submitting {
            warn!(old_index, new_index, "ignoring reorder while a submission is in flight");
            return false;
        }

        match self.moves.record(old_index, new_index, len) {
            Ok(recorded) => {
                if recorded {
                    debug!(old_index, new_index, count = self.moves.len(), "recorded move");
                }
                recorded
            }
            Err(e) => {
                warn!(error = %e, "ignoring reorder");
                false
            }
        }
    }

    /// Handles a request to save the current order.
    ///
    /// `current_order` is the track ids as currently displayed, used for
    /// diagnostics only; the server replays the moves against its own order.
    pub(crate) fn begin_submission(&mut self, current_order: &[&str]) -> SubmitDecision {
        if self.submitting {
            debug!(playlist = %self.playlist, "submission already in flight");
            return SubmitDecision::AlreadySubmitting;
        }

        if self.moves.is_empty() {
            debug!(playlist = %self.playlist, "no moves");
            return SubmitDecision::NoMoves;
        }

        debug!(playlist = %self.playlist, order = ?current_order, "current order");

        self.submitting = true;
        SubmitDecision::Send(OrderChange::new(self.playlist.clone(), self.moves.moves().to_vec()))
    }

    /// Applies the result of the in-flight submission.
    pub(crate) fn complete_submission(&mut self, result: &Result<(), BackendError>) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(()) => {
                info!(playlist = %self.playlist, moves = self.moves.len(), "order saved");
                self.indicators.error = false;
                self.indicators.success = true;
                SubmitOutcome::Reload
            }
            Err(e) => {
                warn!(playlist = %self.playlist, error = %e, "order not saved");
                self.indicators.success = false;
                self.indicators.error = true;
                SubmitOutcome::Retry
            }
        }
    }

    /// Discards all editing state, keeping the playlist and the last save
    /// status.
    pub(crate) fn reload(self) -> Self {
        Self {
            playlist: self.playlist,
            moves: MoveLog::new(),
            submitting: false,
            indicators: self.indicators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::moves::Move;

    fn session() -> EditSession {
        EditSession::new(PlaylistId::new("42"))
    }

    fn send(decision: SubmitDecision) -> OrderChange {
        match decision {
            SubmitDecision::Send(change) => change,
            other => panic!("expected an order change, got {other:?}"),
        }
    }

    #[test]
    fn new_session_is_idle() {
        let session = session();
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.indicators(), Indicators::default());
    }

    #[test]
    fn recording_a_move_makes_the_session_dirty() {
        let mut session = session();

        assert!(!session.record_move(1, 1, 3));
        assert_eq!(session.state(), SessionState::Idle);

        assert!(session.record_move(0, 1, 3));
        assert_eq!(session.state(), SessionState::Dirty);
    }

    #[test]
    fn out_of_range_moves_are_ignored() {
        let mut session = session();

        assert!(!session.record_move(0, 3, 3));
        assert!(session.moves().is_empty());
    }

    #[test]
    fn empty_move_log_is_not_submitted() {
        let mut session = session();

        assert_eq!(session.begin_submission(&[]), SubmitDecision::NoMoves);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn submission_carries_moves_and_playlist() {
        let mut session = session();
        session.record_move(2, 0, 4);
        session.record_move(1, 3, 4);

        let change = send(session.begin_submission(&["c", "b", "d", "a"]));

        assert_eq!(change.playlist, PlaylistId::new("42"));
        assert_eq!(change.encoded_moves(), vec!["2-0", "1-3"]);
        assert_eq!(session.state(), SessionState::Submitting);
    }

    #[test]
    fn second_confirm_while_in_flight_sends_nothing() {
        let mut session = session();
        session.record_move(0, 1, 2);
        send(session.begin_submission(&[]));

        assert_eq!(session.begin_submission(&[]), SubmitDecision::AlreadySubmitting);
    }

    #[test]
    fn moves_are_refused_while_submitting() {
        let mut session = session();
        session.record_move(0, 1, 3);
        send(session.begin_submission(&[]));

        assert!(!session.record_move(1, 2, 3));
        assert_eq!(session.moves().moves(), &[Move::new(0, 1)]);
    }

    #[test]
    fn success_shows_success_and_resets_on_reload() {
        let mut session = session();
        session.record_move(0, 1, 2);
        send(session.begin_submission(&[]));

        assert_eq!(session.complete_submission(&Ok(())), SubmitOutcome::Reload);
        assert_eq!(session.indicators(), Indicators { success: true, error: false });

        let session = session.reload();
        assert!(session.moves().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.playlist(), &PlaylistId::new("42"));
        assert!(session.indicators().success);
    }

    #[test]
    fn failure_shows_error_and_keeps_moves() {
        let mut session = session();
        session.record_move(0, 1, 2);
        send(session.begin_submission(&[]));

        let outcome = session.complete_submission(&Err(BackendError::Rejected(500)));

        assert_eq!(outcome, SubmitOutcome::Retry);
        assert_eq!(session.indicators(), Indicators { success: false, error: true });
        assert_eq!(session.moves().moves(), &[Move::new(0, 1)]);
        assert_eq!(session.state(), SessionState::Dirty);
    }

    #[test]
    fn retry_after_failure_resends_identical_payload() {
        let mut session = session();
        session.record_move(0, 1, 2);

        let first = send(session.begin_submission(&[]));
        session.complete_submission(&Err(BackendError::Rejected(502)));

        let second = send(session.begin_submission(&[]));
        assert_eq!(first, second);
        assert_eq!(second.encoded_moves(), vec!["0-1"]);

        assert_eq!(session.complete_submission(&Ok(())), SubmitOutcome::Reload);
        assert_eq!(session.indicators(), Indicators { success: true, error: false });
    }
}
