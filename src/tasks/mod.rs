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

//! Background task processing.
//!
//! Server requests block, so they are offloaded from the UI thread to a
//! dedicated worker. The worker translates [`AppTask`] requests into backend
//! calls and reports each result back to the application as an [`AppEvent`],
//! which the UI loop handles like any other event.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{debug, error};

use crate::{
    backend::{OrderBackend, OrderChange},
    events::AppEvent,
    model::PlaylistId,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadPlaylists,
    LoadPlaylist(PlaylistId),
    SubmitOrder(OrderChange),
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `backend` - The playlist server the tasks run against.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    backend: Box<dyn OrderBackend>,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || run_task_worker(backend.as_ref(), task_rx, event_tx));
}

/// Processes tasks until the task channel is closed.
pub(crate) fn run_task_worker(
    backend: &dyn OrderBackend,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    while let Ok(task) = task_rx.recv() {
        let ctx = TaskContext {
            backend,
            event_tx: &event_tx,
        };

        if let Err(e) = handle_task(task, &ctx) {
            error!(error = %e, "task failed");
            let _ = event_tx.send(AppEvent::Error(e.to_string()));
        }
    }

    debug!("task channel closed, worker exiting");
}

struct TaskContext<'a> {
    backend: &'a dyn OrderBackend,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::LoadPlaylists => load_playlists(ctx),
        AppTask::LoadPlaylist(id) => load_playlist(ctx, &id),
        AppTask::SubmitOrder(change) => submit_order(ctx, &change),
    }
}

fn load_playlists(ctx: &TaskContext) -> Result<()> {
    let playlists = ctx.backend.fetch_playlists()?;
    debug!(count = playlists.len(), "loaded playlists");
    ctx.event_tx.send(AppEvent::PlaylistsLoaded(playlists))?;

    Ok(())
}

// A failed load is reported against its playlist so that only the load the
// application is waiting for is ended by it.
fn load_playlist(ctx: &TaskContext, id: &PlaylistId) -> Result<()> {
    let event = match ctx.backend.fetch_playlist(id) {
        Ok(loaded) => {
            debug!(playlist = %id, tracks = loaded.tracks.len(), "loaded playlist");
            AppEvent::PlaylistLoaded(loaded)
        }
        Err(e) => {
            error!(playlist = %id, error = %e, "failed to load playlist");
            AppEvent::PlaylistLoadFailed {
                playlist: id.clone(),
                message: e.to_string(),
            }
        }
    };
    ctx.event_tx.send(event)?;

    Ok(())
}

// The outcome always goes back to the session, success or not, so a failed
// submission is an event rather than a task error.
fn submit_order(ctx: &TaskContext, change: &OrderChange) -> Result<()> {
    let result = ctx.backend.change_order(change);
    ctx.event_tx.send(AppEvent::OrderSubmitted(result))?;

    Ok(())
}
