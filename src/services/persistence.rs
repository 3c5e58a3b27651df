//! Persistence gateway — debounced, status-tracked board saves.
//!
//! DESIGN
//! ======
//! A background worker owns the debounce: every board change restarts a
//! quiet-period timer, and the whole board is written once when the timer
//! fires. The write snapshots the shared state at fire time, so it always
//! reflects the most recent edits no matter when the timer was scheduled.
//! A manual save bypasses the debounce entirely. Save status (`idle`,
//! `saving`, `saved`) is published on a watch channel for the
//! save-indicator UI; `saved` reverts to `idle` after a fixed display
//! window.
//!
//! ERROR HANDLING
//! ==============
//! A failed write is logged and the status returns to `idle` without ever
//! showing `saved`. There is no retry loop; the next edit or manual save
//! re-attempts.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{error, info, warn};

use crate::state::SharedBoard;
use crate::store::BoardStore;

const DEFAULT_SAVE_DEBOUNCE_MS: u64 = 500;
const DEFAULT_SAVED_DISPLAY_MS: u64 = 1500;
const SIGNAL_QUEUE_CAPACITY: usize = 64;

// =============================================================================
// CONFIG
// =============================================================================

/// Tuning knobs for the save pipeline, loaded from environment variables.
#[derive(Debug, Clone, Copy)]
pub struct PersistenceConfig {
    /// Quiet period after the last change before a write fires.
    pub debounce: Duration,
    /// How long the `saved` indicator stays up before reverting to `idle`.
    pub saved_display: Duration,
}

impl PersistenceConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            debounce: Duration::from_millis(env_parse("SAVE_DEBOUNCE_MS", DEFAULT_SAVE_DEBOUNCE_MS)),
            saved_display: Duration::from_millis(env_parse("SAVED_DISPLAY_MS", DEFAULT_SAVED_DISPLAY_MS)),
        }
    }
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_SAVE_DEBOUNCE_MS),
            saved_display: Duration::from_millis(DEFAULT_SAVED_DISPLAY_MS),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// STATUS
// =============================================================================

/// Save-indicator state machine: `idle → saving → saved → idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

// =============================================================================
// GATEWAY
// =============================================================================

enum Signal {
    /// The board changed; restart the debounce timer.
    Changed,
    /// Explicit user save; write immediately, bypassing the debounce.
    SaveNow,
}

/// Handle to the save worker. Dropping (or `shutdown`) cancels any pending
/// debounce timer without a final write, so teardown never races a save.
pub struct PersistenceGateway {
    tx: mpsc::Sender<Signal>,
    status_rx: watch::Receiver<SaveStatus>,
    task: JoinHandle<()>,
}

impl PersistenceGateway {
    /// Spawn the save worker against the shared board and a store.
    #[must_use]
    pub fn spawn(board: SharedBoard, store: Arc<dyn BoardStore>, config: PersistenceConfig) -> Self {
        let (tx, rx) = mpsc::channel(SIGNAL_QUEUE_CAPACITY);
        let (status_tx, status_rx) = watch::channel(SaveStatus::Idle);

        info!(
            debounce_ms = config.debounce.as_millis(),
            saved_display_ms = config.saved_display.as_millis(),
            "persistence gateway configured"
        );

        let task = tokio::spawn(run_worker(board, store, config, rx, status_tx));
        Self { tx, status_rx, task }
    }

    /// Report a board change. Non-blocking; a full queue is tolerable
    /// because a signal is already pending that will restart the timer.
    pub fn notify_change(&self) {
        if let Err(mpsc::error::TrySendError::Closed(_)) = self.tx.try_send(Signal::Changed) {
            warn!("persistence worker gone; change not scheduled");
        }
    }

    /// Write immediately, skipping the debounce.
    pub fn save_now(&self) {
        if self.tx.try_send(Signal::SaveNow).is_err() {
            warn!("persistence worker unavailable; manual save dropped");
        }
    }

    #[must_use]
    pub fn status(&self) -> SaveStatus {
        *self.status_rx.borrow()
    }

    /// Subscribe to status transitions (save-indicator UI).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SaveStatus> {
        self.status_rx.clone()
    }

    /// Stop the worker, cancelling any pending debounce timer. Changes not
    /// yet written stay unwritten; nothing races teardown.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.task.await;
    }
}

// =============================================================================
// WORKER
// =============================================================================

async fn run_worker(
    board: SharedBoard,
    store: Arc<dyn BoardStore>,
    config: PersistenceConfig,
    mut rx: mpsc::Receiver<Signal>,
    status_tx: watch::Sender<SaveStatus>,
) {
    // Pending debounce deadline and pending saved-indicator revert, if any.
    let mut write_at: Option<Instant> = None;
    let mut revert_at: Option<Instant> = None;

    loop {
        let far = Instant::now() + Duration::from_secs(86_400);
        tokio::select! {
            signal = rx.recv() => match signal {
                Some(Signal::Changed) => {
                    write_at = Some(Instant::now() + config.debounce);
                }
                Some(Signal::SaveNow) => {
                    write_at = None;
                    revert_at = write_current(&board, store.as_ref(), &status_tx, config.saved_display).await;
                }
                // All senders dropped: cancel any pending timer and stop.
                None => break,
            },
            () = sleep_until(write_at.unwrap_or(far)), if write_at.is_some() => {
                write_at = None;
                revert_at = write_current(&board, store.as_ref(), &status_tx, config.saved_display).await;
            }
            () = sleep_until(revert_at.unwrap_or(far)), if revert_at.is_some() => {
                revert_at = None;
                let _ = status_tx.send(SaveStatus::Idle);
            }
        }
    }
}

/// Perform one write of the state current right now, walking the status
/// machine. Returns when the `saved` indicator should revert, or `None`
/// when the write failed.
async fn write_current(
    board: &SharedBoard,
    store: &dyn BoardStore,
    status_tx: &watch::Sender<SaveStatus>,
    saved_display: Duration,
) -> Option<Instant> {
    let _ = status_tx.send(SaveStatus::Saving);

    // Snapshot at fire time, never a capture from when the timer was set.
    let snapshot = board.read().await.clone();
    match store.save(&snapshot).await {
        Ok(()) => {
            let _ = status_tx.send(SaveStatus::Saved);
            Some(Instant::now() + saved_display)
        }
        Err(e) => {
            error!(error = %e, "board save failed; next edit or manual save re-attempts");
            let _ = status_tx.send(SaveStatus::Idle);
            None
        }
    }
}

#[cfg(test)]
#[path = "persistence_test.rs"]
mod tests;
