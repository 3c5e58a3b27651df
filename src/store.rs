//! Board storage — one serialized record under one fixed key.
//!
//! DESIGN
//! ======
//! The whole `BoardState` is loaded and saved as a single JSON document; no
//! partial or delta updates. `BoardStore` is a trait object seam so the
//! persistence gateway can be driven against an in-memory store in tests.
//! The bundled `JsonFileStore` keys the record by file path.
//!
//! ERROR HANDLING
//! ==============
//! A missing record is `Ok(None)`, not an error. A record that exists but
//! fails to parse is `Malformed`; `load_or_seed` recovers from every load
//! failure by logging and returning the default seed, so startup never
//! surfaces a storage problem to the user.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::state::{BoardState, default_seed};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed board record: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Load the persisted record. `Ok(None)` when no record exists yet.
    ///
    /// # Errors
    ///
    /// Returns `Malformed` if a record exists but cannot be parsed, or `Io`
    /// if it cannot be read.
    async fn load(&self) -> Result<Option<BoardState>, StoreError>;

    /// Overwrite the persisted record with the given board.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the write fails.
    async fn save(&self, board: &BoardState) -> Result<(), StoreError>;
}

// =============================================================================
// JSON FILE STORE
// =============================================================================

/// File-backed store: the fixed storage key is the file path.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BoardStore for JsonFileStore {
    async fn load(&self) -> Result<Option<BoardState>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let board = serde_json::from_slice(&bytes)?;
        Ok(Some(board))
    }

    async fn save(&self, board: &BoardState) -> Result<(), StoreError> {
        // Infallible for this Serialize impl; treat defensively anyway.
        let bytes = serde_json::to_vec_pretty(board)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

// =============================================================================
// LOAD OR SEED
// =============================================================================

/// Load the board, falling back to the default seed when the record is
/// missing, unreadable, or malformed. Never fails.
pub async fn load_or_seed(store: &dyn BoardStore) -> BoardState {
    match store.load().await {
        Ok(Some(board)) => {
            info!(widgets = board.widgets.len(), mode = u8::from(board.layout_mode), "loaded persisted board");
            board
        }
        Ok(None) => {
            info!("no persisted board; seeding default");
            default_seed()
        }
        Err(e) => {
            warn!(error = %e, "failed to load persisted board; seeding default");
            default_seed()
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
